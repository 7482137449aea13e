//! Unit tests for the questions crate
//!
//! Domain invariants are tested directly on the aggregate; use cases
//! are exercised end-to-end against an in-memory repository.

#[cfg(test)]
mod domain_tests {
    use crate::domain::question::{Answer, Question};
    use kernel::id::AnswerId;

    fn question() -> Question {
        Question::new(
            "How do I test aggregates?",
            "Looking for patterns.",
            vec!["rust".to_string(), "testing".to_string()],
            "alice",
        )
    }

    fn accepted_count(question: &Question) -> usize {
        question.answers.iter().filter(|a| a.is_accepted).count()
    }

    #[test]
    fn test_new_answer_defaults() {
        let answer = Answer::new("Use an in-memory repository.", "bob");
        assert_eq!(answer.votes, 0);
        assert!(!answer.is_accepted);
        assert_eq!(answer.answered_by, "bob");
    }

    #[test]
    fn test_new_question_has_no_answers() {
        let q = question();
        assert!(q.answers.is_empty());
        assert_eq!(q.asked_by, "alice");
        assert_eq!(q.created_at, q.updated_at);
    }

    #[test]
    fn test_append_grows_by_one_and_preserves_order() {
        let mut q = question();

        for i in 0..5 {
            let before = q.answers.len();
            q.append_answer(Answer::new(format!("answer {i}"), "bob"));
            assert_eq!(q.answers.len(), before + 1);
        }

        let texts: Vec<&str> = q.answers.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["answer 0", "answer 1", "answer 2", "answer 3", "answer 4"]
        );
    }

    #[test]
    fn test_accept_sets_exactly_one() {
        let mut q = question();
        q.append_answer(Answer::new("first", "bob"));
        q.append_answer(Answer::new("second", "carol"));
        q.append_answer(Answer::new("third", "dave"));

        let target = q.answers[1].answer_id;
        let accepted = q.accept_answer(&target).unwrap();
        assert!(accepted.is_accepted);
        assert_eq!(accepted_count(&q), 1);
        assert!(q.answers[1].is_accepted);
    }

    #[test]
    fn test_reaccept_moves_the_flag() {
        let mut q = question();
        q.append_answer(Answer::new("first", "bob"));
        q.append_answer(Answer::new("second", "carol"));

        let first = q.answers[0].answer_id;
        let second = q.answers[1].answer_id;

        q.accept_answer(&first).unwrap();
        assert!(q.answers[0].is_accepted);

        q.accept_answer(&second).unwrap();
        assert!(!q.answers[0].is_accepted);
        assert!(q.answers[1].is_accepted);
        assert_eq!(accepted_count(&q), 1);
    }

    #[test]
    fn test_accept_invariant_after_any_sequence() {
        let mut q = question();
        for i in 0..4 {
            q.append_answer(Answer::new(format!("answer {i}"), "bob"));
        }

        let ids: Vec<_> = q.answers.iter().map(|a| a.answer_id).collect();
        for &id in [&ids[2], &ids[0], &ids[0], &ids[3], &ids[1]] {
            q.accept_answer(&id).unwrap();
            assert_eq!(accepted_count(&q), 1);
        }
    }

    #[test]
    fn test_accept_unknown_answer_mutates_nothing() {
        let mut q = question();
        q.append_answer(Answer::new("first", "bob"));
        let first = q.answers[0].answer_id;
        q.accept_answer(&first).unwrap();

        let result = q.accept_answer(&AnswerId::new());
        assert!(result.is_err());

        // The previously accepted answer is untouched
        assert!(q.answers[0].is_accepted);
        assert_eq!(accepted_count(&q), 1);
    }

    #[test]
    fn test_answer_lookup() {
        let mut q = question();
        q.append_answer(Answer::new("first", "bob"));

        let id = q.answers[0].answer_id;
        assert!(q.answer(&id).is_some());
        assert!(q.answer(&AnswerId::new()).is_none());
    }

    #[test]
    fn test_tags_are_normalized() {
        let q = Question::new(
            "title",
            "description",
            vec![
                " rust ".to_string(),
                "rust".to_string(),
                "".to_string(),
                "   ".to_string(),
                "axum".to_string(),
            ],
            "alice",
        );
        assert_eq!(q.tags, vec!["rust".to_string(), "axum".to_string()]);
    }
}

#[cfg(test)]
mod vote_tests {
    use crate::domain::vote::VoteType;

    #[test]
    fn test_parse_accepts_only_up_and_down() {
        assert_eq!(VoteType::parse("up"), Some(VoteType::Up));
        assert_eq!(VoteType::parse("down"), Some(VoteType::Down));
        assert_eq!(VoteType::parse("Up"), None);
        assert_eq!(VoteType::parse("sideways"), None);
        assert_eq!(VoteType::parse(""), None);
    }

    #[test]
    fn test_delta() {
        assert_eq!(VoteType::Up.delta(), 1);
        assert_eq!(VoteType::Down.delta(), -1);
    }

    #[test]
    fn test_up_then_down_round_trips() {
        let start: i64 = 7;
        let after = start + VoteType::Up.delta() + VoteType::Down.delta();
        assert_eq!(after, start);
    }
}

#[cfg(test)]
mod application_tests {
    use std::sync::{Arc, Mutex};

    use kernel::id::{AnswerId, QuestionId};

    use crate::application::{
        AcceptAnswerUseCase, AppendAnswerInput, AppendAnswerUseCase, CastVoteInput,
        CastVoteUseCase, CreateQuestionInput, CreateQuestionUseCase, QuestionQueries,
    };
    use crate::domain::question::{Answer, Question};
    use crate::domain::repository::QuestionRepository;
    use crate::error::{QuestionError, QuestionResult};

    /// In-memory repository mirroring the PostgreSQL semantics
    #[derive(Clone, Default)]
    struct MemoryQuestionRepository {
        questions: Arc<Mutex<Vec<Question>>>,
    }

    impl QuestionRepository for MemoryQuestionRepository {
        async fn create(&self, question: &Question) -> QuestionResult<()> {
            self.questions.lock().unwrap().push(question.clone());
            Ok(())
        }

        async fn find_by_id(&self, question_id: &QuestionId) -> QuestionResult<Option<Question>> {
            Ok(self
                .questions
                .lock()
                .unwrap()
                .iter()
                .find(|q| &q.question_id == question_id)
                .cloned())
        }

        async fn list_all(&self) -> QuestionResult<Vec<Question>> {
            let mut all = self.questions.lock().unwrap().clone();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(all)
        }

        async fn update_answers(&self, question: &Question) -> QuestionResult<()> {
            let mut all = self.questions.lock().unwrap();
            let stored = all
                .iter_mut()
                .find(|q| q.question_id == question.question_id)
                .ok_or(QuestionError::QuestionNotFound)?;
            stored.answers = question.answers.clone();
            stored.updated_at = question.updated_at;
            Ok(())
        }

        async fn increment_votes(
            &self,
            question_id: &QuestionId,
            answer_id: &AnswerId,
            delta: i64,
        ) -> QuestionResult<Option<Answer>> {
            let mut all = self.questions.lock().unwrap();
            let Some(question) = all.iter_mut().find(|q| &q.question_id == question_id) else {
                return Ok(None);
            };
            let Some(answer) = question
                .answers
                .iter_mut()
                .find(|a| &a.answer_id == answer_id)
            else {
                return Ok(None);
            };
            answer.votes += delta;
            Ok(Some(answer.clone()))
        }

        async fn find_asked_by(&self, username: &str) -> QuestionResult<Vec<Question>> {
            let mut asked: Vec<Question> = self
                .questions
                .lock()
                .unwrap()
                .iter()
                .filter(|q| q.asked_by == username)
                .cloned()
                .collect();
            asked.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(asked)
        }

        async fn find_answered_by(&self, username: &str) -> QuestionResult<Vec<Question>> {
            let mut answered: Vec<Question> = self
                .questions
                .lock()
                .unwrap()
                .iter()
                .filter(|q| q.answers.iter().any(|a| a.answered_by == username))
                .cloned()
                .collect();
            answered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(answered)
        }
    }

    fn repo() -> Arc<MemoryQuestionRepository> {
        Arc::new(MemoryQuestionRepository::default())
    }

    async fn create_question(repo: &Arc<MemoryQuestionRepository>, asked_by: &str) -> Question {
        CreateQuestionUseCase::new(repo.clone())
            .execute(CreateQuestionInput {
                title: "How do I persist an aggregate?".to_string(),
                description: "Answers embedded or separate table?".to_string(),
                tags: vec!["rust".to_string()],
                asked_by: asked_by.to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title_and_description() {
        let repo = repo();
        let use_case = CreateQuestionUseCase::new(repo.clone());

        let result = use_case
            .execute(CreateQuestionInput {
                title: "   ".to_string(),
                description: "valid".to_string(),
                tags: vec![],
                asked_by: "alice".to_string(),
            })
            .await;
        assert!(matches!(result, Err(QuestionError::Validation(_))));

        let result = use_case
            .execute(CreateQuestionInput {
                title: "valid".to_string(),
                description: "".to_string(),
                tags: vec![],
                asked_by: "alice".to_string(),
            })
            .await;
        assert!(matches!(result, Err(QuestionError::Validation(_))));
    }

    #[tokio::test]
    async fn test_append_rejects_empty_text_and_unknown_question() {
        let repo = repo();
        let question = create_question(&repo, "alice").await;
        let use_case = AppendAnswerUseCase::new(repo.clone());

        let result = use_case
            .execute(AppendAnswerInput {
                question_id: question.question_id,
                text: "  ".to_string(),
                answered_by: "bob".to_string(),
            })
            .await;
        assert!(matches!(result, Err(QuestionError::Validation(_))));

        let result = use_case
            .execute(AppendAnswerInput {
                question_id: QuestionId::new(),
                text: "an answer".to_string(),
                answered_by: "bob".to_string(),
            })
            .await;
        assert!(matches!(result, Err(QuestionError::QuestionNotFound)));
    }

    #[tokio::test]
    async fn test_vote_failure_modes() {
        let repo = repo();
        let question = create_question(&repo, "alice").await;
        let use_case = CastVoteUseCase::new(repo.clone());

        // Invalid vote type
        let question_with_answer = AppendAnswerUseCase::new(repo.clone())
            .execute(AppendAnswerInput {
                question_id: question.question_id,
                text: "an answer".to_string(),
                answered_by: "bob".to_string(),
            })
            .await
            .unwrap();
        let answer_id = question_with_answer.answers[0].answer_id;

        let result = use_case
            .execute(CastVoteInput {
                question_id: question.question_id,
                answer_id,
                vote_type: "sideways".to_string(),
            })
            .await;
        assert!(matches!(result, Err(QuestionError::Validation(_))));

        // Unknown question
        let result = use_case
            .execute(CastVoteInput {
                question_id: QuestionId::new(),
                answer_id,
                vote_type: "up".to_string(),
            })
            .await;
        assert!(matches!(result, Err(QuestionError::QuestionNotFound)));

        // Unknown answer
        let result = use_case
            .execute(CastVoteInput {
                question_id: question.question_id,
                answer_id: AnswerId::new(),
                vote_type: "up".to_string(),
            })
            .await;
        assert!(matches!(result, Err(QuestionError::AnswerNotFound)));
    }

    #[tokio::test]
    async fn test_accept_failure_modes() {
        let repo = repo();
        let question = create_question(&repo, "alice").await;
        let use_case = AcceptAnswerUseCase::new(repo.clone());

        let result = use_case
            .execute(&QuestionId::new(), &AnswerId::new())
            .await;
        assert!(matches!(result, Err(QuestionError::QuestionNotFound)));

        let result = use_case
            .execute(&question.question_id, &AnswerId::new())
            .await;
        assert!(matches!(result, Err(QuestionError::AnswerNotFound)));
    }

    #[tokio::test]
    async fn test_full_answer_vote_accept_scenario() {
        let repo = repo();
        let question = create_question(&repo, "alice").await;

        // Alice answers her own question
        let updated = AppendAnswerUseCase::new(repo.clone())
            .execute(AppendAnswerInput {
                question_id: question.question_id,
                text: "Embed the answers.".to_string(),
                answered_by: "alice".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(updated.answers.len(), 1);
        let first = updated.answers[0].clone();
        assert_eq!(first.answered_by, "alice");
        assert_eq!(first.votes, 0);
        assert!(!first.is_accepted);

        // Two up-votes, then one down-vote
        let votes = CastVoteUseCase::new(repo.clone());
        for _ in 0..2 {
            votes
                .execute(CastVoteInput {
                    question_id: question.question_id,
                    answer_id: first.answer_id,
                    vote_type: "up".to_string(),
                })
                .await
                .unwrap();
        }
        let after_up = repo
            .find_by_id(&question.question_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after_up.answers[0].votes, 2);

        let after_down = votes
            .execute(CastVoteInput {
                question_id: question.question_id,
                answer_id: first.answer_id,
                vote_type: "down".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(after_down.votes, 1);

        // Accept the first answer
        let accept = AcceptAnswerUseCase::new(repo.clone());
        let accepted = accept
            .execute(&question.question_id, &first.answer_id)
            .await
            .unwrap();
        assert!(accepted.is_accepted);

        // A second answer arrives and gets accepted instead
        let updated = AppendAnswerUseCase::new(repo.clone())
            .execute(AppendAnswerInput {
                question_id: question.question_id,
                text: "Use a separate table.".to_string(),
                answered_by: "bob".to_string(),
            })
            .await
            .unwrap();
        let second = updated.answers[1].clone();

        accept
            .execute(&question.question_id, &second.answer_id)
            .await
            .unwrap();

        let stored = repo
            .find_by_id(&question.question_id)
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.answers[0].is_accepted);
        assert!(stored.answers[1].is_accepted);
        assert_eq!(
            stored.answers.iter().filter(|a| a.is_accepted).count(),
            1
        );
    }

    #[tokio::test]
    async fn test_votes_can_go_negative() {
        let repo = repo();
        let question = create_question(&repo, "alice").await;
        let updated = AppendAnswerUseCase::new(repo.clone())
            .execute(AppendAnswerInput {
                question_id: question.question_id,
                text: "Controversial take.".to_string(),
                answered_by: "bob".to_string(),
            })
            .await
            .unwrap();

        let answer = CastVoteUseCase::new(repo.clone())
            .execute(CastVoteInput {
                question_id: question.question_id,
                answer_id: updated.answers[0].answer_id,
                vote_type: "down".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(answer.votes, -1);
    }

    #[tokio::test]
    async fn test_queries_list_get_and_profile() {
        let repo = repo();
        let queries = QuestionQueries::new(repo.clone());

        let first = create_question(&repo, "alice").await;
        let second = create_question(&repo, "bob").await;

        // Most recent first
        let listed = queries.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].question_id, second.question_id);
        assert_eq!(listed[1].question_id, first.question_id);

        // Get by id
        let fetched = queries.get(&first.question_id).await.unwrap();
        assert_eq!(fetched.question_id, first.question_id);
        assert!(matches!(
            queries.get(&QuestionId::new()).await,
            Err(QuestionError::QuestionNotFound)
        ));

        // Alice answers her own question: it shows up in both sequences
        AppendAnswerUseCase::new(repo.clone())
            .execute(AppendAnswerInput {
                question_id: first.question_id,
                text: "Answering myself.".to_string(),
                answered_by: "alice".to_string(),
            })
            .await
            .unwrap();

        let activity = queries.profile_activity("alice").await.unwrap();
        assert_eq!(activity.asked.len(), 1);
        assert_eq!(activity.answered.len(), 1);
        assert_eq!(activity.asked[0].question_id, first.question_id);
        assert_eq!(activity.answered[0].question_id, first.question_id);

        // Bob asked one and answered none
        let activity = queries.profile_activity("bob").await.unwrap();
        assert_eq!(activity.asked.len(), 1);
        assert!(activity.answered.is_empty());
    }
}
