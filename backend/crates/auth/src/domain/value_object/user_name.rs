//! User Name Value Object
//!
//! ユーザー名は、ユーザーを識別するための**公開識別子（ハンドル）**。
//! 質問・回答の `askedBy` / `answeredBy` への帰属にも使用される。
//!
//! ## 設計方針
//! - ASCII文字のみ許可（a-z, 0-9, _ . - +）
//! - 大文字入力は受け付けるが、保存形は小文字（canonical）
//! - NFKC正規化 → 検証 → 小文字化 の順で処理
//!
//! ## 不変条件
//! - 長さ: 3〜30文字（正規化後）
//! - 先頭・末尾: 英数字または `_`
//! - 連続ドット禁止（`..`）
//! - 英数字を最低1文字含む（記号のみ禁止）

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

/// Minimum length for a username (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for a username (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Allowed special characters in a username
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

/// Reserved words that cannot be used as usernames
///
/// Route segments and operational names that would collide with the API
/// surface or impersonate staff.
const RESERVED_WORDS: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "system",
    "moderator",
    "staff",
    "support",
    "api",
    "auth",
    "login",
    "register",
    "questions",
    "answers",
    "user",
    "users",
    "me",
    "anonymous",
    "null",
    "undefined",
];

/// Username value object (canonical, lowercased form)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new username with validation
    ///
    /// Input is NFKC-normalized, validated, then lowercased; the stored
    /// canonical form is what every later comparison uses.
    pub fn new(input: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = input.as_ref().trim().nfkc().collect();
        let canonical = normalized.to_lowercase();

        let char_count = canonical.chars().count();
        if char_count < USER_NAME_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at least {} characters",
                USER_NAME_MIN_LENGTH
            )));
        }
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if !canonical
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || ALLOWED_SPECIAL_CHARS.contains(&c))
        {
            return Err(AppError::bad_request(
                "Username may only contain letters, digits, and _ . - +",
            ));
        }

        // First and last character: alphanumeric or underscore
        let first = canonical.chars().next().unwrap_or(' ');
        let last = canonical.chars().last().unwrap_or(' ');
        for ch in [first, last] {
            if !(ch.is_ascii_alphanumeric() || ch == '_') {
                return Err(AppError::bad_request(
                    "Username must start and end with a letter, digit, or underscore",
                ));
            }
        }

        if canonical.contains("..") {
            return Err(AppError::bad_request(
                "Username must not contain consecutive dots",
            ));
        }

        if !canonical.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::bad_request(
                "Username must contain at least one letter or digit",
            ));
        }

        if RESERVED_WORDS.contains(&canonical.as_str()) {
            return Err(AppError::bad_request("This username is reserved"));
        }

        Ok(Self(canonical))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the canonical username
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for UserName {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        UserName::new(s)
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_valid() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("alice.b-42").is_ok());
        assert!(UserName::new("_underscore_").is_ok());
    }

    #[test]
    fn test_user_name_canonicalized_to_lowercase() {
        let name = UserName::new("Alice").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_user_name_length_bounds() {
        assert!(UserName::new("ab").is_err());
        assert!(UserName::new("a".repeat(31)).is_err());
        assert!(UserName::new("abc").is_ok());
        assert!(UserName::new("a".repeat(30)).is_ok());
    }

    #[test]
    fn test_user_name_invalid_characters() {
        assert!(UserName::new("has space").is_err());
        assert!(UserName::new("émile").is_err());
        assert!(UserName::new("semi;colon").is_err());
    }

    #[test]
    fn test_user_name_edge_characters() {
        assert!(UserName::new(".dotfirst").is_err());
        assert!(UserName::new("dotlast.").is_err());
        assert!(UserName::new("dot..dot").is_err());
        assert!(UserName::new("...").is_err()); // no alphanumeric
    }

    #[test]
    fn test_user_name_reserved() {
        assert!(UserName::new("admin").is_err());
        assert!(UserName::new("Admin").is_err()); // reserved check is canonical
        assert!(UserName::new("adminable").is_ok());
    }
}
