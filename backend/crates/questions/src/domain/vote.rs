//! Vote Value Object

use std::fmt;

/// Direction of a vote on an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// Parse the wire value; only `"up"` and `"down"` are accepted
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "up" => Some(VoteType::Up),
            "down" => Some(VoteType::Down),
            _ => None,
        }
    }

    /// Delta applied to an answer's vote counter
    ///
    /// There is no floor: a down-voted answer may go negative.
    pub fn delta(&self) -> i64 {
        match self {
            VoteType::Up => 1,
            VoteType::Down => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Up => "up",
            VoteType::Down => "down",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
