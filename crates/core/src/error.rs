//! Validation errors reported back to the user.
//!
//! Every variant is detected before the sequence is touched. The `Display`
//! text is the message shown in the notification.

use std::fmt;

/// The four user-facing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Delete,
    Search,
    Update,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Delete => "delete",
            Operation::Search => "search",
            Operation::Update => "update",
        }
    }

    /// Message used when a required field is blank.
    fn missing_input_message(self) -> &'static str {
        match self {
            Operation::Insert => "Provide both value and index for insert.",
            Operation::Delete => "Provide index to delete.",
            Operation::Search => "Provide value to search.",
            Operation::Update => "Provide both value and index to update.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from controller operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("{}", .op.missing_input_message())]
    MissingInput { op: Operation },

    #[error("Invalid index")]
    InvalidIndex { raw: String },

    #[error("Invalid index for {op}. Allowed: 0 to {max}")]
    IndexOutOfRange { op: Operation, index: i64, max: usize },

    #[error("Array is empty")]
    Empty,

    #[error("Value not found")]
    NotFound { value: String },
}

pub type SequenceResult<T> = Result<T, SequenceError>;
