//! Error types for the slash-command core.
//!
//! Defines [`Error`] as the primary error type for all operations
//! within `slashkit`.

use thiserror::Error;

use crate::mention::MentionKind;

/// Error type for slashkit operations.
///
/// Mention parse failures and unknown commands are user-facing: their
/// display strings are meant to be reported back to the command issuer,
/// not logged as internal faults.
///
/// # Examples
///
/// ```
/// use slashkit::{Error, MentionKind};
///
/// let err = Error::InvalidMention {
///     text: "oops".to_string(),
///     expected: MentionKind::User,
/// };
/// assert_eq!(err.to_string(), "\"oops\" is not a valid user mention");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Input text did not match the escaped mention syntax for the
    /// requested kind.
    #[error("{text:?} is not a valid {expected} mention")]
    InvalidMention {
        /// The offending input text.
        text: String,
        /// The mention kind the caller asked for.
        expected: MentionKind,
    },

    /// A form-urlencoded body could not be decoded into a field bag.
    #[error("Form decode error: {0}")]
    FormDecode(#[from] serde_urlencoded::de::Error),

    /// No handler is registered for the invoked command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_invalid_mention_with_text_and_kind() {
        let err = Error::InvalidMention {
            text: "<#C1|general>".to_string(),
            expected: MentionKind::User,
        };
        let msg = err.to_string();
        assert!(msg.contains("<#C1|general>"));
        assert!(msg.contains("user"));
    }

    #[test]
    fn test_should_display_unknown_command() {
        let err = Error::UnknownCommand("/deploy".to_string());
        assert_eq!(err.to_string(), "Unknown command: /deploy");
    }

    #[test]
    fn test_should_convert_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
