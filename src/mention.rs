//! Escaped mention codec for users and channels.
//!
//! The platform embeds user and channel references inside command text as
//! escaped tokens: `<@U123|bob>` for users, `<#C456|general>` for channels.
//! This module renders [`Mention`] values into that syntax and parses tokens
//! back into values. Parsing is strict: the token must span the entire input,
//! carry the sigil of the requested [`MentionKind`], and have non-empty id
//! and name segments.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kind of entity a mention refers to.
///
/// Determines the sigil used in the escaped token (`@` for users, `#` for
/// channels) and which pattern [`Mention::parse`] matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionKind {
    /// A user mention, rendered with the `@` sigil.
    User,
    /// A channel mention, rendered with the `#` sigil.
    Channel,
}

impl MentionKind {
    /// Returns the sigil character used in the escaped token.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashkit::MentionKind;
    ///
    /// assert_eq!(MentionKind::User.sigil(), '@');
    /// assert_eq!(MentionKind::Channel.sigil(), '#');
    /// ```
    pub const fn sigil(self) -> char {
        match self {
            Self::User => '@',
            Self::Channel => '#',
        }
    }
}

impl std::fmt::Display for MentionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Channel => write!(f, "channel"),
        }
    }
}

/// A reference to a platform user or channel, as a structured entity.
///
/// `id` is the opaque platform identifier; `name` is the display name. The
/// encoder performs no escaping, so a faithful round trip requires that
/// neither contains `<`, `>`, or `|`.
///
/// # Examples
///
/// ```
/// use slashkit::{Mention, MentionKind};
///
/// let m = Mention::user("U123", "bob");
/// assert_eq!(m.encode(), "<@U123|bob>");
/// assert_eq!(Mention::parse("<@U123|bob>", MentionKind::User).unwrap(), m);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// Which kind of entity this mention refers to.
    pub kind: MentionKind,
    /// Opaque platform identifier (e.g., `U123`, `C456`).
    pub id: String,
    /// Display name shown in place of the token.
    pub name: String,
}

/// Anchored token pattern for user mentions: `<@id|name>`.
static USER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<@([^|]+)\|([^>]+)>$").expect("valid user token pattern"));

/// Anchored token pattern for channel mentions: `<#id|name>`.
static CHANNEL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<#([^|]+)\|([^>]+)>$").expect("valid channel token pattern"));

impl Mention {
    /// Creates a user mention from already-known id and name.
    ///
    /// No validation is performed; this path is for trusted
    /// platform-supplied values that are already unescaped.
    pub fn user(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: MentionKind::User,
            id: id.into(),
            name: name.into(),
        }
    }

    /// Creates a channel mention from already-known id and name.
    pub fn channel(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: MentionKind::Channel,
            id: id.into(),
            name: name.into(),
        }
    }

    /// Parses an escaped mention token of the given kind.
    ///
    /// The whole input must be a single token: sigil matching `kind`, a
    /// non-empty id segment, `|`, a non-empty name segment, all enclosed in
    /// angle brackets. Embedded tokens, surrounding text, and tokens of the
    /// other kind are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMention`] carrying the input text and the
    /// expected kind when the input does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashkit::{Mention, MentionKind};
    ///
    /// let m = Mention::parse("<#C456|general>", MentionKind::Channel).unwrap();
    /// assert_eq!(m.id, "C456");
    /// assert_eq!(m.name, "general");
    ///
    /// assert!(Mention::parse("<#C456|general>", MentionKind::User).is_err());
    /// ```
    pub fn parse(text: &str, kind: MentionKind) -> Result<Self, Error> {
        let pattern = match kind {
            MentionKind::User => &USER_TOKEN,
            MentionKind::Channel => &CHANNEL_TOKEN,
        };
        let caps = pattern.captures(text).ok_or_else(|| Error::InvalidMention {
            text: text.to_string(),
            expected: kind,
        })?;
        Ok(Self {
            kind,
            id: caps[1].to_string(),
            name: caps[2].to_string(),
        })
    }

    /// Renders the mention as its escaped token.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashkit::Mention;
    ///
    /// assert_eq!(Mention::channel("C456", "general").encode(), "<#C456|general>");
    /// ```
    pub fn encode(&self) -> String {
        format!("<{}{}|{}>", self.kind.sigil(), self.id, self.name)
    }
}

impl std::fmt::Display for Mention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}{}|{}>", self.kind.sigil(), self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── encoding ────────────────────────────────────────────────────

    #[test]
    fn test_should_encode_user_mention_exactly() {
        assert_eq!(Mention::user("U123", "bob").encode(), "<@U123|bob>");
    }

    #[test]
    fn test_should_encode_channel_mention_exactly() {
        assert_eq!(Mention::channel("C456", "general").encode(), "<#C456|general>");
    }

    #[test]
    fn test_should_display_same_as_encode() {
        let m = Mention::user("U7", "dana");
        assert_eq!(m.to_string(), m.encode());
    }

    // ── parsing ─────────────────────────────────────────────────────

    #[test]
    fn test_should_parse_user_token() {
        let m = Mention::parse("<@U1|alice>", MentionKind::User).unwrap();
        assert_eq!(m, Mention::user("U1", "alice"));
    }

    #[test]
    fn test_should_parse_channel_token() {
        let m = Mention::parse("<#C2|eng>", MentionKind::Channel).unwrap();
        assert_eq!(m, Mention::channel("C2", "eng"));
    }

    #[test]
    fn test_should_round_trip_both_kinds() {
        for m in [
            Mention::user("U123", "bob"),
            Mention::channel("C456", "general"),
            Mention::user("W-1.2", "name with spaces"),
        ] {
            assert_eq!(Mention::parse(&m.encode(), m.kind).unwrap(), m);
        }
    }

    #[test]
    fn test_should_reject_wrong_sigil() {
        assert!(Mention::parse("<#C1|general>", MentionKind::User).is_err());
        assert!(Mention::parse("<@U1|alice>", MentionKind::Channel).is_err());
    }

    #[test]
    fn test_should_reject_embedded_token() {
        assert!(Mention::parse("prefix<@U1|alice>", MentionKind::User).is_err());
        assert!(Mention::parse("<@U1|alice>suffix", MentionKind::User).is_err());
    }

    #[test]
    fn test_should_reject_empty_segments() {
        assert!(Mention::parse("<@|alice>", MentionKind::User).is_err());
        assert!(Mention::parse("<@U1|>", MentionKind::User).is_err());
        assert!(Mention::parse("<@|>", MentionKind::User).is_err());
    }

    #[test]
    fn test_should_reject_empty_and_malformed_input() {
        assert!(Mention::parse("", MentionKind::User).is_err());
        assert!(Mention::parse("@U1|alice", MentionKind::User).is_err());
        assert!(Mention::parse("<@U1 alice>", MentionKind::User).is_err());
    }

    #[test]
    fn test_should_report_text_and_kind_in_error() {
        let err = Mention::parse("bogus", MentionKind::Channel).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("channel"));
    }
}
