//! Per-invocation command context assembly.
//!
//! An inbound slash-command request decodes to a flat bag of string fields.
//! [`CommandContext::from_fields`] copies the recognized fields verbatim into
//! one immutable value per invocation; [`CommandContext::from_form`] first
//! decodes a form-urlencoded body into that bag. The invoking user and
//! channel are also exposed as derived [`Mention`] entities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::mention::Mention;

/// Raw field bag decoded from an inbound request body.
///
/// Keys are the platform's form field names; unrecognized keys are ignored
/// by [`CommandContext::from_fields`].
pub type FieldBag = HashMap<String, String>;

/// The full set of fields describing one slash-command invocation.
///
/// All fields are platform-supplied strings copied verbatim from the field
/// bag — no trimming, no coercion, no content validation. Fields absent from
/// the bag are empty strings. Construction never fails; semantic validation
/// is the surrounding system's concern.
///
/// # Examples
///
/// ```
/// use slashkit::{CommandContext, FieldBag, Mention};
///
/// let mut bag = FieldBag::new();
/// bag.insert("command".to_string(), "/deploy".to_string());
/// bag.insert("user_id".to_string(), "U9".to_string());
/// bag.insert("user_name".to_string(), "carol".to_string());
///
/// let ctx = CommandContext::from_fields(&bag);
/// assert_eq!(ctx.command, "/deploy");
/// assert_eq!(ctx.user(), Mention::user("U9", "carol"));
/// assert_eq!(ctx.team_id, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandContext {
    /// Legacy verification token.
    pub token: String,
    /// Workspace identifier.
    pub team_id: String,
    /// Workspace domain name.
    pub team_domain: String,
    /// Enterprise grid identifier, empty outside enterprise installs.
    pub enterprise_id: String,
    /// Enterprise grid name, empty outside enterprise installs.
    pub enterprise_name: String,
    /// Channel the command was invoked in.
    pub channel_id: String,
    /// Human-readable channel name.
    pub channel_name: String,
    /// ID of the invoking user.
    pub user_id: String,
    /// Username of the invoking user.
    pub user_name: String,
    /// The slash command itself, with leading slash (e.g., `/deploy`).
    pub command: String,
    /// Free-form text after the command.
    pub text: String,
    /// URL for posting delayed responses to this invocation.
    pub response_url: String,
    /// Short-lived ID for opening modals from this invocation.
    pub trigger_id: String,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::from_fields(&FieldBag::new())
    }
}

/// Returns the bag value for `key`, or an empty string when absent.
fn field(bag: &FieldBag, key: &str) -> String {
    bag.get(key).cloned().unwrap_or_default()
}

impl CommandContext {
    /// Builds a context from a decoded field bag.
    ///
    /// Every recognized field is copied verbatim; extra keys are ignored and
    /// missing keys become empty strings. Total — never fails.
    pub fn from_fields(bag: &FieldBag) -> Self {
        Self {
            token: field(bag, "token"),
            team_id: field(bag, "team_id"),
            team_domain: field(bag, "team_domain"),
            enterprise_id: field(bag, "enterprise_id"),
            enterprise_name: field(bag, "enterprise_name"),
            channel_id: field(bag, "channel_id"),
            channel_name: field(bag, "channel_name"),
            user_id: field(bag, "user_id"),
            user_name: field(bag, "user_name"),
            command: field(bag, "command"),
            text: field(bag, "text"),
            response_url: field(bag, "response_url"),
            trigger_id: field(bag, "trigger_id"),
        }
    }

    /// Builds a context from a form-urlencoded request body.
    ///
    /// Decodes the body into a [`FieldBag`] and delegates to
    /// [`from_fields`](Self::from_fields). The body is the raw POST payload
    /// only — transport and signature verification stay with the caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormDecode`] when the body is not valid
    /// form-urlencoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashkit::CommandContext;
    ///
    /// let body = "command=%2Fdeploy&text=web+prod&user_id=U9&user_name=carol";
    /// let ctx = CommandContext::from_form(body).unwrap();
    /// assert_eq!(ctx.command, "/deploy");
    /// assert_eq!(ctx.text, "web prod");
    /// ```
    pub fn from_form(body: &str) -> Result<Self, Error> {
        let bag: FieldBag = serde_urlencoded::from_str(body)?;
        Ok(Self::from_fields(&bag))
    }

    /// The invoking user as a mention entity.
    ///
    /// Derived directly from `user_id`/`user_name` (raw platform values, no
    /// escaped-text parsing), so it is always a consistent projection of
    /// those fields.
    pub fn user(&self) -> Mention {
        Mention::user(self.user_id.clone(), self.user_name.clone())
    }

    /// The invoked-in channel as a mention entity.
    pub fn channel(&self) -> Mention {
        Mention::channel(self.channel_id.clone(), self.channel_name.clone())
    }
}
