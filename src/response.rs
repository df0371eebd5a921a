//! Outbound message and attachment payload shapes.
//!
//! Defines the wire shape a command handler may return to produce a
//! structured chat message ([`ResponsePayload`], [`Attachment`],
//! [`AttachmentField`]) and [`is_response_payload`], the coarse structural
//! predicate the dispatch layer uses to tell structured responses apart
//! from opaque handler output. Absent optional fields are omitted from the
//! serialized form entirely, never emitted as `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Sub-fields of an [`Attachment`] that may have markup applied.
///
/// Serializes to the platform's lowercase tokens (`pretext`, `text`,
/// `fields`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MrkdwnTarget {
    /// The attachment's `pretext` line.
    Pretext,
    /// The attachment's body `text`.
    Text,
    /// The values of the attachment's `fields`.
    Fields,
}

/// A short titled field rendered inside an attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    /// Heading, rendered bold without markup.
    pub title: String,
    /// Field body; may contain markup and multiple lines.
    pub value: String,
    /// Hint that the field is short enough for side-by-side layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<bool>,
}

/// A rich-content block attachable to an outgoing message.
///
/// Every decoration is optional. Producers should keep the platform's
/// rendering contract in mind: at least one of `text` or `fallback` should
/// be set (an empty string is fine) for the attachment to render; the
/// `author_link`/`author_icon` pair only takes effect alongside
/// `author_name`, `title_link` alongside `title`, and `footer_icon`
/// alongside `footer`. `color` is one of the literal tokens `good`,
/// `warning`, `danger`, or a `#RRGGBB` hex string. None of this is
/// mechanically enforced here.
///
/// # Examples
///
/// ```
/// use slashkit::{Attachment, AttachmentField, MrkdwnTarget};
///
/// let attachment = Attachment {
///     fallback: Some("Deploy finished".to_string()),
///     color: Some("good".to_string()),
///     title: Some("Deploy".to_string()),
///     fields: vec![AttachmentField {
///         title: "Environment".to_string(),
///         value: "prod".to_string(),
///         short: Some(true),
///     }],
///     mrkdwn_in: vec![MrkdwnTarget::Fields],
///     ..Attachment::default()
/// };
/// assert_eq!(attachment.color.as_deref(), Some("good"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Plain-text summary shown where rich content cannot render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    /// Side-bar color: `good`, `warning`, `danger`, or `#RRGGBB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Text shown above the attachment block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    /// Small author line at the top of the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Link target for the author line; needs `author_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    /// Small icon beside the author line; needs `author_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<String>,
    /// Attachment title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Link target for the title; needs `title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    /// Main body text of the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Large image displayed inside the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Small image displayed beside the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    /// Footer line at the bottom of the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Small icon beside the footer; needs `footer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,
    /// Epoch-seconds timestamp rendered in the footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    /// Ordered titled fields rendered as a table-like grid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
    /// Which sub-fields should have markup applied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<MrkdwnTarget>,
}

/// The structured shape a command handler may return.
///
/// All fields are individually optional; what makes a value count as a
/// structured response is the shape test in [`is_response_payload`], not
/// any single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    /// Main message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Display name override for the posting bot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Rich-content blocks appended to the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Whether the platform should apply markup to `text`; platform
    /// default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrkdwn: Option<bool>,
}

impl ResponsePayload {
    /// Serializes the payload to its JSON wire value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_value(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Decides whether a handler return value should be treated as a
/// structured response.
///
/// True iff the value is a JSON object and at least one of the following
/// holds: its `text` member is a string, or its `attachments` member is an
/// array (regardless of element validity). Deliberately coarse — attachment
/// internals, `username`, and `mrkdwn` are not checked, and an empty
/// `attachments` array is accepted. Never fails; values that are not
/// recognized are for the caller to wrap some other way.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use slashkit::is_response_payload;
///
/// assert!(is_response_payload(&json!({"text": "hello"})));
/// assert!(is_response_payload(&json!({"attachments": []})));
/// assert!(!is_response_payload(&json!({"username": "bot"})));
/// assert!(!is_response_payload(&json!("hello")));
/// ```
pub fn is_response_payload(value: &Value) -> bool {
    let Value::Object(members) = value else {
        return false;
    };
    if matches!(members.get("text"), Some(Value::String(_))) {
        return true;
    }
    matches!(members.get("attachments"), Some(Value::Array(_)))
}
