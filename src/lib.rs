//! Slash-command integration core.
//!
//! Decoding and validation primitives for a chat platform's slash-command
//! integration: the escaped mention syntax embedded in command text, the
//! per-invocation context delivered to a handler, and the outbound
//! message/attachment payload a handler may return. Transport, signature
//! verification, and message rendering stay outside this crate; callers
//! hand in decoded request bodies and receive JSON values to serialize.
//!
//! # Architecture
//!
//! - [`Mention`] / [`MentionKind`] parse and render the escaped mention
//!   tokens (`<@U123|bob>`, `<#C456|general>`)
//! - [`CommandContext`] assembles one invocation's fields from a raw
//!   [`FieldBag`] (or a form-urlencoded body) and derives the invoking
//!   user and channel as mention entities
//! - [`ResponsePayload`] / [`Attachment`] define the structured reply
//!   shape; [`is_response_payload`] is the coarse shape test that decides
//!   whether a handler's return value is one
//! - [`CommandRegistry`] routes invocations to registered handlers and
//!   normalizes their replies into the outbound shape

pub mod context;
pub mod dispatch;
mod error;
pub mod mention;
pub mod response;

pub use context::{CommandContext, FieldBag};
pub use dispatch::{CommandHandler, CommandRegistry};
pub use error::Error;
pub use mention::{Mention, MentionKind};
pub use response::{
    Attachment, AttachmentField, MrkdwnTarget, ResponsePayload, is_response_payload,
};
