//! Command registry and reply normalization.
//!
//! Routes a decoded invocation to the handler registered for its command
//! name and normalizes whatever the handler returns into the outbound JSON
//! message shape. Handlers return any [`serde_json::Value`]; values that
//! pass [`is_response_payload`] go out verbatim, everything else is wrapped
//! as a plain-text message. Transport stays with the caller — the registry
//! consumes a decoded [`FieldBag`] and produces a JSON value.

use std::collections::HashMap;

use serde_json::{Value, json};
use tracing::{info, warn};

use crate::context::{CommandContext, FieldBag};
use crate::error::Error;
use crate::response::is_response_payload;

/// A synchronous slash-command handler.
///
/// Blanket-implemented for matching closures, so plain `Fn`s register
/// directly:
///
/// ```
/// use serde_json::json;
/// use slashkit::CommandRegistry;
///
/// let mut registry = CommandRegistry::new();
/// registry.register("/echo", |ctx: &slashkit::CommandContext| {
///     Ok(json!({ "text": ctx.text.clone() }))
/// });
/// ```
pub trait CommandHandler: Send + Sync {
    /// Produces a reply value for one invocation.
    ///
    /// # Errors
    ///
    /// Returns any [`Error`] the handler wants reported to the issuer.
    fn handle(&self, ctx: &CommandContext) -> Result<Value, Error>;
}

impl<F> CommandHandler for F
where
    F: Fn(&CommandContext) -> Result<Value, Error> + Send + Sync,
{
    fn handle(&self, ctx: &CommandContext) -> Result<Value, Error> {
        self(ctx)
    }
}

/// Maps command names to their handlers and dispatches invocations.
///
/// Names are stored without the leading slash, so `register("/deploy", …)`
/// and `register("deploy", …)` address the same handler. The registry has
/// no interior mutability; once built it can be shared across request
/// tasks behind an `Arc`.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers a handler for a command name.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, name: &str, handler: impl CommandHandler + 'static) {
        self.handlers
            .insert(name.trim_start_matches('/').to_string(), Box::new(handler));
    }

    /// Dispatches one invocation from a decoded field bag.
    ///
    /// Builds the [`CommandContext`], looks up the handler by the
    /// context's `command` field (leading slash stripped), runs it, and
    /// normalizes the reply: recognized response payloads pass through
    /// verbatim, anything else becomes `{"text": …}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] when no handler matches, or
    /// whatever error the handler itself produced.
    pub fn dispatch(&self, bag: &FieldBag) -> Result<Value, Error> {
        let ctx = CommandContext::from_fields(bag);
        let name = ctx.command.trim_start_matches('/');
        info!(
            command = name,
            user = ctx.user_name,
            channel = ctx.channel_id,
            "Dispatching slash command"
        );

        let handler = self.handlers.get(name).ok_or_else(|| {
            warn!(command = name, "No handler registered");
            Error::UnknownCommand(ctx.command.clone())
        })?;

        match handler.handle(&ctx) {
            Ok(reply) => Ok(normalize_reply(reply)),
            Err(e) => {
                warn!(command = name, error = %e, "Command handler failed");
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CommandRegistry")
            .field("commands", &names)
            .finish()
    }
}

/// Wraps unrecognized handler output as a plain-text message.
fn normalize_reply(reply: Value) -> Value {
    if is_response_payload(&reply) {
        return reply;
    }
    match reply {
        Value::String(text) => json!({ "text": text }),
        other => json!({ "text": other.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag_for(command: &str) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert("command".to_string(), command.to_string());
        bag.insert("user_name".to_string(), "carol".to_string());
        bag.insert("channel_id".to_string(), "C2".to_string());
        bag
    }

    #[test]
    fn test_should_pass_recognized_payload_through_verbatim() {
        let mut registry = CommandRegistry::new();
        registry.register("/status", |_: &CommandContext| {
            Ok(json!({ "text": "all good", "username": "statusbot" }))
        });
        let reply = registry.dispatch(&bag_for("/status")).unwrap();
        assert_eq!(reply, json!({ "text": "all good", "username": "statusbot" }));
    }

    #[test]
    fn test_should_wrap_plain_string_reply_as_text() {
        let mut registry = CommandRegistry::new();
        registry.register("/ping", |_: &CommandContext| Ok(json!("pong")));
        let reply = registry.dispatch(&bag_for("/ping")).unwrap();
        assert_eq!(reply, json!({ "text": "pong" }));
    }

    #[test]
    fn test_should_wrap_unrecognized_value_as_its_json_text() {
        let mut registry = CommandRegistry::new();
        registry.register("/count", |_: &CommandContext| Ok(json!(5)));
        let reply = registry.dispatch(&bag_for("/count")).unwrap();
        assert_eq!(reply, json!({ "text": "5" }));
    }

    #[test]
    fn test_should_wrap_unrecognized_object_as_its_json_text() {
        let mut registry = CommandRegistry::new();
        registry.register("/raw", |_: &CommandContext| Ok(json!({ "username": "bot" })));
        let reply = registry.dispatch(&bag_for("/raw")).unwrap();
        assert_eq!(reply, json!({ "text": "{\"username\":\"bot\"}" }));
    }

    #[test]
    fn test_should_match_names_with_or_without_leading_slash() {
        let mut registry = CommandRegistry::new();
        registry.register("deploy", |_: &CommandContext| Ok(json!("ok")));
        assert!(registry.dispatch(&bag_for("/deploy")).is_ok());
        assert!(registry.dispatch(&bag_for("deploy")).is_ok());
    }

    #[test]
    fn test_should_fail_on_unregistered_command() {
        let registry = CommandRegistry::new();
        let err = registry.dispatch(&bag_for("/deploy")).unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(c) if c == "/deploy"));
    }

    #[test]
    fn test_should_propagate_handler_error() {
        let mut registry = CommandRegistry::new();
        registry.register("/boom", |ctx: &CommandContext| {
            Err(Error::UnknownCommand(ctx.command.clone()))
        });
        assert!(registry.dispatch(&bag_for("/boom")).is_err());
    }

    #[test]
    fn test_should_expose_handler_context() {
        let mut registry = CommandRegistry::new();
        registry.register("/whoami", |ctx: &CommandContext| {
            Ok(json!({ "text": format!("{} in {}", ctx.user().encode(), ctx.channel_id) }))
        });
        let mut bag = bag_for("/whoami");
        bag.insert("user_id".to_string(), "U9".to_string());
        let reply = registry.dispatch(&bag).unwrap();
        assert_eq!(reply, json!({ "text": "<@U9|carol> in C2" }));
    }

    #[test]
    fn test_should_replace_handler_on_reregistration() {
        let mut registry = CommandRegistry::new();
        registry.register("/v", |_: &CommandContext| Ok(json!("one")));
        registry.register("/v", |_: &CommandContext| Ok(json!("two")));
        let reply = registry.dispatch(&bag_for("/v")).unwrap();
        assert_eq!(reply, json!({ "text": "two" }));
    }
}
