//! Chat: `say`, `sayteam` & `saytell` lines -- which may carry bot commands -- and radio messages.
//!
//! A message starting with one of the [Prefix] sigils is a command: `!kick 3 cheating` has the handle `kick`
//! and the params `3 cheating`. A doubled sigil (`!!hello`) stands for the configured alias command, with
//! the rest of the message as its params. A lone sigil is just chat.

use model::{
    Slot,
    client::Client,
    command::{Command, Prefix},
    events::Event,
};
use regex::Captures;
use urt_server_log::text::strip_colors;
use crate::errors::HandlerError;
use crate::parser::ParserContext;
use crate::queues::Emission;
use super::{field, parse_field, slot_field, HandlerResult};


/// Who a chat message was meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Audience {
    Everybody,
    Team,
    Private(Slot),
}

/// A command found in a chat message
#[derive(Debug, PartialEq, Eq)]
struct DetectedCommand {
    prefix: Prefix,
    handle: String,
    params: Option<String>,
}

pub fn on_say(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    chat(ctx, captures, Audience::Everybody)
}

pub fn on_say_team(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    chat(ctx, captures, Audience::Team)
}

pub fn on_say_tell(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    chat(ctx, captures, Audience::Private(slot_field(captures, "target")?))
}

pub fn on_radio(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let group = parse_field(captures, "group")?;
    let message_id = parse_field(captures, "id")?;
    let location = field(captures, "location")?.to_string();
    let message = field(captures, "message")?.to_string();
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::Radio { client, group, message_id, location, message })))
}


fn chat(ctx: &ParserContext, captures: &Captures, audience: Audience) -> HandlerResult {
    let (client, message) = speaker(ctx, slot_field(captures, "slot")?, captures)?;
    let message = message.trim();
    if message.is_empty() {
        return Err(HandlerError::EmptyMessage)
    }

    if let Some(DetectedCommand { prefix, handle, params }) = detect_command(message, &ctx.config().command_alias) {
        return Ok(Some(Emission::Command(Command::new(client, prefix, &handle, params, false))))
    }

    let message = message.to_string();
    let event = match audience {
        Audience::Everybody => Event::Say { client, message },
        Audience::Team => Event::SayTeam { client, message },
        Audience::Private(target_slot) => Event::SayPrivate { client, target: ctx.client_at(target_slot)?, message },
    };
    Ok(Some(Emission::Event(event)))
}

/// The speaker & the message it said.\
/// The client at `slot` is taken if the said text starts with its name -- which may contain `:`, so the
/// name/message split of the line format can't be relied on for it.
/// Otherwise (non-dedicated servers are known to report wrong slots), the only connected client with the
/// name before the first `:`.
fn speaker<'t>(ctx: &ParserContext, slot: Slot, captures: &Captures<'t>) -> Result<(Client, &'t str), HandlerError> {
    if let Some(client) = ctx.registry().get_by_slot(slot) {
        if let Some(message) = said_text(captures).and_then(|said| message_after_name(said, &client.name)) {
            return Ok((client, message))
        }
    }
    let name = strip_colors(field(captures, "name")?);
    let message = field(captures, "message")?;
    let mut named = ctx.registry().get_by_name(&name);
    match named.len() {
        0 => Err(HandlerError::ClientNotFound(format!("on slot {slot} nor named '{name}'"))),
        1 => Ok((named.remove(0), message)),
        count => Err(HandlerError::AmbiguousName { name, count }),
    }
}

/// The `<name>: <message>` part of a chat line
fn said_text<'t>(captures: &Captures<'t>) -> Option<&'t str> {
    let whole = captures.get(0)?;
    let start = captures.name("name")?.start() - whole.start();
    let end = captures.name("message")?.end() - whole.start();
    whole.as_str().get(start..end)
}

/// What follows `name:` in `said`, comparing names without color codes
fn message_after_name<'t>(said: &'t str, name: &str) -> Option<&'t str> {
    said.match_indices(':')
        .find(|(colon, _)| strip_colors(&said[..*colon]) == name)
        .map(|(colon, _)| &said[colon + 1..])
}

/// See the module docs. `message` is expected to be trimmed
fn detect_command(message: &str, alias: &str) -> Option<DetectedCommand> {
    let mut chars = message.chars();
    let prefix = Prefix::from_sigil(chars.next()?)?;
    let rest = chars.as_str();

    if let Some(aliased) = rest.strip_prefix(prefix.sigil()) {
        return Some(DetectedCommand { prefix, handle: alias.to_lowercase(), params: non_empty(aliased) })
    }
    let (handle, params) = rest.split_once(char::is_whitespace)
        .unwrap_or((rest, ""));
    if handle.is_empty() {
        return None
    }
    Some(DetectedCommand { prefix, handle: handle.to_lowercase(), params: non_empty(params) })
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
