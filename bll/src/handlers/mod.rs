//! The line handlers: one function per line shape, shared by all the protocol variants.
//!
//! Every handler follows the same recipe: extract the captured fields, resolve the referenced clients,
//! classify, update the [model::client::Client] / [model::game::Game] records and return at most one
//! [Emission]. Failures are returned, never logged here: the dispatcher knows the line & pattern to report.

pub mod game;
pub mod clients;
pub mod combat;
pub mod objectives;
pub mod chat;
pub mod votes;
pub mod jump;

use std::str::FromStr;
use model::Slot;
use regex::Captures;
use crate::errors::HandlerError;
use crate::parser::ParserContext;
use crate::queues::Emission;


pub type HandlerResult = Result<Option<Emission>, HandlerError>;

/// The signature of all line handlers
pub type Handler = fn(&ParserContext, &Captures) -> HandlerResult;


/// The text captured by the named group `name` -- which the handler's pattern is expected to define
pub fn field<'t>(captures: &Captures<'t>, name: &'static str) -> Result<&'t str, HandlerError> {
    captures.name(name)
        .map(|matched| matched.as_str())
        .ok_or_else(|| HandlerError::Malformed { field: name, value: String::new() })
}

/// The named group `name`, if it participated in the match
pub fn optional_field<'t>(captures: &Captures<'t>, name: &'static str) -> Option<&'t str> {
    captures.name(name)
        .map(|matched| matched.as_str())
}

pub fn parse_field<T: FromStr>(captures: &Captures, name: &'static str) -> Result<T, HandlerError> {
    let value = field(captures, name)?;
    value.trim().parse()
        .map_err(|_| HandlerError::Malformed { field: name, value: value.to_string() })
}

pub fn slot_field(captures: &Captures, name: &'static str) -> Result<Slot, HandlerError> {
    parse_field(captures, name)
}
