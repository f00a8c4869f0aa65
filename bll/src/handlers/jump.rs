//! Jump mode: timed runs & saved positions

use model::events::{Event, JumpRunAttempt, Position};
use regex::Captures;
use crate::errors::HandlerError;
use crate::parser::ParserContext;
use crate::queues::Emission;
use super::{optional_field, parse_field, slot_field, HandlerResult};


pub fn on_jump_run_started(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let way = parse_field(captures, "way")?;
    let attempt = attempt(captures)?;
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::JumpRunStart { client, way, attempt })))
}

pub fn on_jump_run_stopped(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let way = parse_field(captures, "way")?;
    let time_ms = parse_field(captures, "time")?;
    let attempt = attempt(captures)?;
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::JumpRunStop { client, way, time_ms, attempt })))
}

pub fn on_jump_run_canceled(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let way = parse_field(captures, "way")?;
    let attempt = attempt(captures)?;
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::JumpRunCancel { client, way, attempt })))
}

pub fn on_save_position(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let position = position(captures)?;
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::PositionSave { client, position })))
}

pub fn on_load_position(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let position = position(captures)?;
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::PositionLoad { client, position })))
}

pub fn on_goto(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let position = position(captures)?;
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    let target = ctx.client_at(slot_field(captures, "target")?)?;
    Ok(Some(Emission::Event(Event::PositionGoto { client, target, position })))
}

/// Present only on servers limiting the number of attempts
fn attempt(captures: &Captures) -> Result<Option<JumpRunAttempt>, HandlerError> {
    if optional_field(captures, "attempt").is_none() {
        return Ok(None)
    }
    Ok(Some(JumpRunAttempt {
        attempt: parse_field(captures, "attempt")?,
        max_attempts: parse_field(captures, "max_attempts")?,
    }))
}

fn position(captures: &Captures) -> Result<Position, HandlerError> {
    Ok(Position {
        x: parse_field(captures, "x")?,
        y: parse_field(captures, "y")?,
        z: parse_field(captures, "z")?,
    })
}
