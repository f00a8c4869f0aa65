//! Objectives: items, flags, bombs, team scores & survivor winners

use model::events::Event;
use regex::Captures;
use crate::errors::HandlerError;
use crate::parser::ParserContext;
use crate::queues::Emission;
use super::{field, parse_field, slot_field, HandlerResult};


pub fn on_item(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let item = ctx.tables().item_by_name(field(captures, "item")?)?;
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::ItemPickup { client, item })))
}

/// `Flag: <slot> <action>: <flag>` -- action `0` is a drop, `1` a return & `2` a capture
pub fn on_flag(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let flag = ctx.tables().item_by_name(field(captures, "flag")?)?;
    let action: u32 = parse_field(captures, "action")?;
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    let event = match action {
        0 => Event::FlagDrop { client, flag },
        1 => Event::FlagReturn { client, flag },
        2 => Event::FlagCapture { client, flag },
        _ => return Err(HandlerError::Malformed { field: "action", value: action.to_string() }),
    };
    Ok(Some(Emission::Event(event)))
}

pub fn on_flag_return(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let team = ctx.tables().team_by_name(field(captures, "team")?)?;
    Ok(Some(Emission::Event(Event::FlagAutoReturn { team })))
}

pub fn on_bomb(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let action = field(captures, "action")?;
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    let event = match action.to_ascii_lowercase().as_str() {
        "planted" => Event::BombPlanted { client },
        "defused" => Event::BombDefused { client },
        "tossed"  => Event::BombTossed { client },
        _ => return Err(HandlerError::Malformed { field: "action", value: action.to_string() }),
    };
    Ok(Some(Emission::Event(event)))
}

pub fn on_bomb_holder(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::BombHolder { client })))
}

pub fn on_team_scores(_ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let red = parse_field(captures, "red")?;
    let blue = parse_field(captures, "blue")?;
    Ok(Some(Emission::Event(Event::TeamScores { red, blue })))
}

/// The winner is a team name -- or a slot, for the free-for-all survivor modes
pub fn on_survivor_winner(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let winner = field(captures, "winner")?;
    let event = match winner.parse() {
        Ok(slot) => Event::ClientSurvivorWinner { client: ctx.client_at(slot)? },
        Err(_) => Event::TeamSurvivorWinner { team: ctx.tables().team_by_name(winner)? },
    };
    Ok(Some(Emission::Event(event)))
}
