//! Votes: `Callvote`, `Vote`, `VotePassed` & `VoteFailed`

use model::events::Event;
use regex::Captures;
use crate::errors::HandlerError;
use crate::parser::ParserContext;
use crate::queues::Emission;
use super::{field, parse_field, slot_field, HandlerResult};


/// `Callvote: 3 - "map ut4_casa"` -- the vote type is the first word, the rest is its data
pub fn on_callvote(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let vote = field(captures, "vote")?.trim();
    let (vote_type, data) = match vote.split_once(char::is_whitespace) {
        Some((vote_type, data)) => (vote_type, Some(data.trim().to_string()).filter(|data| !data.is_empty())),
        None => (vote, None),
    };
    if vote_type.is_empty() {
        return Err(HandlerError::Malformed { field: "vote", value: vote.to_string() })
    }
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::CallVote { client, vote_type: vote_type.to_lowercase(), data })))
}

pub fn on_vote(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let vote = parse_field(captures, "vote")?;
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::Vote { client, vote })))
}

pub fn on_vote_passed(_ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let (yes, no, what) = vote_result(captures)?;
    Ok(Some(Emission::Event(Event::VotePassed { yes, no, what })))
}

pub fn on_vote_failed(_ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let (yes, no, what) = vote_result(captures)?;
    Ok(Some(Emission::Event(Event::VoteFailed { yes, no, what })))
}

fn vote_result(captures: &Captures) -> Result<(u32, u32, String), HandlerError> {
    Ok((parse_field(captures, "yes")?,
        parse_field(captures, "no")?,
        field(captures, "what")?.trim().to_string()))
}
