//! Game flow: `InitGame`, `InitRound`, `Warmup`, `Exit` & `ShutdownGame`

use model::{
    codes::Gametype,
    events::Event,
    game::Game,
};
use regex::Captures;
use urt_server_log::info_string::{self, InfoString};
use crate::errors::HandlerError;
use crate::parser::ParserContext;
use crate::queues::Emission;
use super::{field, HandlerResult};


pub fn on_init_game(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let (map_name, gametype) = update_game(ctx, captures)?;
    Ok(Some(Emission::Event(Event::GameStart { map_name, gametype })))
}

pub fn on_init_round(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let (map_name, gametype) = update_game(ctx, captures)?;
    Ok(Some(Emission::Event(Event::RoundStart { map_name, gametype })))
}

pub fn on_warmup(_ctx: &ParserContext, _captures: &Captures) -> HandlerResult {
    Ok(Some(Emission::Event(Event::GameWarmup)))
}

pub fn on_exit(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let reason = field(captures, "reason")?.trim().to_string();
    ctx.game().write().reset();
    Ok(Some(Emission::Event(Event::GameExit { reason })))
}

pub fn on_shutdown_game(ctx: &ParserContext, _captures: &Captures) -> HandlerResult {
    ctx.game().write().reset();
    Ok(Some(Emission::Event(Event::GameShutdown)))
}

/// Applies the info-string of an `InitGame` / `InitRound` line to the [Game], returning the resulting map & gametype.\
/// The gametype is looked up before anything is touched: an unmapped code leaves the [Game] as it was.
fn update_game(ctx: &ParserContext, captures: &Captures) -> Result<(Option<String>, Option<Gametype>), HandlerError> {
    let info = info_string::decode(field(captures, "data")?);
    let gametype = match info.get("g_gametype") {
        Some(code) => Some(ctx.tables().gametypes.lookup_str(code)?),
        None => None,
    };
    let mut game = ctx.game().write();
    apply_info(&mut game, &info, gametype);
    Ok((game.map_name.clone(), game.gametype))
}

/// Only the keys present in `info` are applied
fn apply_info(game: &mut Game, info: &InfoString, gametype: Option<Gametype>) {
    if let Some(map_name) = info.get("mapname").map(str::trim).filter(|map_name| !map_name.is_empty()) {
        game.map_name = Some(map_name.to_string());
    }
    if gametype.is_some() {
        game.gametype = gametype;
    }
    if let Some(min_ping) = info.get_as("sv_minping") {
        game.min_ping = Some(min_ping);
    }
    if let Some(max_ping) = info.get_as("sv_maxping") {
        game.max_ping = Some(max_ping);
    }
    if let Some(max_clients) = info.get_as("sv_maxclients") {
        game.max_clients = Some(max_clients);
    }
    if let Some(map_cycle) = info.get("g_mapcycle") {
        game.map_cycle = Some(map_cycle.to_string());
    }
    if let Some(auth_enable) = info.get_as::<u32>("auth_enable") {
        game.auth_enable = auth_enable != 0;
    }
    if let Some(auth_owners) = info.get_as("auth_owners") {
        game.auth_owners = Some(auth_owners);
    }
}
