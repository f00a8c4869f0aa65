//! Clients lifecycle: `ClientConnect`, `ClientUserinfo`, `ClientUserinfoChanged`, `ClientBegin` & `ClientDisconnect`.
//!
//! A client is bound to its slot on the first `ClientUserinfo` of the slot -- not on `ClientConnect`, which
//! carries no identity. Binding goes like this:
//!  1) bots (no `cl_guid`, but a `skill`) get the synthetic guid `BOT<slot>`;
//!  2) the persisted client is searched for: by auth login first (if the protocol & server support it), then by guid;
//!  3) if nothing was found, a brand new client is created in the guests group;
//!  4) the userinfo fields are applied and the client is persisted -- only then is the slot bound and
//!     [Event::ClientConnect] emitted. If persisting fails, nothing is bound nor emitted.

use std::net::IpAddr;
use chrono::Utc;
use log::{debug, error, warn};
use model::{
    Slot,
    client::{Client, LOCKED_TEAM_VAR},
    codes::Team,
    events::Event,
};
use regex::Captures;
use urt_server_log::{
    info_string::{self, InfoString},
    text::strip_colors,
};
use crate::errors::HandlerError;
use crate::parser::ParserContext;
use crate::queues::Emission;
use super::{field, slot_field, HandlerResult};


/// How a connecting client may be identified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Identification {
    Guid,
    /// Asks the auth system first, if the server has it enabled
    AuthThenGuid,
}

pub fn on_client_connect(_ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let slot = slot_field(captures, "slot")?;
    debug!("Slot {slot} is connecting");
    Ok(None)
}

pub fn on_client_userinfo(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    userinfo(ctx, captures, Identification::Guid)
}

pub fn on_client_userinfo_with_auth(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    userinfo(ctx, captures, Identification::AuthThenGuid)
}

/// Emits at most one event, a team change having priority over a name change.\
/// Only what gets reported is stored: a rename left unreported is still seen as one on the next line.
pub fn on_client_userinfo_changed(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let slot = slot_field(captures, "slot")?;
    let info = info_string::decode(field(captures, "data")?);
    let team = match info.get("t") {
        Some(code) => Some(ctx.tables().teams.lookup_str(code)?),
        None => None,
    };
    let mut client = ctx.client_at(slot)?;
    let previous_team = client.team;

    if let Some(team) = team.filter(|team| *team != previous_team) {
        let locked_team = client.var(LOCKED_TEAM_VAR)
            .and_then(|locked| ctx.tables().team_by_name(locked).ok());
        if let Some(locked_team) = locked_team.filter(|locked_team| *locked_team != team) {
            enforce_team_lock(ctx, slot, locked_team)?;
            return Ok(None)
        }
        client.team = team;
        let client = ctx.registry().save(client).map_err(HandlerError::Persistence)?;
        return Ok(Some(Emission::Event(Event::ClientTeamChange { client, previous_team })))
    }

    match info.get("n").map(strip_colors).filter(|name| !name.is_empty() && *name != client.name) {
        Some(name) => {
            let previous_name = std::mem::replace(&mut client.name, name);
            let client = ctx.registry().save(client).map_err(HandlerError::Persistence)?;
            Ok(Some(Emission::Event(Event::ClientNameChange { client, previous_name })))
        },
        None => Ok(None),
    }
}

pub fn on_client_begin(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let client = ctx.client_at(slot_field(captures, "slot")?)?;
    Ok(Some(Emission::Event(Event::ClientJoin { client })))
}

pub fn on_client_disconnect(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let slot = slot_field(captures, "slot")?;
    let mut client = ctx.registry().remove_by_slot(slot)
        .ok_or_else(|| HandlerError::ClientNotFound(format!("on slot {slot}")))?;
    client.time_edit = Utc::now();
    let client = ctx.registry().save(client).map_err(HandlerError::Persistence)?;
    Ok(Some(Emission::Event(Event::ClientDisconnect { client })))
}


fn userinfo(ctx: &ParserContext, captures: &Captures, identification: Identification) -> HandlerResult {
    let slot = slot_field(captures, "slot")?;
    let info = info_string::decode(field(captures, "data")?);
    match ctx.registry().get_by_slot(slot) {
        Some(client) => update_connected(ctx, client, &info),
        None => connect(ctx, slot, &info, identification),
    }
}

/// First `ClientUserinfo` of a slot -- see the module docs
fn connect(ctx: &ParserContext, slot: Slot, info: &InfoString, identification: Identification) -> HandlerResult {
    let bot = is_bot(info);
    let guid = if bot {
        Some(format!("BOT{slot}"))
    } else {
        info.get("cl_guid")
            .map(str::trim)
            .filter(|guid| !guid.is_empty())
            .map(str::to_string)
    };

    let (auth_login, known) = match identification {
        Identification::AuthThenGuid if ctx.game().read().auth_enable => identify_by_auth(ctx, slot, guid.as_deref()),
        _ => (None, None),
    };
    let known = known.or_else(|| guid.as_deref().and_then(|guid| ctx.registry().get_by_guid(guid)));

    let now = Utc::now();
    let mut client = match known {
        Some(mut client) => {
            // whole seconds: reconnecting exactly at the threshold doesn't count
            if (now - client.time_edit).num_seconds() > ctx.config().reconnect_threshold.num_seconds() {
                client.connections += 1;
            }
            client.slot = Some(slot);
            client.vars.clear();
            client
        },
        None => {
            let keyword = &ctx.config().guest_group_keyword;
            let group = ctx.groups().get_by_keyword(keyword)
                .ok_or_else(|| HandlerError::MissingGroup(keyword.to_string()))?;
            let mut client = Client::new(slot, group);
            client.connections = 1;
            client
        },
    };
    client.bot = bot;
    if guid.is_some() {
        client.guid = guid;
    }
    if auth_login.is_some() {
        client.auth = auth_login;
    }
    apply_userinfo(ctx, &mut client, info)?;
    client.time_edit = now;

    let client = ctx.registry().save(client).map_err(HandlerError::Persistence)?;
    ctx.registry().add(client.clone()).map_err(HandlerError::Persistence)?;
    debug!("Slot {slot} bound to '{}' (id {:?}, {} connections)", client.name, client.id, client.connections);
    Ok(Some(Emission::Event(Event::ClientConnect { client })))
}

/// `ClientUserinfo` for an already bound slot: at most one event is emitted, a name change having priority over a gear change
fn update_connected(ctx: &ParserContext, mut client: Client, info: &InfoString) -> HandlerResult {
    let previous_name = client.name.clone();
    let previous_gear = client.gear.clone();
    apply_userinfo(ctx, &mut client, info)?;
    client.time_edit = Utc::now();
    let client = ctx.registry().save(client).map_err(HandlerError::Persistence)?;
    if client.name != previous_name {
        Ok(Some(Emission::Event(Event::ClientNameChange { client, previous_name })))
    } else if client.gear != previous_gear {
        Ok(Some(Emission::Event(Event::ClientGearChange { client, previous_gear })))
    } else {
        Ok(None)
    }
}

/// Asks the auth system who is playing at `slot`, returning the login and the persisted client using it.\
/// Failures are logged and ignored: the guid identification still applies.
fn identify_by_auth(ctx: &ParserContext, slot: Slot, guid: Option<&str>) -> (Option<String>, Option<Client>) {
    let auth_login = match ctx.console().auth_whois(slot) {
        Ok(Some(auth_login)) => auth_login,
        Ok(None) => return (None, None),
        Err(err) => {
            error!("Couldn't ask the auth system about slot {slot}: {err}");
            return (None, None)
        },
    };
    let known = ctx.registry().get_by_auth(&auth_login);
    if let (Some(client), Some(guid)) = (&known, guid) {
        if client.guid.as_deref().is_some_and(|stored| !stored.eq_ignore_ascii_case(guid)) {
            warn!("Client id {:?}, authenticated as '{auth_login}', connected with guid {guid} instead of {}: the stored guid will be updated",
                  client.id, client.guid.as_deref().unwrap_or_default());
        }
    }
    (Some(auth_login), known)
}

fn is_bot(info: &InfoString) -> bool {
    !info.contains_key("cl_guid") && info.contains_key("skill")
}

/// Copies the userinfo fields into `client`
fn apply_userinfo(ctx: &ParserContext, client: &mut Client, info: &InfoString) -> Result<(), HandlerError> {
    if let Some(name) = info.get("name").map(strip_colors).filter(|name| !name.is_empty()) {
        client.name = name;
    }
    if let Some(ip) = info.get("ip") {
        client.ip = parse_ip(ip);
    }
    if let Some(gear) = info.get("gear").map(str::trim).filter(|gear| !gear.is_empty()) {
        client.gear = Some(gear.to_string());
    }
    if let Some(code) = info.get("t") {
        client.team = ctx.tables().teams.lookup_str(code)?;
    }
    Ok(())
}

/// `10.0.0.1:27960` -> `10.0.0.1`. Bots have `bot` and local players `localhost` instead of addresses
fn parse_ip(ip: &str) -> Option<IpAddr> {
    let ip = ip.trim();
    ip.parse().ok()
        .or_else(|| ip.rsplit_once(':')
            .and_then(|(address, _port)| address.parse().ok()))
}

fn enforce_team_lock(ctx: &ParserContext, slot: Slot, locked_team: Team) -> Result<(), HandlerError> {
    debug!("Slot {slot} is locked in the {locked_team} team: forcing it back");
    let team_name = locked_team.to_string().to_lowercase();
    ctx.console().write(&format!("forceteam {slot} {team_name}"))
        .and_then(|_| ctx.console().write(&format!("tell {slot} ^7You are locked in the ^3{team_name}^7 team")))
        .map_err(HandlerError::Console)
}
