//! Combat: `Kill` & `Hit` lines, classified as self inflicted, team inflicted or regular

use model::{
    client::Client,
    codes::MeansOfDeath,
    events::Event,
};
use regex::Captures;
use crate::errors::HandlerError;
use crate::parser::ParserContext;
use crate::queues::Emission;
use super::{field, slot_field, HandlerResult};


/// Deaths that are always self inflicted, whoever the log says the attacker is
pub const SELF_INFLICTED: &[MeansOfDeath] = &[
    MeansOfDeath::Water,
    MeansOfDeath::Lava,
    MeansOfDeath::Falling,
    MeansOfDeath::Suicide,
    MeansOfDeath::TriggerHurt,
    MeansOfDeath::ChangeTeam,
    MeansOfDeath::Sploded,
    MeansOfDeath::Slapped,
    MeansOfDeath::Smited,
    MeansOfDeath::Nuked,
    MeansOfDeath::Bombed,
];

/// Who did what to whom
#[derive(Debug)]
enum Involvement {
    Oneself(Client),
    Teammates { attacker: Client, victim: Client },
    Enemies { attacker: Client, victim: Client },
}

pub fn on_kill(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let means_of_death = ctx.tables().means_of_death.lookup_str(field(captures, "mod")?)?;
    let victim = ctx.client_at(slot_field(captures, "victim")?)?;
    if SELF_INFLICTED.contains(&means_of_death) {
        return Ok(Some(Emission::Event(Event::KillSelf { client: victim, means_of_death })))
    }
    let event = match involvement(ctx, captures, victim)? {
        Involvement::Oneself(client) => Event::KillSelf { client, means_of_death },
        Involvement::Teammates { attacker, victim } => Event::KillTeam { attacker, victim, means_of_death },
        Involvement::Enemies { attacker, victim } => Event::Kill { attacker, victim, means_of_death },
    };
    Ok(Some(Emission::Event(event)))
}

pub fn on_hit(ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let hit_location = ctx.tables().hit_locations.lookup_str(field(captures, "location")?)?;
    let weapon = ctx.tables().items.lookup_str(field(captures, "weapon")?)?;
    let victim = ctx.client_at(slot_field(captures, "victim")?)?;
    let event = match involvement(ctx, captures, victim)? {
        Involvement::Oneself(client) => Event::HitSelf { client, weapon, hit_location },
        Involvement::Teammates { attacker, victim } => Event::HitTeam { attacker, victim, weapon, hit_location },
        Involvement::Enemies { attacker, victim } => Event::Hit { attacker, victim, weapon, hit_location },
    };
    Ok(Some(Emission::Event(event)))
}

/// Resolves the attacker of the line and classifies it against the (already resolved) `victim`.\
/// Teammates must be on a real side: free-for-all players & spectators are nobody's teammates.
fn involvement(ctx: &ParserContext, captures: &Captures, victim: Client) -> Result<Involvement, HandlerError> {
    let attacker_slot = slot_field(captures, "attacker")?;
    if victim.slot == Some(attacker_slot) {
        return Ok(Involvement::Oneself(victim))
    }
    let attacker = ctx.client_at(attacker_slot)?;
    if attacker.team == victim.team && attacker.team.is_side() {
        Ok(Involvement::Teammates { attacker, victim })
    } else {
        Ok(Involvement::Enemies { attacker, victim })
    }
}
