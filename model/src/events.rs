//! Resting place for [Event] & friends

use serde::Serialize;
use crate::client::Client;
use crate::codes::{Gametype, HitLocation, Item, MeansOfDeath, Team};


/// Something that happened on the game server, as reported by its log.\
/// Clients are snapshots taken when the event was generated: events are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum Event {

    // clients lifecycle
    ////////////////////

    /// A client was seen on a slot for the first time -- already persisted
    ClientConnect         { client: Client },
    /// The client entered the game (`ClientBegin`)
    ClientJoin            { client: Client },
    ClientDisconnect      { client: Client },
    ClientNameChange      { client: Client, previous_name: String },
    ClientTeamChange      { client: Client, previous_team: Team },
    ClientGearChange      { client: Client, previous_gear: Option<String> },

    // combat
    /////////

    Kill                  { attacker: Client, victim: Client, means_of_death: MeansOfDeath },
    /// Suicides & environmental deaths
    KillSelf              { client: Client, means_of_death: MeansOfDeath },
    KillTeam              { attacker: Client, victim: Client, means_of_death: MeansOfDeath },
    Hit                   { attacker: Client, victim: Client, weapon: Item, hit_location: HitLocation },
    HitSelf               { client: Client, weapon: Item, hit_location: HitLocation },
    HitTeam               { attacker: Client, victim: Client, weapon: Item, hit_location: HitLocation },

    // chat
    ///////

    Say                   { client: Client, message: String },
    SayTeam               { client: Client, message: String },
    SayPrivate            { client: Client, target: Client, message: String },

    // objectives
    /////////////

    ItemPickup            { client: Client, item: Item },
    FlagDrop              { client: Client, flag: Item },
    FlagReturn            { client: Client, flag: Item },
    FlagCapture           { client: Client, flag: Item },
    /// The flag of `team` went back to its base on its own
    FlagAutoReturn        { team: Team },
    BombPlanted           { client: Client },
    BombDefused           { client: Client },
    BombTossed            { client: Client },
    /// `client` spawned carrying the bomb
    BombHolder            { client: Client },
    TeamScores            { red: u32, blue: u32 },

    // game flow
    ////////////

    GameStart             { map_name: Option<String>, gametype: Option<Gametype> },
    RoundStart            { map_name: Option<String>, gametype: Option<Gametype> },
    GameWarmup,
    GameExit              { reason: String },
    GameShutdown,

    // votes, radio & jump mode
    ///////////////////////////

    CallVote              { client: Client, vote_type: String, data: Option<String> },
    Vote                  { client: Client, vote: u32 },
    VotePassed            { yes: u32, no: u32, what: String },
    VoteFailed            { yes: u32, no: u32, what: String },
    Radio                 { client: Client, group: u32, message_id: u32, location: String, message: String },
    JumpRunStart          { client: Client, way: u32, attempt: Option<JumpRunAttempt> },
    JumpRunStop           { client: Client, way: u32, time_ms: u64, attempt: Option<JumpRunAttempt> },
    JumpRunCancel         { client: Client, way: u32, attempt: Option<JumpRunAttempt> },
    PositionSave          { client: Client, position: Position },
    PositionLoad          { client: Client, position: Position },
    PositionGoto          { client: Client, target: Client, position: Position },
    TeamSurvivorWinner    { team: Team },
    ClientSurvivorWinner  { client: Client },
}

impl Event {

    /// The client this event is mainly about -- the attacker, for events involving two clients
    pub fn client(&self) -> Option<&Client> {
        match self {
            Event::ClientConnect        { client, .. } |
            Event::ClientJoin           { client, .. } |
            Event::ClientDisconnect     { client, .. } |
            Event::ClientNameChange     { client, .. } |
            Event::ClientTeamChange     { client, .. } |
            Event::ClientGearChange     { client, .. } |
            Event::KillSelf             { client, .. } |
            Event::HitSelf              { client, .. } |
            Event::Say                  { client, .. } |
            Event::SayTeam              { client, .. } |
            Event::SayPrivate           { client, .. } |
            Event::ItemPickup           { client, .. } |
            Event::FlagDrop             { client, .. } |
            Event::FlagReturn           { client, .. } |
            Event::FlagCapture          { client, .. } |
            Event::BombPlanted          { client, .. } |
            Event::BombDefused          { client, .. } |
            Event::BombTossed           { client, .. } |
            Event::BombHolder           { client, .. } |
            Event::CallVote             { client, .. } |
            Event::Vote                 { client, .. } |
            Event::Radio                { client, .. } |
            Event::JumpRunStart         { client, .. } |
            Event::JumpRunStop          { client, .. } |
            Event::JumpRunCancel        { client, .. } |
            Event::PositionSave         { client, .. } |
            Event::PositionLoad         { client, .. } |
            Event::PositionGoto         { client, .. } |
            Event::ClientSurvivorWinner { client, .. } => Some(client),
            Event::Kill                 { attacker, .. } |
            Event::KillTeam             { attacker, .. } |
            Event::Hit                  { attacker, .. } |
            Event::HitTeam              { attacker, .. } => Some(attacker),
            Event::FlagAutoReturn       { .. } |
            Event::TeamScores           { .. } |
            Event::GameStart            { .. } |
            Event::RoundStart           { .. } |
            Event::GameWarmup |
            Event::GameExit             { .. } |
            Event::GameShutdown |
            Event::VotePassed           { .. } |
            Event::VoteFailed           { .. } |
            Event::TeamSurvivorWinner   { .. } => None,
        }
    }

}

/// Coordinates in the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Some jump servers limit the number of tries for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JumpRunAttempt {
    pub attempt: u32,
    pub max_attempts: u32,
}
