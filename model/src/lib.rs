//! Business entities shared by every layer: the Urban Terror code enumerations,
//! the clients, the game record and what the log parser produces -- [events::Event]s & [command::Command]s

pub mod codes;
pub mod client;
pub mod game;
pub mod events;
pub mod command;

/// A position in the game server's client array -- reused by different players over time
pub type Slot = u32;
