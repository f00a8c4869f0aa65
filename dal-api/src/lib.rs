//! Contracts for the collaborators the log parsing core depends on:
//!  1) [ClientRegistry] & [GroupLookup] -- the storage of clients and their permission groups;
//!  2) [Console] -- the game server's remote console (RCON);
//!  3) [LogLineFeed] -- the source of the server's log lines.
//!
//! The `dal` crate provides implementations for all of them.

mod config;
pub use config::*;

use std::fmt::Debug;
use std::pin::Pin;
use std::str::FromStr;
use common::types::Result;
use futures::Stream;
use model::{
    Slot,
    client::{Client, Group},
};


/// Errors reported by the collaborators
#[derive(Debug, thiserror::Error)]
pub enum DalError {
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("client {client} can't be persisted: {reason}")]
    InvalidClient { client: String, reason: String },
    #[error("console failure: {0}")]
    Console(String),
}

/// Access to the persisted clients, as well as the slot bindings of the connected ones.\
/// Clients are handed out as snapshots: modifications only take effect through [Self::save()] & [Self::add()].
pub trait ClientRegistry: Debug + Send + Sync {

    /// The client connected at `slot`, if any
    fn get_by_slot(&self, slot: Slot) -> Option<Client>;

    /// Unbinds `slot`, returning the client that was connected to it
    fn remove_by_slot(&self, slot: Slot) -> Option<Client>;

    /// Looks up the persisted clients by their game guid
    fn get_by_guid(&self, guid: &str) -> Option<Client>;

    /// Looks up the persisted clients by their auth login
    fn get_by_auth(&self, auth: &str) -> Option<Client>;

    /// All the connected clients whose (color stripped) name is exactly `name`
    fn get_by_name(&self, name: &str) -> Vec<Client>;

    /// Binds `client` to its slot, replacing any previous binding
    fn add(&self, client: Client) -> std::result::Result<(), DalError>;

    /// Persists `client`, returning it with its storage id assigned.\
    /// If the client is bound to a slot, the binding is refreshed as well.
    fn save(&self, client: Client) -> std::result::Result<Client, DalError>;

}

/// Access to the permission groups
pub trait GroupLookup: Debug + Send + Sync {

    fn get_by_keyword(&self, keyword: &str) -> Option<Group>;

}

/// The remote console of the game server
pub trait Console: Debug + Send + Sync {

    /// The current value of the server variable `name`, if it is set
    fn cvar(&self, name: &str) -> Option<String>;

    /// The auth login of the player at `slot`, as reported by the `auth-whois` command.\
    /// `None` when the player isn't authenticated.
    fn auth_whois(&self, slot: Slot) -> std::result::Result<Option<String>, DalError>;

    /// Sends a raw command to the server
    fn write(&self, command: &str) -> std::result::Result<(), DalError>;

}

/// Parses the server variable `name` as `T` -- `None` if unset or unparseable
pub fn cvar_as<T: FromStr>(console: &dyn Console, name: &str) -> Option<T> {
    console.cvar(name)
        .and_then(|value| value.trim().parse().ok())
}

/// Feed for the Urban Terror server log lines
pub trait LogLineFeed {

    /// Consumes this object, returning a `Stream` which yields the log lines, in order.\
    /// Reading errors are yielded as items: they don't end the `Stream`.
    fn lines_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<String>>>>>;

}
