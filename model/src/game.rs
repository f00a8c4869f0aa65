//! Resting place for [Game]

use serde::Serialize;
use crate::codes::Gametype;


/// What is known about the match currently being played on the server.\
/// Populated from the `InitGame` & `InitRound` info-strings; reset on `Exit` & `ShutdownGame`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Game {
    pub map_name: Option<String>,
    /// `None` while unknown -- it may be lazily resolved through the `g_gametype` cvar
    pub gametype: Option<Gametype>,
    pub min_ping: Option<u32>,
    pub max_ping: Option<u32>,
    pub max_clients: Option<u32>,
    pub map_cycle: Option<String>,
    /// The external authentication system is enabled on the server
    pub auth_enable: bool,
    pub auth_owners: Option<u32>,
    /// Cached list of the maps available on the server.\
    /// Filled by the plugins out of the console's map listing -- log lines never carry it -- and dropped with every reset
    pub map_list: Vec<String>,
}

impl Game {

    /// Back to the "unknown" state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

}
