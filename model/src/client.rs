//! Resting place for [Client] & [Group]

use std::collections::BTreeMap;
use std::net::IpAddr;
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::codes::Team;
use crate::Slot;


/// Key, in [Client::vars], of the team an admin locked the client into
pub const LOCKED_TEAM_VAR: &str = "locked_team";

/// A player, as known by the bot: both its persisted identity and, while connected, its session data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    /// Storage identity -- `None` until the client is persisted for the first time
    pub id: Option<i64>,
    /// Set while the client is connected
    pub slot: Option<Slot>,
    pub group: Group,
    pub name: String,
    pub ip: Option<IpAddr>,
    pub guid: Option<String>,
    /// Login on the external authentication system
    pub auth: Option<String>,
    pub team: Team,
    pub connections: u32,
    pub gear: Option<String>,
    pub bot: bool,
    pub time_add: DateTime<Utc>,
    /// Last recorded activity
    pub time_edit: DateTime<Utc>,
    /// Ephemeral per-session flags
    #[serde(skip)]
    pub vars: BTreeMap<String, String>,
}

impl Client {

    /// A brand new client, seen for the first time on `slot`
    pub fn new(slot: Slot, group: Group) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            slot: Some(slot),
            group,
            name: String::new(),
            ip: None,
            guid: None,
            auth: None,
            team: Team::Spectator,
            connections: 0,
            gear: None,
            bot: false,
            time_add: now,
            time_edit: now,
            vars: BTreeMap::new(),
        }
    }

    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn set_var<IntoString: Into<String>>(&mut self, key: &str, value: IntoString) {
        self.vars.insert(key.to_string(), value.into());
    }

}

/// Permission groups clients belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    /// Stable identifier used by the configuration & commands -- `guest`, `user`, `admin`...
    pub keyword: String,
    pub level: u32,
}
