//! Resting place for [CodeTable] & [CodeTables]: the protocol codes -> domain enums mappings.
//!
//! Lookups are total-or-fail: a code absent from a table means the table is incomplete for the server
//! being observed -- callers get a [CodeTableError] instead of a default value.\
//! Tables are built once, when a parser variant is instantiated, and are never mutated afterwards.

use std::collections::HashMap;
use std::str::FromStr;
use model::codes::{Gametype, HitLocation, Item, MeansOfDeath, Team};


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeTableError {
    #[error("code '{code}' not found in the `{table}` table")]
    NotFound { table: &'static str, code: String },
    #[error("name '{name}' is not a known `{table}`")]
    UnknownName { table: &'static str, name: String },
}

/// Numeric code -> domain value mapping
#[derive(Debug, Clone)]
pub struct CodeTable<T> {
    name: &'static str,
    values: HashMap<i32, T>,
}

impl<T: Copy + PartialEq> CodeTable<T> {

    pub fn new(name: &'static str, entries: &[(i32, T)]) -> Self {
        Self {
            name,
            values: entries.iter().copied().collect(),
        }
    }

    pub fn lookup(&self, code: i32) -> Result<T, CodeTableError> {
        self.values.get(&code)
            .copied()
            .ok_or_else(|| CodeTableError::NotFound { table: self.name, code: code.to_string() })
    }

    /// Same as [Self::lookup()], for codes still in their textual form -- non-numeric codes are reported as not found
    pub fn lookup_str(&self, code: &str) -> Result<T, CodeTableError> {
        code.trim().parse::<i32>()
            .map_err(|_| CodeTableError::NotFound { table: self.name, code: code.to_string() })
            .and_then(|code| self.lookup(code))
    }

    /// The code of `value`, if it is mapped
    pub fn code_of(&self, value: T) -> Option<i32> {
        self.values.iter()
            .find(|(_, mapped)| **mapped == value)
            .map(|(code, _)| *code)
    }

    pub fn values(&self) -> impl Iterator<Item=T> + '_ {
        self.values.values().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

}

/// The complete set of tables of a protocol revision
#[derive(Debug, Clone)]
pub struct CodeTables {
    pub gametypes: CodeTable<Gametype>,
    pub hit_locations: CodeTable<HitLocation>,
    /// Weapons, as numbered by the `Hit` lines
    pub items: CodeTable<Item>,
    pub means_of_death: CodeTable<MeansOfDeath>,
    pub teams: CodeTable<Team>,
    /// Which teams make sense for each gametype
    available_teams: HashMap<Gametype, Vec<Team>>,
}

impl CodeTables {

    pub fn new(gametypes:      &[(i32, Gametype)],
               hit_locations:  &[(i32, HitLocation)],
               items:          &[(i32, Item)],
               means_of_death: &[(i32, MeansOfDeath)],
               teams:          &[(i32, Team)],
               available_teams: &[(Gametype, &[Team])]) -> Self {
        Self {
            gametypes:      CodeTable::new("gametype", gametypes),
            hit_locations:  CodeTable::new("hit location", hit_locations),
            items:          CodeTable::new("item", items),
            means_of_death: CodeTable::new("means of death", means_of_death),
            teams:          CodeTable::new("team", teams),
            available_teams: available_teams.iter()
                .map(|(gametype, teams)| (*gametype, teams.to_vec()))
                .collect(),
        }
    }

    /// Name based -- the same for every protocol revision.\
    /// Accepts the aliases operators type, like `r`, `b` or `spec`.
    pub fn team_by_name(&self, name: &str) -> Result<Team, CodeTableError> {
        by_name("team", name)
    }

    /// Name based -- the same for every protocol revision
    pub fn item_by_name(&self, name: &str) -> Result<Item, CodeTableError> {
        by_name("item", name)
    }

    pub fn available_teams(&self, gametype: Gametype) -> Result<&[Team], CodeTableError> {
        self.available_teams.get(&gametype)
            .map(Vec::as_slice)
            .ok_or_else(|| CodeTableError::NotFound { table: "available teams", code: gametype.to_string() })
    }

}

fn by_name<T: FromStr>(table: &'static str, name: &str) -> Result<T, CodeTableError> {
    T::from_str(name.trim())
        .map_err(|_| CodeTableError::UnknownName { table, name: name.to_string() })
}
