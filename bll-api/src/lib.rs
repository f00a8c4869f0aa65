//! Contract of the Business Logic Layer: a log parser turning Urban Terror server log lines into
//! [model::events::Event]s & [model::command::Command]s.

mod config;
pub use config::*;

use common::types::Result;
use dal_api::LogLineFeed;
use model::codes::{Gametype, Team};


pub trait LogParserApi {

    /// Classifies & handles a single log line, emitting at most one event or command.\
    /// Never fails: unparseable or unhandleable lines are logged and dropped.
    fn parse_line(&self, line: &str);

    /// Parses every line of `feed`, in order, until it ends -- returning the number of lines read.\
    /// Errors are only returned if the feed can't be opened: reading errors are logged and skipped.
    fn parse_feed(&self, feed: Box<dyn LogLineFeed>) -> Result<usize>;

    /// Parses a team name as typed by operators (`red`, `b`, `spec`...)
    fn team_by_name(&self, name: &str) -> Option<Team>;

    /// The teams that make sense for `gametype` -- or for the game currently being played, if `None`
    fn available_teams(&self, gametype: Option<Gametype>) -> Vec<Team>;

}
