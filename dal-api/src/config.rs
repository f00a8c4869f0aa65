//! Resting place for DAL's [Config] & friends

use std::time::Duration;


/// Configuration for the DAL crate
#[derive(Debug, Clone)]
pub struct Config {

    /// The implementation to use when getting a [crate::LogLineFeed] instance
    pub line_feed_implementation: LineFeedImplementations,

    /// If `true`, reaching the end of the log file doesn't end the feed: new lines are waited for,
    /// as the game server appends them
    pub follow: bool,

    /// When following, how long to wait before checking for new lines again
    pub follow_poll_interval: Duration,

}

/// The available [crate::LogLineFeed] implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFeedImplementations {
    /// Reads the log file given as the locator
    SyncLogFileReader,
    /// Reads the log lines piped into the standard input -- the locator is ignored
    StdinReader,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_feed_implementation: LineFeedImplementations::SyncLogFileReader,
            follow: false,
            follow_poll_interval: Duration::from_millis(250),
        }
    }
}
