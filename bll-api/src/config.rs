//! Resting place for BLL's [Config]

use chrono::Duration;


/// Configuration to dictate the tunable behaviors of the Business Logic Layer
#[derive(Debug, Clone)]
pub struct Config {

    /// If `true`, lines abandoned by their handlers are logged (at a severity that depends on the cause).\
    /// If `false`, only the failures that denote bugs or outages -- unmapped codes, storage & console
    /// errors -- are logged.
    pub log_issues: bool,

    /// The command a doubled sigil stands for: `!!text` is the same as `!<command_alias> text`
    pub command_alias: String,

    /// The keyword of the group brand new clients are put into
    pub guest_group_keyword: String,

    /// Reconnecting after more than this since the last recorded activity counts as a new connection
    pub reconnect_threshold: Duration,

    /// How many events (and, separately, commands) may wait for their consumers
    /// before the log processing blocks
    pub queue_capacity: usize,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_issues: true,
            command_alias: "say".to_string(),
            guest_group_keyword: "guest".to_string(),
            reconnect_threshold: Duration::hours(1),
            queue_capacity: 1024,
        }
    }
}
