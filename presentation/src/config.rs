//! Resting place for Presentation's [Config] & friends

/// Configuration for the Presentation crate
#[derive(Debug, Clone)]
pub struct Config {

    /// If false, items that can't be serialized or written are skipped and the draining goes on
    pub stop_on_errors: bool,

    /// If true, logs any errors found while draining the queues
    pub log_errors: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_on_errors: false,
            log_errors: true,
        }
    }
}
