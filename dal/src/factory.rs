//! Factory for obtaining one of the implementations of our DAO objects

use std::sync::Arc;
use dal_api::{Config, LineFeedImplementations, LogLineFeed};

/// Instantiates a Data Access Object (dao) able to read the lines pointed to by `log_locator`
/// -- an Urban Terror server log file -- from which a [LogLineFeed] is returned.
pub fn instantiate_line_feed(config: Arc<Config>, log_locator: &str) -> Box<dyn LogLineFeed> {
    match config.line_feed_implementation {
        LineFeedImplementations::SyncLogFileReader => crate::sync_file_reader::LogFileSyncReader::new(config, log_locator),
        LineFeedImplementations::StdinReader => crate::stdin_reader::LogStdinReader::new(config),
    }
}
