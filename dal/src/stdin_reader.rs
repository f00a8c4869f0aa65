//! Resting place for [LogStdinReader]


use crate::sync_reader::LogSyncReader;
use common::types::Result;
use dal_api::{Config, LogLineFeed};
use std::io::BufReader;
use std::pin::Pin;
use std::sync::Arc;
use futures::Stream;

/// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
const BUFFER_SIZE: usize = 1024*1024;

/// [LogLineFeed] implementation for reading Urban Terror server log lines piped into the standard input
pub struct LogStdinReader {
    config: Arc<Config>,
}

impl LogStdinReader {

    pub fn new(config: Arc<Config>) -> Box<Self> {
        Box::new(Self {
            config,
        })
    }

}

impl LogLineFeed for LogStdinReader {

    fn lines_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<String>>>>> {
        let reader = BufReader::with_capacity(BUFFER_SIZE, std::io::stdin());
        LogSyncReader::new(self.config, "<stdin>", reader)
            .lines_stream()
    }

}
