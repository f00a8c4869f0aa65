//! Resting place for [LogSyncReader]


use common::types::Result;
use dal_api::{Config, LogLineFeed};
use std::{
    io::BufRead,
    pin::Pin,
    sync::Arc,
    task::Poll,
};
use futures::{Stream, stream};
use log::trace;


/// [LogLineFeed] implementation for reading Urban Terror server log lines out of any [BufRead].\
/// Bytes that are not valid UTF-8 (player names often aren't) are replaced rather than reported.
pub struct LogSyncReader<Reader: BufRead> {
    config: Arc<Config>,
    source_name: String,
    reader: Reader,
}

impl<Reader: BufRead> LogSyncReader<Reader> {

    pub fn new(config: Arc<Config>, source_name: &str, reader: Reader) -> Box<Self> {
        Box::new(Self {
            config,
            source_name: source_name.into(),
            reader,
        })
    }

}

impl<Reader: BufRead + 'static> LogLineFeed for LogSyncReader<Reader> {

    fn lines_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<String>>>>> {
        let Self { config, source_name, mut reader } = *self;
        let mut line_number = 0_usize;
        // holds partial lines, when following a file the server is still writing to
        let mut buffer = Vec::<u8>::with_capacity(1024);

        let stream = stream::poll_fn(move |_| loop {
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) if buffer.is_empty() && !config.follow => break Poll::Ready(None),
                Ok(0) if config.follow => std::thread::sleep(config.follow_poll_interval),
                Ok(_) if config.follow && buffer.last() != Some(&b'\n') => std::thread::sleep(config.follow_poll_interval),
                Ok(_) => {
                    line_number += 1;
                    let line = String::from_utf8_lossy(&buffer)
                        .trim_end_matches(['\n', '\r'])
                        .to_string();
                    buffer.clear();
                    trace!("{source_name}:{line_number}: {line}");
                    break Poll::Ready(Some(Ok(line)))
                },
                Err(read_err) => {
                    buffer.clear();
                    break Poll::Ready(Some(Err(Box::from(format!("IO read error when processing log '{source_name}' after line {line_number}: {read_err}")))))
                },
            }
        });
        Ok(Box::pin(stream))
    }

}
