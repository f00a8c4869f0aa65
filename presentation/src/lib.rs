//! Small crate to be a central point for presentation requisites.
//!
//! Drains the events & commands queues produced by the log parser, showing each item as a line of Json

mod config;

pub use config::Config;

use std::io::Write;
use crossbeam_channel::{select, Receiver};
use log::warn;
use model::{command::Command, events::Event};
use serde::Serialize;


/// How many items were taken out of the queues by [to_json_lines()]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrainedCounts {
    pub events: usize,
    pub commands: usize,
    /// Items that couldn't be serialized or written -- only possible when [Config::stop_on_errors] is `false`
    pub failures: usize,
}

/// Wraps the [Command]s so they may be told apart from the [Event]s, which carry their own `event` tag
#[derive(Serialize)]
struct CommandLine<'a> {
    command: &'a Command,
}

/// Writes a Json object per line for every item of the `events` & `commands` queues, as they arrive,
/// until both queues are disconnected -- which happens when the parser is dropped.\
/// Output is flushed whenever both queues get empty, so followed logs show up promptly.
pub fn to_json_lines(config: &Config, events: Receiver<Event>, commands: Receiver<Command>, mut writer: impl Write) -> Result<DrainedCounts, Box<dyn std::error::Error>> {

    let mut counts = DrainedCounts::default();
    let mut events = Some(events);
    let mut commands = Some(commands);

    while events.is_some() || commands.is_some() {
        let events_receiver = events.clone().unwrap_or_else(crossbeam_channel::never);
        let commands_receiver = commands.clone().unwrap_or_else(crossbeam_channel::never);
        let line = select! {
            recv(events_receiver) -> event => match event {
                Ok(event) => {
                    counts.events += 1;
                    Some(("event", serde_json::to_string(&event)))
                },
                Err(_) => {
                    events = None;
                    None
                },
            },
            recv(commands_receiver) -> command => match command {
                Ok(command) => {
                    counts.commands += 1;
                    Some(("command", serde_json::to_string(&CommandLine { command: &command })))
                },
                Err(_) => {
                    commands = None;
                    None
                },
            },
        };
        let Some((item_name, line_result)) = line
        else {
            continue
        };
        let flush = events_receiver.is_empty() && commands_receiver.is_empty();
        if let Err(msg) = write_line(&mut writer, item_name, line_result, flush) {
            report(config, msg)?;
            counts.failures += 1;
        }
    }

    if let Err(err) = writer.flush() {
        report(config, format!("presentation: to_json_lines(): Error flushing the given `writer`: {err}"))?;
    }
    Ok(counts)
}

fn write_line(writer: &mut impl Write, item_name: &str, line_result: serde_json::Result<String>, flush: bool) -> Result<(), String> {
    let line = line_result
        .map_err(|err| format!("presentation: to_json_lines(): Error serializing {item_name}: {err}"))?;
    writer.write_all(line.as_bytes())
        .and_then(|_| writer.write_all(b"\n"))
        .and_then(|_| if flush { writer.flush() } else { Ok(()) })
        .map_err(|err| format!("presentation: to_json_lines(): Error writing {item_name} to the given `writer`: {err}"))
}

/// Logs `msg` and tells if the draining should stop, according to `config`
fn report(config: &Config, msg: String) -> Result<(), Box<dyn std::error::Error>> {
    if config.log_errors {
        warn!("{msg}");
    }
    if config.stop_on_errors {
        Err(Box::from(msg))
    } else {
        Ok(())
    }
}
