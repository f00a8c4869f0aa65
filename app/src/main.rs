//! Application wiring the layers together, as an administration bot would:
//!
//! =====================================================================
//! Turns Urban Terror server log lines into a stream of Json events and
//! chat commands, as an administration bot would consume them.
//! By default, reads the log lines from the standard input.
//! =====================================================================
//!
//! USAGE:
//!     urt-admin [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!         --follow      Keeps waiting for new lines at the end of the log file, as the game server appends them
//!     -h, --help        Prints help information
//!         --pedantic    Stops on any output error, instead of skipping the item that couldn't be shown
//!     -V, --version     Prints version information
//!         --verbose     Logs the lines that couldn't be handled -- and why -- to stderr
//!
//! OPTIONS:
//!         --log-file <log-file>    Input file with Urban Terror server log lines
//!         --protocol <protocol>    The protocol revision of the game server: `iourt41` or `iourt42` [default: iourt42]
//!
//!
//! Explore some execution options:
//!  - ./target/debug/urt-admin --help
//!  - ./target/debug/urt-admin --log-file '<path_to_games.log>'                        # events & commands of a finished log, as Json lines
//!  - ./target/debug/urt-admin --follow --log-file '<path_to_games.log>'               # keeps up with a live server
//!  - ./target/debug/urt-admin --protocol iourt41 --verbose < '<path_to_games.log>'    # an old server's log, telling why lines were dropped
//!
//! No storage nor RCON connection is configured here: the in-memory collaborators of the `dal` crate stand in for them.

mod command_line;

use std::io::BufWriter;
use std::sync::Arc;
use bll::{Collaborators, LogParser};
use bll_api::LogParserApi;
use common::shutdown::shutdown_channel;
use dal::{
    memory_console::MemoryConsole,
    memory_groups::MemoryGroupLookup,
    memory_registry::MemoryClientRegistry,
};
use log::{info, LevelFilter};
use model::game::Game;
use parking_lot::RwLock;

/// Buffer to allow efficient output operations
const OUTPUT_BUFFER_SIZE: usize = 1024 * 1024;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    let command_line_options = command_line::parse_from_args();

    // start the logger
    simple_logger::SimpleLogger::new()
        .with_level(if command_line_options.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .with_utc_timestamps()
        .init()
        .unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));

    let dal_config = dal_api::Config {
        line_feed_implementation: if command_line_options.log_file.is_some() {
            dal_api::LineFeedImplementations::SyncLogFileReader
        } else {
            dal_api::LineFeedImplementations::StdinReader
        },
        follow: command_line_options.follow,
        ..dal_api::Config::default()
    };
    let logic_config = bll_api::Config {
        log_issues: command_line_options.verbose,
        ..bll_api::Config::default()
    };
    let presentation_config = presentation::Config {
        log_errors: true,
        stop_on_errors: command_line_options.pedantic,
    };

    let collaborators = Collaborators {
        registry: Arc::new(MemoryClientRegistry::new()),
        groups: Arc::new(MemoryGroupLookup::default()),
        console: Arc::new(MemoryConsole::new()),
    };
    let game = Arc::new(RwLock::new(Game::default()));
    let (shutdown_trigger, shutdown_signal) = shutdown_channel();
    let (parser, queues) = LogParser::for_protocol(command_line_options.protocol, Arc::new(logic_config), collaborators, game, shutdown_signal)?;

    // the consumer owns the trigger: if it gives up, the parser stops waiting for room in the queues
    let consumer = std::thread::spawn(move || {
        let _shutdown_trigger = shutdown_trigger;
        let presentation_writer = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, std::io::stdout());
        presentation::to_json_lines(&presentation_config, queues.events, queues.commands, presentation_writer)
            .map_err(|err| err.to_string())
    });

    let log_locator = command_line_options.log_file.as_deref().unwrap_or("-");
    let feed = dal::factory::instantiate_line_feed(Arc::new(dal_config), log_locator);
    let parsing_result = parser.parse_feed(feed);
    // closes the queues, so the consumer may finish
    drop(parser);

    let drained = consumer.join()
        .map_err(|_| "the queues consumer panicked")??;
    let lines_count = parsing_result?;
    info!("{lines_count} log lines processed: {} events & {} commands shown ({} failed)",
          drained.events, drained.commands, drained.failures);

    Ok(())
}
