//! Resting place for [LogParser] & [ParserContext]: the line dispatcher and the state its handlers work on.
//!
//! For each line, the first entry of the variant's pattern table matching it (in priority order) has its
//! handler invoked -- and nothing else. Handlers return what should be emitted; the dispatcher pushes it.
//! Whatever goes wrong with a line is logged here and the line is dropped: [LogParser::parse_line()]
//! never fails nor panics because of the data it is fed.

use std::sync::Arc;
use bll_api::{Config, LogParserApi};
use common::{
    shutdown::ShutdownSignal,
    types::Result,
};
use dal_api::{ClientRegistry, Console, GroupLookup, LogLineFeed};
use log::{debug, error, info, log, trace, warn, Level};
use model::{
    Slot,
    client::Client,
    codes::{Gametype, Team},
    game::Game,
};
use parking_lot::RwLock;
use urt_server_log::{
    code_tables::CodeTables,
    protocol::Protocol,
};
use crate::errors::HandlerError;
use crate::queues::{self, Emitter, QueueError, Queues};
use crate::variants::ParserVariant;


/// The external collaborators handlers rely on
#[derive(Debug, Clone)]
pub struct Collaborators {
    pub registry: Arc<dyn ClientRegistry>,
    pub groups: Arc<dyn GroupLookup>,
    pub console: Arc<dyn Console>,
}

/// Everything a line handler may consult or mutate
#[derive(Debug)]
pub struct ParserContext {
    variant: ParserVariant,
    config: Arc<Config>,
    collaborators: Collaborators,
    game: Arc<RwLock<Game>>,
}

impl ParserContext {

    pub fn protocol(&self) -> Protocol {
        self.variant.protocol
    }

    pub fn tables(&self) -> &CodeTables {
        &self.variant.tables
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &dyn ClientRegistry {
        self.collaborators.registry.as_ref()
    }

    pub fn groups(&self) -> &dyn GroupLookup {
        self.collaborators.groups.as_ref()
    }

    pub fn console(&self) -> &dyn Console {
        self.collaborators.console.as_ref()
    }

    pub fn game(&self) -> &RwLock<Game> {
        &self.game
    }

    /// The client connected at `slot`
    pub fn client_at(&self, slot: Slot) -> std::result::Result<Client, HandlerError> {
        self.registry().get_by_slot(slot)
            .ok_or_else(|| HandlerError::ClientNotFound(format!("on slot {slot}")))
    }

    /// The gametype being played -- asked to the server (`g_gametype`) and remembered if not yet known
    pub fn gametype(&self) -> Option<Gametype> {
        if let Some(gametype) = self.game.read().gametype {
            return Some(gametype)
        }
        let code = dal_api::cvar_as::<i32>(self.console(), "g_gametype")?;
        match self.tables().gametypes.lookup(code) {
            Ok(gametype) => {
                debug!("Gametype resolved through the console: {gametype}");
                self.game.write().gametype = Some(gametype);
                Some(gametype)
            },
            Err(err) => {
                error!("Couldn't resolve the gametype through the console: {err}");
                None
            },
        }
    }

}

/// The line dispatcher -- see the module docs
#[derive(Debug)]
pub struct LogParser {
    context: ParserContext,
    emitter: Emitter,
}

impl LogParser {

    /// Creates a parser for `variant`, along with the queues it will feed
    pub fn new(variant:       ParserVariant,
               config:        Arc<Config>,
               collaborators: Collaborators,
               game:          Arc<RwLock<Game>>,
               shutdown:      ShutdownSignal)
              -> (Self, Queues) {
        let (emitter, queues) = queues::channels(config.queue_capacity, shutdown);
        let context = ParserContext { variant, config, collaborators, game };
        (Self { context, emitter }, queues)
    }

    /// Same as [Self::new()], for one of the built-in protocol variants
    pub fn for_protocol(protocol:      Protocol,
                        config:        Arc<Config>,
                        collaborators: Collaborators,
                        game:          Arc<RwLock<Game>>,
                        shutdown:      ShutdownSignal)
                       -> Result<(Self, Queues)> {
        let variant = ParserVariant::for_protocol(protocol)
            .map_err(|err| format!("LogParser::for_protocol(): couldn't build the `{protocol}` parser variant: {err}"))?;
        Ok(Self::new(variant, config, collaborators, game, shutdown))
    }

    pub fn protocol(&self) -> Protocol {
        self.context.protocol()
    }

    pub fn context(&self) -> &ParserContext {
        &self.context
    }

    fn report_handler_error(&self, pattern_name: &str, line: &str, err: HandlerError) {
        let level = err.severity();
        if self.context.config.log_issues || level == Level::Error {
            log!(level, "`{pattern_name}` line abandoned: {err} -- line: '{line}'");
        }
    }

}

impl LogParserApi for LogParser {

    fn parse_line(&self, line: &str) {
        let Some((entry, captures)) = self.context.variant.line_formats.first_match(line)
        else {
            trace!("Unmatched line ignored: '{line}'");
            return
        };
        let handler = entry.payload;
        let emission = match handler(&self.context, &captures) {
            Ok(Some(emission)) => emission,
            Ok(None) => return,
            Err(err) => return self.report_handler_error(entry.name, line, err),
        };
        match self.emitter.emit(emission) {
            Ok(()) => (),
            Err(QueueError::Interrupted) => info!("`{}` line dropped: {}", entry.name, QueueError::Interrupted),
            Err(QueueError::Disconnected) => warn!("`{}` line dropped: {} -- line: '{line}'", entry.name, QueueError::Disconnected),
        }
    }

    fn parse_feed(&self, feed: Box<dyn LogLineFeed>) -> Result<usize> {
        let stream = feed.lines_stream()
            .map_err(|err| format!("parse_feed(): failed at fetching the lines `Stream`: {err}"))?;
        let mut lines_count = 0;
        for line_result in futures::executor::block_on_stream(stream) {
            lines_count += 1;
            match line_result {
                Ok(line) => self.parse_line(&line),
                Err(err) => warn!("Log line #{lines_count} skipped: {err}"),
            }
        }
        Ok(lines_count)
    }

    fn team_by_name(&self, name: &str) -> Option<Team> {
        self.context.tables().team_by_name(name).ok()
    }

    fn available_teams(&self, gametype: Option<Gametype>) -> Vec<Team> {
        let Some(gametype) = gametype.or_else(|| self.context.gametype())
        else {
            debug!("Available teams asked while the gametype is unknown");
            return Vec::new()
        };
        match self.context.tables().available_teams(gametype) {
            Ok(teams) => teams.to_vec(),
            Err(err) => {
                error!("Couldn't tell the teams available for {gametype}: {err}");
                Vec::new()
            },
        }
    }

}
