//! Shared by the integration tests: a [LogParser] wired to the in-memory collaborators of the `dal` crate

#![allow(dead_code)]

use std::sync::Arc;
use bll::{Collaborators, LogParser};
use bll::queues::Queues;
use bll::variants::ParserVariant;
use bll_api::{Config, LogParserApi};
use chrono::{Duration, Utc};
use common::shutdown::ShutdownSignal;
use dal::{
    memory_console::MemoryConsole,
    memory_groups::MemoryGroupLookup,
    memory_registry::MemoryClientRegistry,
};
use dal_api::{ClientRegistry, GroupLookup};
use model::{
    Slot,
    client::Client,
    command::Command,
    events::Event,
    game::Game,
};
use parking_lot::RwLock;
use urt_server_log::protocol::Protocol;


pub struct TestBench {
    pub parser: LogParser,
    pub queues: Queues,
    pub registry: Arc<MemoryClientRegistry>,
    pub console: Arc<MemoryConsole>,
    pub groups: Arc<MemoryGroupLookup>,
    pub game: Arc<RwLock<Game>>,
}

impl TestBench {

    pub fn new(protocol: Protocol) -> Self {
        Self::with_config(protocol, Config::default())
    }

    pub fn with_config(protocol: Protocol, config: Config) -> Self {
        let variant = ParserVariant::for_protocol(protocol).expect("The protocol variant should build");
        Self::with_variant(variant, config, ShutdownSignal::never())
    }

    pub fn with_variant(variant: ParserVariant, config: Config, shutdown: ShutdownSignal) -> Self {
        let registry = Arc::new(MemoryClientRegistry::new());
        let console = Arc::new(MemoryConsole::new());
        let groups = Arc::new(MemoryGroupLookup::default());
        let game = Arc::new(RwLock::new(Game::default()));
        let collaborators = Collaborators {
            registry: registry.clone(),
            groups: groups.clone(),
            console: console.clone(),
        };
        let (parser, queues) = LogParser::new(variant, Arc::new(config), collaborators, game.clone(), shutdown);
        Self { parser, queues, registry, console, groups, game }
    }

    pub fn feed(&self, lines: &[&str]) {
        for line in lines {
            self.parser.parse_line(line);
        }
    }

    /// Takes everything waiting in the events queue
    pub fn events(&self) -> Vec<Event> {
        self.queues.events.try_iter().collect()
    }

    /// Takes everything waiting in the commands queue
    pub fn commands(&self) -> Vec<Command> {
        self.queues.commands.try_iter().collect()
    }

    /// Feeds `line`, asserting it produced exactly one event, which is returned
    pub fn single_event(&self, line: &str) -> Event {
        self.parser.parse_line(line);
        let mut events = self.events();
        assert_eq!(events.len(), 1, "Line '{line}' should have produced a single event. Produced: {events:?}");
        assert!(self.queues.commands.is_empty(), "Line '{line}' shouldn't have produced commands");
        events.remove(0)
    }

    /// Feeds `line`, asserting it produced nothing
    pub fn nothing(&self, line: &str) {
        self.parser.parse_line(line);
        let events = self.events();
        let commands = self.commands();
        assert!(events.is_empty() && commands.is_empty(), "Line '{line}' should have produced nothing. Produced: {events:?} & {commands:?}");
    }

    /// Connects a human player through the log lines a real server writes, discarding the produced events
    pub fn connect(&self, slot: Slot, name: &str, guid: &str, team_code: u32) -> Client {
        self.feed(&[
            &format!("0:01 ClientConnect: {slot}"),
            &format!(r#"0:01 ClientUserinfo: {slot} \ip\10.0.0.{slot}:27960\name\{name}\gear\GZAAVWT\cl_guid\{guid}"#),
            &format!(r#"0:01 ClientUserinfoChanged: {slot} n\{name}\t\{team_code}\r\0\tl\0"#),
            &format!("0:01 ClientBegin: {slot}"),
        ]);
        self.events();
        self.registry.get_by_slot(slot).expect("The client should be connected")
    }

    /// Persists a client known from previous sessions, whose last activity was `ago`
    pub fn known_client(&self, name: &str, guid: &str, connections: u32, ago: Duration) -> Client {
        let group = self.groups.get_by_keyword("user").expect("The default groups have `user`");
        let mut client = Client::new(0, group);
        client.slot = None;
        client.name = name.to_string();
        client.guid = Some(guid.to_string());
        client.connections = connections;
        client.time_edit = Utc::now() - ago;
        self.registry.save(client).expect("The registry is available")
    }

}
