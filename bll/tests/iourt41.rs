//! Integration tests for the Urban Terror 4.1 parser: lines in, events & commands out

mod test_bench;

use std::net::IpAddr;
use bll::handlers::HandlerResult;
use bll::queues::Emission;
use bll::variants::{LineFormat, ParserVariant};
use bll::ParserContext;
use bll_api::{Config, LogParserApi};
use chrono::Duration;
use common::shutdown::{shutdown_channel, ShutdownSignal};
use dal_api::ClientRegistry;
use model::{
    client::LOCKED_TEAM_VAR,
    codes::{Gametype, HitLocation, Item, MeansOfDeath, Team},
    command::Prefix,
    events::Event,
};
use regex::Captures;
use test_bench::TestBench;
use urt_server_log::protocol::Protocol;


const RED: u32 = 1;
const BLUE: u32 = 2;
const SPECTATOR: u32 = 3;


// combat
/////////

/// Tests the classic kill line, between players of opposing teams
#[test]
fn kill() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(0, "Foo", "GUID0", RED);
    bench.connect(1, "Bar", "GUID1", BLUE);
    match bench.single_event("0:34 Kill: 0 1 16: Foo killed Bar by UT_MOD_SPAS") {
        Event::Kill { attacker, victim, means_of_death } => {
            assert_eq!(attacker.name, "Foo");
            assert_eq!(attacker.slot, Some(0));
            assert_eq!(victim.name, "Bar");
            assert_eq!(means_of_death, MeansOfDeath::Spas12);
        },
        other => panic!("Expected `Event::Kill`, got {other:?}"),
    }
}

/// Suicides and environmental deaths are attributed to the victim, whoever the line says the attacker is
#[test]
fn self_inflicted_kills() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(0, "Foo", "GUID0", RED);
    bench.connect(1, "Bar", "GUID1", BLUE);
    assert_kill_self(bench.single_event("1:00 Kill: 0 0 7: Foo killed Foo by MOD_SUICIDE"), "Foo", MeansOfDeath::Suicide);
    assert_kill_self(bench.single_event("1:01 Kill: 1022 1 6: <world> killed Bar by MOD_FALLING"), "Bar", MeansOfDeath::Falling);
    assert_kill_self(bench.single_event("1:02 Kill: 0 1 31: Foo killed Bar by UT_MOD_SPLODED"), "Bar", MeansOfDeath::Sploded);
    assert_kill_self(bench.single_event("1:03 Kill: 0 0 25: Foo killed Foo by UT_MOD_HEGRENADE"), "Foo", MeansOfDeath::HeGrenade);
}

/// Teammates are only the ones on a real side: free-for-all players and spectators are always enemies
#[test]
fn team_kills() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(0, "Foo", "GUID0", RED);
    bench.connect(1, "Bar", "GUID1", RED);
    bench.connect(2, "Baz", "GUID2", SPECTATOR);
    bench.connect(3, "Qux", "GUID3", SPECTATOR);
    bench.connect(4, "Ffa1", "GUID4", 0);
    bench.connect(5, "Ffa2", "GUID5", 0);
    assert!(matches!(bench.single_event("Kill: 0 1 19: Foo killed Bar by UT_MOD_LR300"), Event::KillTeam { .. }));
    assert!(matches!(bench.single_event("Kill: 2 3 19: Baz killed Qux by UT_MOD_LR300"), Event::Kill { .. }));
    assert!(matches!(bench.single_event("Kill: 4 5 19: Ffa1 killed Ffa2 by UT_MOD_LR300"), Event::Kill { .. }));
    assert!(matches!(bench.single_event("Kill: 0 4 19: Foo killed Ffa1 by UT_MOD_LR300"), Event::Kill { .. }));
}

/// `Hit` lines carry the victim first
#[test]
fn hits() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(0, "Foo", "GUID0", RED);
    bench.connect(1, "Bar", "GUID1", BLUE);
    bench.connect(2, "Baz", "GUID2", BLUE);
    match bench.single_event("0:33 Hit: 1 0 2 4: Foo hit Bar in the Torso") {
        Event::Hit { attacker, victim, weapon, hit_location } => {
            assert_eq!(attacker.name, "Foo");
            assert_eq!(victim.name, "Bar");
            assert_eq!(weapon, Item::Spas12);
            assert_eq!(hit_location, HitLocation::Torso);
        },
        other => panic!("Expected `Event::Hit`, got {other:?}"),
    }
    assert!(matches!(bench.single_event("Hit: 2 1 0 19: Bar hit Baz in the Head"),
                     Event::HitTeam { weapon: Item::M4, hit_location: HitLocation::Head, .. }));
    match bench.single_event("Hit: 0 0 5 11: Foo hit Foo in the Legs") {
        Event::HitSelf { client, weapon, hit_location } => {
            assert_eq!(client.name, "Foo");
            assert_eq!(weapon, Item::HeGrenade);
            assert_eq!(hit_location, HitLocation::Legs);
        },
        other => panic!("Expected `Event::HitSelf`, got {other:?}"),
    }
}

/// Codes missing from the tables abandon the line: no event carrying a made up value is ever emitted
#[test]
fn unmapped_codes() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(0, "Foo", "GUID0", RED);
    bench.connect(1, "Bar", "GUID1", BLUE);
    bench.nothing("Kill: 0 1 99: Foo killed Bar by UT_MOD_WHATEVER");
    bench.nothing("Hit: 1 0 99 4: Foo hit Bar somewhere");
    bench.nothing("Hit: 1 0 2 99: Foo hit Bar with something");
    // 4.2 only codes
    bench.nothing("Hit: 1 0 14 4: Foo hit Bar in the Right Foot");
    bench.nothing("Kill: 0 1 43: Foo killed Bar by UT_MOD_GOOMBA");
}

/// Lines referring to slots nobody is bound to are abandoned
#[test]
fn unknown_clients() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(0, "Foo", "GUID0", RED);
    bench.nothing("Kill: 0 7 16: Foo killed Ghost by UT_MOD_SPAS");
    bench.nothing("Kill: 7 0 16: Ghost killed Foo by UT_MOD_SPAS");
    bench.nothing("Hit: 7 0 2 4: Foo hit Ghost in the Torso");
    bench.nothing("ClientBegin: 7");
}


// dispatching
//////////////

fn specific_handler(_ctx: &ParserContext, _captures: &Captures) -> HandlerResult {
    Ok(Some(Emission::Event(Event::TeamScores { red: 1, blue: 0 })))
}

fn general_handler(_ctx: &ParserContext, captures: &Captures) -> HandlerResult {
    let data = captures.name("data").map_or(0, |data| data.as_str().len() as u32);
    Ok(Some(Emission::Event(Event::TeamScores { red: 0, blue: data })))
}

/// Tests that, when more than one line format matches, only the first registered one has its handler invoked
#[test]
fn first_matching_format_wins() {
    let specific = LineFormat { name: "Specific", pattern: r#"say:\s*(?P<slot>\d+)\s+(?P<name>.*?):\s*(?P<message>.*)"#, handler: specific_handler };
    let general = LineFormat { name: "General", pattern: r#"(?P<action>[a-z]+):\s*(?P<data>.*)"#, handler: general_handler };
    let variant = ParserVariant::new(Protocol::Iourt41, Protocol::Iourt41.code_tables(), &[specific, general])
        .expect("The test line formats should compile");
    let bench = TestBench::with_variant(variant, Config::default(), ShutdownSignal::never());

    assert_eq!(bench.single_event("1:02 say: 3 Foo: hello"), Event::TeamScores { red: 1, blue: 0 });
    assert_eq!(bench.single_event("1:03 Warmup: 1234"), Event::TeamScores { red: 0, blue: 4 });
    bench.nothing("1:04 ---");
}

#[test]
fn unmatched_lines() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(0, "Foo", "GUID0", RED);
    bench.nothing("");
    bench.nothing("   ");
    bench.nothing("  0:00 ------------------------------------------------------------");
    bench.nothing("2:10 score: 5  ping: 33  client: 0 Foo");
    bench.nothing("2:10 ClientSpawn: 0");
    // 4.2 only lines
    bench.nothing(r#"1:40 Callvote: 0 - "map ut4_casa""#);
    bench.nothing("1:50 ClientJumpRunStarted: 0 - way: 1");
}


// chat
///////

#[test]
fn commands() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(3, "Foo", "GUID3", RED);
    bench.feed(&["0:45 say: 3 Foo: !kick 3 cheating"]);
    let mut commands = bench.commands();
    assert_eq!(commands.len(), 1, "A single command was expected. Got: {commands:?}");
    assert!(bench.events().is_empty(), "Commands are not chat events");
    let command = commands.remove(0);
    assert_eq!(command.client.name, "Foo");
    assert_eq!(command.prefix, Prefix::Normal);
    assert_eq!(command.handle, "kick");
    assert_eq!(command.params.as_deref(), Some("3 cheating"));
    assert_eq!(command.param_string(0), Some("3"));
    assert_eq!(command.param_string_concat(1), Some("cheating"));
    assert!(!command.force);

    bench.feed(&["0:46 sayteam: 3 Foo: @STATUS", "0:47 saytell: 3 3 Foo: &b3"]);
    let commands = bench.commands();
    assert_eq!(commands.iter().map(|command| (command.prefix, command.handle.as_str(), command.params.is_none())).collect::<Vec<_>>(),
               vec![(Prefix::Loud, "status", true), (Prefix::Forced, "b3", true)]);
}

/// A doubled sigil invokes the configured alias command
#[test]
fn alias_command() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(3, "Foo", "GUID3", RED);
    bench.feed(&["say: 3 Foo: !!hello there"]);
    let commands = bench.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].handle, "say");
    assert_eq!(commands[0].params.as_deref(), Some("hello there"));

    let bench = TestBench::with_config(Protocol::Iourt41, Config { command_alias: "tell".to_string(), ..Config::default() });
    bench.connect(3, "Foo", "GUID3", RED);
    bench.feed(&["say: 3 Foo: @@hello"]);
    let commands = bench.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].handle, "tell");
    assert_eq!(commands[0].prefix, Prefix::Loud);
}

#[test]
fn chat() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(3, "Foo", "GUID3", RED);
    bench.connect(4, "Bar", "GUID4", RED);
    assert!(matches!(bench.single_event("say: 3 Foo: hello all"),
                     Event::Say { client, message } if client.name == "Foo" && message == "hello all"));
    assert!(matches!(bench.single_event("sayteam: 3 Foo: cover me"),
                     Event::SayTeam { client, message } if client.name == "Foo" && message == "cover me"));
    assert!(matches!(bench.single_event("saytell: 3 4 Foo: nice try"),
                     Event::SayPrivate { client, target, message } if client.name == "Foo" && target.name == "Bar" && message == "nice try"));
    assert!(matches!(bench.single_event("say: 3 Foo: 10:30 is: the time"),
                     Event::Say { message, .. } if message == "10:30 is: the time"));
    // a lone sigil is just chat
    assert!(matches!(bench.single_event("say: 3 Foo: !"), Event::Say { .. }));
}

#[test]
fn empty_messages() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(3, "Foo", "GUID3", RED);
    bench.nothing("say: 3 Foo:");
    bench.nothing("sayteam: 3 Foo:    ");
}

/// Some servers report wrong slots in the chat lines: the speaker is then searched for by name
#[test]
fn speaker_name_fallback() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(3, "Foo", "GUID3", RED);
    bench.connect(6, "Twin", "GUID6", RED);
    bench.connect(7, "Twin", "GUID7", BLUE);

    assert!(matches!(bench.single_event("say: 5 Foo: hello"), Event::Say { client, .. } if client.slot == Some(3)));
    assert!(matches!(bench.single_event("say: 5 ^1Foo: hello"), Event::Say { client, .. } if client.slot == Some(3)));
    // the slot agrees with the name: no ambiguity
    assert!(matches!(bench.single_event("say: 7 Twin: hello"), Event::Say { client, .. } if client.slot == Some(7)));
    // ambiguous
    bench.nothing("say: 9 Twin: hello");
    // nobody
    bench.nothing("say: 9 Nobody: hello");
}

/// Names may contain the `:` separating the speaker from the message
#[test]
fn speaker_names_with_colons() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(3, "a:b", "GUID3", RED);
    assert!(matches!(bench.single_event("1:00 say: 3 a:b: hello"),
                     Event::Say { client, message } if client.slot == Some(3) && message == "hello"));
    assert!(matches!(bench.single_event("1:01 sayteam: 3 ^1a:^7b: hi: there"),
                     Event::SayTeam { client, message } if client.name == "a:b" && message == "hi: there"));
    bench.feed(&["1:02 say: 3 a:b: !kick 4 spam"]);
    let commands = bench.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].handle, "kick");
    assert_eq!(commands[0].client.name, "a:b");
}


// clients lifecycle
////////////////////

/// Tests the record of a brand new client
#[test]
fn new_client() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.nothing("0:02 ClientConnect: 0");
    let client = match bench.single_event(r#"0:02 ClientUserinfo: 0 \ip\10.0.0.10:27960\name\^4Isgal^7amido\racered\2\gear\GZAAVWT\cl_guid\8982B13A8DCEC1D9DB5E4AD8E5D6B4C0"#) {
        Event::ClientConnect { client } => client,
        other => panic!("Expected `Event::ClientConnect`, got {other:?}"),
    };
    assert_eq!(client.id, Some(1), "The client should have been persisted");
    assert_eq!(client.slot, Some(0));
    assert_eq!(client.group.keyword, "guest");
    assert_eq!(client.connections, 1);
    assert_eq!(client.name, "Isgalamido");
    assert_eq!(client.ip, "10.0.0.10".parse::<IpAddr>().ok());
    assert_eq!(client.guid.as_deref(), Some("8982B13A8DCEC1D9DB5E4AD8E5D6B4C0"));
    assert_eq!(client.gear.as_deref(), Some("GZAAVWT"));
    assert!(!client.bot);
    assert_eq!(bench.registry.get_by_slot(0), Some(client.clone()), "The slot should be bound to the new client");
    assert_eq!(bench.registry.get_by_id(1), Some(client));

    assert!(matches!(bench.single_event("0:02 ClientBegin: 0"), Event::ClientJoin { client } if client.name == "Isgalamido"));
}

#[test]
fn bots() {
    let bench = TestBench::new(Protocol::Iourt41);
    let client = match bench.single_event(r#"0:07 ClientUserinfo: 2 \name\Boa\skill\5.000000\gear\GZAAVWT\ip\bot"#) {
        Event::ClientConnect { client } => client,
        other => panic!("Expected `Event::ClientConnect`, got {other:?}"),
    };
    assert!(client.bot);
    assert_eq!(client.guid.as_deref(), Some("BOT2"));
    assert_eq!(client.ip, None);
    assert_eq!(client.name, "Boa");
}

/// Reconnecting counts as a new connection only after the configured threshold (an hour) since the last activity
#[test]
fn connections_counter() {
    for (ago, expected_connections) in [(Duration::minutes(30), 5),
                                        (Duration::seconds(3600), 5),
                                        (Duration::hours(2), 6)] {
        let bench = TestBench::new(Protocol::Iourt41);
        let known = bench.known_client("Foo", "GUIDX", 5, ago);
        let client = match bench.single_event(r#"ClientUserinfo: 4 \ip\10.0.0.4:27960\name\Foo\cl_guid\GUIDX"#) {
            Event::ClientConnect { client } => client,
            other => panic!("Expected `Event::ClientConnect`, got {other:?}"),
        };
        assert_eq!(client.id, known.id, "The persisted client should have been recognized by its guid");
        assert_eq!(client.group.keyword, "user", "Recognized clients keep their group");
        assert_eq!(client.connections, expected_connections, "Wrong connections count after being away for {ago}");
        assert_eq!(bench.registry.persisted_count(), 1);
    }
}

/// Nothing is bound nor emitted for clients that couldn't be persisted
#[test]
fn persistence_failures() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.registry.set_unavailable(true);
    bench.nothing(r#"ClientUserinfo: 0 \ip\10.0.0.10:27960\name\Foo\cl_guid\GUID0"#);
    assert!(bench.registry.get_by_slot(0).is_none());
    bench.nothing("ClientBegin: 0");

    bench.registry.set_unavailable(false);
    assert!(matches!(bench.single_event(r#"ClientUserinfo: 0 \ip\10.0.0.10:27960\name\Foo\cl_guid\GUID0"#), Event::ClientConnect { .. }));
}

/// At most one event per `ClientUserinfo` of a bound slot: name changes have priority over gear changes
#[test]
fn userinfo_updates() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(0, "Foo", "GUID0", RED);

    assert!(matches!(bench.single_event(r#"ClientUserinfo: 0 \name\Bar\gear\GZAAVWT\cl_guid\GUID0"#),
                     Event::ClientNameChange { client, previous_name } if client.name == "Bar" && previous_name == "Foo"));
    assert!(matches!(bench.single_event(r#"ClientUserinfo: 0 \name\Bar\gear\FLAOSWA\cl_guid\GUID0"#),
                     Event::ClientGearChange { client, previous_gear } if client.gear.as_deref() == Some("FLAOSWA") && previous_gear.as_deref() == Some("GZAAVWT")));
    assert!(matches!(bench.single_event(r#"ClientUserinfo: 0 \name\Baz\gear\GMIORAA\cl_guid\GUID0"#),
                     Event::ClientNameChange { client, .. } if client.gear.as_deref() == Some("GMIORAA")));
    bench.nothing(r#"ClientUserinfo: 0 \name\Baz\gear\GMIORAA\cl_guid\GUID0"#);

    let stored = bench.registry.get_by_slot(0).expect("The slot should still be bound");
    assert_eq!(stored.name, "Baz");
    assert_eq!(stored.gear.as_deref(), Some("GMIORAA"));
    assert_eq!(stored.connections, 1, "Userinfo updates are not new connections");
}

/// `ClientUserinfoChanged`: team changes have priority over name changes
#[test]
fn team_and_name_changes() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(0, "Foo", "GUID0", RED);

    assert!(matches!(bench.single_event(r#"ClientUserinfoChanged: 0 n\Foo\t\2\r\0\tl\0"#),
                     Event::ClientTeamChange { client, previous_team: Team::Red } if client.team == Team::Blue));
    assert!(matches!(bench.single_event(r#"ClientUserinfoChanged: 0 n\^2Fooz\t\2\r\0\tl\0"#),
                     Event::ClientNameChange { client, previous_name } if client.name == "Fooz" && previous_name == "Foo"));
    // both changed: the team change is reported first, then the rename, on the next line
    assert!(matches!(bench.single_event(r#"ClientUserinfoChanged: 0 n\Foo\t\3\r\0\tl\0"#),
                     Event::ClientTeamChange { client, previous_team: Team::Blue } if client.name == "Fooz" && client.team == Team::Spectator));
    assert!(matches!(bench.single_event(r#"ClientUserinfoChanged: 0 n\Foo\t\3\r\0\tl\0"#),
                     Event::ClientNameChange { client, previous_name } if client.name == "Foo" && previous_name == "Fooz"));
    bench.nothing(r#"ClientUserinfoChanged: 0 n\Foo\t\3\r\0\tl\0"#);
    bench.nothing(r#"ClientUserinfoChanged: 0 n\Foo\t\7\r\0\tl\0"#);
    assert_eq!(bench.registry.get_by_slot(0).map(|client| client.team), Some(Team::Spectator), "Unmapped teams should change nothing");
}

/// Clients locked into a team are forced back into it, silently
#[test]
fn team_lock() {
    let bench = TestBench::new(Protocol::Iourt41);
    let mut client = bench.connect(0, "Foo", "GUID0", RED);
    client.set_var(LOCKED_TEAM_VAR, "red");
    bench.registry.save(client).expect("The registry is available");

    bench.nothing(r#"ClientUserinfoChanged: 0 n\Foo\t\2\r\0\tl\0"#);
    assert_eq!(bench.console.written(), vec!["forceteam 0 red".to_string(), "tell 0 ^7You are locked in the ^3red^7 team".to_string()]);
    assert_eq!(bench.registry.get_by_slot(0).map(|client| client.team), Some(Team::Red));

    // a rename in a rejected team change is not lost: it is reported once the client is back in its team
    bench.nothing(r#"ClientUserinfoChanged: 0 n\Bar\t\2\r\0\tl\0"#);
    assert_eq!(bench.registry.get_by_slot(0).map(|client| client.name), Some("Foo".to_string()));
    assert!(matches!(bench.single_event(r#"ClientUserinfoChanged: 0 n\Bar\t\1\r\0\tl\0"#),
                     Event::ClientNameChange { client, previous_name } if client.name == "Bar" && previous_name == "Foo"));
    assert_eq!(bench.console.written().len(), 4);

    // with the console down, the line is still abandoned
    bench.console.set_unavailable(true);
    bench.nothing(r#"ClientUserinfoChanged: 0 n\Bar\t\2\r\0\tl\0"#);
    assert_eq!(bench.console.written().len(), 4);
    assert_eq!(bench.registry.get_by_slot(0).map(|client| client.team), Some(Team::Red));
}

#[test]
fn disconnections() {
    let bench = TestBench::new(Protocol::Iourt41);
    let connected = bench.connect(0, "Foo", "GUID0", RED);
    match bench.single_event("2:00 ClientDisconnect: 0") {
        Event::ClientDisconnect { client } => {
            assert_eq!(client.name, "Foo");
            assert_eq!(client.id, connected.id);
            assert!(client.time_edit >= connected.time_edit);
        },
        other => panic!("Expected `Event::ClientDisconnect`, got {other:?}"),
    }
    assert!(bench.registry.get_by_slot(0).is_none(), "The slot should have been released");
    assert!(bench.registry.get_by_guid("GUID0").is_some(), "The client should stay persisted");
    bench.nothing("2:01 ClientDisconnect: 0");
    bench.nothing("2:02 say: 0 Foo: still here?");
}

/// Clients coming back get a clean session: their ephemeral vars are not restored
#[test]
fn reconnections_reset_the_session() {
    let bench = TestBench::new(Protocol::Iourt41);
    let mut client = bench.connect(0, "Foo", "GUID0", RED);
    client.set_var(LOCKED_TEAM_VAR, "red");
    bench.registry.save(client).expect("The registry is available");
    bench.feed(&["ClientDisconnect: 0"]);
    bench.events();

    let client = bench.connect(5, "Foo", "GUID0", BLUE);
    assert_eq!(client.slot, Some(5));
    assert_eq!(client.var(LOCKED_TEAM_VAR), None);
    assert_eq!(client.team, Team::Blue);
    assert_eq!(bench.registry.persisted_count(), 1);
}


// game flow
////////////

#[test]
fn game_flow() {
    let bench = TestBench::new(Protocol::Iourt41);
    assert_eq!(bench.single_event(r#"0:00 InitGame: \sv_maxclients\12\g_gametype\4\sv_maxPing\200\mapname\ut4_abbey\g_mapcycle\mapcycle.txt"#),
               Event::GameStart { map_name: Some("ut4_abbey".to_string()), gametype: Some(Gametype::TeamSurvivor) });
    {
        let game = bench.game.read();
        assert_eq!(game.max_clients, Some(12));
        assert_eq!(game.max_ping, Some(200));
        assert_eq!(game.map_cycle.as_deref(), Some("mapcycle.txt"));
        assert!(!game.auth_enable);
    }
    assert_eq!(bench.single_event("0:00 Warmup:"), Event::GameWarmup);
    assert_eq!(bench.single_event(r#"0:15 InitRound: \g_gametype\4"#),
               Event::RoundStart { map_name: Some("ut4_abbey".to_string()), gametype: Some(Gametype::TeamSurvivor) });
    // as a map listing plugin would cache it
    bench.game.write().map_list = vec!["ut4_abbey".to_string(), "ut4_casa".to_string()];
    assert_eq!(bench.single_event("2:10 Exit: Timelimit hit."), Event::GameExit { reason: "Timelimit hit.".to_string() });
    assert_eq!(bench.game.read().map_name, None, "The game should have been reset");
    assert!(bench.game.read().map_list.is_empty(), "The cached map list should have been dropped");

    assert!(matches!(bench.single_event(r#"3:00 InitGame: \mapname\ut4_casa\g_gametype\0"#), Event::GameStart { gametype: Some(Gametype::FreeForAll), .. }));
    assert_eq!(bench.single_event("3:15 ShutdownGame:"), Event::GameShutdown);
    assert_eq!(bench.game.read().gametype, None, "The game should have been reset");
}

/// An unmapped gametype abandons the line before the game record is touched
#[test]
fn unmapped_gametype() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.feed(&[r#"InitGame: \mapname\ut4_abbey\g_gametype\7"#]);
    bench.events();
    bench.nothing(r#"InitGame: \mapname\ut4_casa\g_gametype\9"#);
    let game = bench.game.read();
    assert_eq!(game.map_name.as_deref(), Some("ut4_abbey"));
    assert_eq!(game.gametype, Some(Gametype::CaptureTheFlag));
}


// objectives
/////////////

#[test]
fn objectives() {
    let bench = TestBench::new(Protocol::Iourt41);
    bench.connect(0, "Foo", "GUID0", RED);
    assert!(matches!(bench.single_event("Item: 0 ut_weapon_ak103"), Event::ItemPickup { item: Item::Ak103, .. }));
    assert!(matches!(bench.single_event("Item: 0 ut_item_vest"), Event::ItemPickup { item: Item::Vest, .. }));
    assert!(matches!(bench.single_event("Flag: 0 0: team_CTF_blueflag"), Event::FlagDrop { flag: Item::BlueFlag, .. }));
    assert!(matches!(bench.single_event("Flag: 0 1: team_CTF_redflag"), Event::FlagReturn { flag: Item::RedFlag, .. }));
    assert!(matches!(bench.single_event("Flag: 0 2: team_CTF_blueflag"), Event::FlagCapture { flag: Item::BlueFlag, .. }));
    assert_eq!(bench.single_event("Flag Return: BLUE"), Event::FlagAutoReturn { team: Team::Blue });
    assert_eq!(bench.single_event("FlagReturn: RED"), Event::FlagAutoReturn { team: Team::Red });
    assert!(matches!(bench.single_event("Bomb was planted by 0!"), Event::BombPlanted { client } if client.name == "Foo"));
    assert!(matches!(bench.single_event("Bomb was defused by 0!"), Event::BombDefused { .. }));
    assert!(matches!(bench.single_event("Bomb was tossed by 0"), Event::BombTossed { .. }));
    assert!(matches!(bench.single_event("Bombholder is 0"), Event::BombHolder { .. }));
    assert_eq!(bench.single_event("2:10 red:8  blue:5"), Event::TeamScores { red: 8, blue: 5 });

    bench.nothing("Item: 0 ut_weapon_unknown");
    bench.nothing("Flag: 0 5: team_CTF_blueflag");
    bench.nothing("Flag Return: GREEN");
}


// shutdown & api
/////////////////

/// Once the shutdown is triggered, lines are still consumed but nothing else is queued
#[test]
fn shutdown_interrupts_the_emission() {
    let (trigger, signal) = shutdown_channel();
    let variant = ParserVariant::for_protocol(Protocol::Iourt41).expect("The protocol variant should build");
    let bench = TestBench::with_variant(variant, Config { queue_capacity: 2, ..Config::default() }, signal);
    bench.feed(&["Warmup:", "Warmup:"]);
    trigger.trigger();
    // the queue is full: without the shutdown, this would block forever
    bench.feed(&["Warmup:", "ShutdownGame:"]);
    assert_eq!(bench.events(), vec![Event::GameWarmup, Event::GameWarmup]);
    assert_eq!(bench.game.read().map_name, None);
}

#[test]
fn teams() {
    let bench = TestBench::new(Protocol::Iourt41);
    assert_eq!(bench.parser.team_by_name("b"), Some(Team::Blue));
    assert_eq!(bench.parser.team_by_name("Spectator"), Some(Team::Spectator));
    assert_eq!(bench.parser.team_by_name("green"), None);

    assert_eq!(bench.parser.available_teams(Some(Gametype::CaptureTheFlag)), vec![Team::Red, Team::Blue, Team::Spectator]);
    assert_eq!(bench.parser.available_teams(Some(Gametype::Jump)), Vec::<Team>::new(), "Jump mode doesn't exist in 4.1");
}

/// With no `InitGame` seen yet, the gametype is asked to the server -- and remembered
#[test]
fn lazy_gametype_resolution() {
    let bench = TestBench::new(Protocol::Iourt41);
    assert_eq!(bench.parser.available_teams(None), Vec::<Team>::new(), "Unknown gametypes have no teams");
    bench.console.set_cvar("g_gametype", "0");
    assert_eq!(bench.parser.available_teams(None), vec![Team::Free, Team::Spectator]);
    assert_eq!(bench.game.read().gametype, Some(Gametype::FreeForAll));
}


fn assert_kill_self(event: Event, expected_name: &str, expected_means_of_death: MeansOfDeath) {
    match event {
        Event::KillSelf { client, means_of_death } => {
            assert_eq!(client.name, expected_name, "Wrong client killed itself");
            assert_eq!(means_of_death, expected_means_of_death);
        },
        other => panic!("Expected `Event::KillSelf`, got {other:?}"),
    }
}
