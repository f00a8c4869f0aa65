//! Line formats of the Urban Terror 4.1 protocol -- also the base for the newer ones

use crate::handlers::{chat, clients, combat, game, objectives};
use super::LineFormat;


// game flow
////////////

pub const INIT_GAME: LineFormat = LineFormat {
    name: "InitGame",
    pattern: r#"InitGame:\s*(?P<data>.*)"#,
    handler: game::on_init_game,
};
pub const INIT_ROUND: LineFormat = LineFormat {
    name: "InitRound",
    pattern: r#"InitRound:\s*(?P<data>.*)"#,
    handler: game::on_init_round,
};
pub const WARMUP: LineFormat = LineFormat {
    name: "Warmup",
    pattern: r#"Warmup:"#,
    handler: game::on_warmup,
};
pub const EXIT: LineFormat = LineFormat {
    name: "Exit",
    pattern: r#"Exit:\s*(?P<reason>.*)"#,
    handler: game::on_exit,
};
pub const SHUTDOWN_GAME: LineFormat = LineFormat {
    name: "ShutdownGame",
    pattern: r#"ShutdownGame:"#,
    handler: game::on_shutdown_game,
};

// clients
//////////

pub const CLIENT_CONNECT: LineFormat = LineFormat {
    name: "ClientConnect",
    pattern: r#"ClientConnect:\s*(?P<slot>\d+)"#,
    handler: clients::on_client_connect,
};
pub const CLIENT_USERINFO: LineFormat = LineFormat {
    name: "ClientUserinfo",
    pattern: r#"ClientUserinfo:\s*(?P<slot>\d+)\s+(?P<data>.*)"#,
    handler: clients::on_client_userinfo,
};
pub const CLIENT_USERINFO_CHANGED: LineFormat = LineFormat {
    name: "ClientUserinfoChanged",
    pattern: r#"ClientUserinfoChanged:\s*(?P<slot>\d+)\s+(?P<data>.*)"#,
    handler: clients::on_client_userinfo_changed,
};
pub const CLIENT_BEGIN: LineFormat = LineFormat {
    name: "ClientBegin",
    pattern: r#"ClientBegin:\s*(?P<slot>\d+)"#,
    handler: clients::on_client_begin,
};
pub const CLIENT_DISCONNECT: LineFormat = LineFormat {
    name: "ClientDisconnect",
    pattern: r#"ClientDisconnect:\s*(?P<slot>\d+)"#,
    handler: clients::on_client_disconnect,
};

// combat
/////////

pub const KILL: LineFormat = LineFormat {
    name: "Kill",
    pattern: r#"Kill:\s*(?P<attacker>\d+)\s+(?P<victim>\d+)\s+(?P<mod>\d+):\s*(?P<text>.*)"#,
    handler: combat::on_kill,
};
/// The victim comes first
pub const HIT: LineFormat = LineFormat {
    name: "Hit",
    pattern: r#"Hit:\s*(?P<victim>\d+)\s+(?P<attacker>\d+)\s+(?P<location>\d+)\s+(?P<weapon>\d+):\s*(?P<text>.*)"#,
    handler: combat::on_hit,
};

// objectives
/////////////

pub const ITEM: LineFormat = LineFormat {
    name: "Item",
    pattern: r#"Item:\s*(?P<slot>\d+)\s+(?P<item>\S+)"#,
    handler: objectives::on_item,
};
pub const FLAG: LineFormat = LineFormat {
    name: "Flag",
    pattern: r#"Flag:\s*(?P<slot>\d+)\s+(?P<action>\d+):\s*(?P<flag>\S+)"#,
    handler: objectives::on_flag,
};
pub const FLAG_RETURN: LineFormat = LineFormat {
    name: "FlagReturn",
    pattern: r#"Flag\s?Return:\s*(?P<team>\S+)"#,
    handler: objectives::on_flag_return,
};
pub const BOMB: LineFormat = LineFormat {
    name: "Bomb",
    pattern: r#"Bomb\s+was\s+(?P<action>planted|defused|tossed)\s+by\s+(?P<slot>\d+)\s*!?"#,
    handler: objectives::on_bomb,
};
pub const BOMB_HOLDER: LineFormat = LineFormat {
    name: "BombHolder",
    pattern: r#"Bombholder\s+is\s+(?P<slot>\d+)"#,
    handler: objectives::on_bomb_holder,
};
pub const TEAM_SCORES: LineFormat = LineFormat {
    name: "TeamScores",
    pattern: r#"red:\s*(?P<red>\d+)\s+blue:\s*(?P<blue>\d+)"#,
    handler: objectives::on_team_scores,
};

// chat
///////

pub const SAY: LineFormat = LineFormat {
    name: "Say",
    pattern: r#"say:\s*(?P<slot>\d+)\s+(?P<name>.*?):\s*(?P<message>.*)"#,
    handler: chat::on_say,
};
pub const SAY_TEAM: LineFormat = LineFormat {
    name: "SayTeam",
    pattern: r#"sayteam:\s*(?P<slot>\d+)\s+(?P<name>.*?):\s*(?P<message>.*)"#,
    handler: chat::on_say_team,
};
pub const SAY_TELL: LineFormat = LineFormat {
    name: "SayTell",
    pattern: r#"saytell:\s*(?P<slot>\d+)\s+(?P<target>\d+)\s+(?P<name>.*?):\s*(?P<message>.*)"#,
    handler: chat::on_say_tell,
};


/// In priority order
pub static LINE_FORMATS: &[LineFormat] = &[
    CLIENT_USERINFO_CHANGED,
    CLIENT_USERINFO,
    CLIENT_CONNECT,
    CLIENT_BEGIN,
    CLIENT_DISCONNECT,
    KILL,
    HIT,
    ITEM,
    FLAG,
    FLAG_RETURN,
    BOMB,
    BOMB_HOLDER,
    SAY,
    SAY_TEAM,
    SAY_TELL,
    TEAM_SCORES,
    INIT_GAME,
    INIT_ROUND,
    WARMUP,
    EXIT,
    SHUTDOWN_GAME,
];
