//! Line formats of the Urban Terror 4.2 protocol: the 4.1 ones, with the auth aware connection
//! handling, plus votes, radio, jump mode & survivor winners

use crate::handlers::{chat, clients, jump, objectives, votes};
use super::{iourt41, LineFormat};


/// Identifies the players through the auth system, when it is enabled
pub const CLIENT_USERINFO: LineFormat = LineFormat {
    name: "ClientUserinfo",
    pattern: r#"ClientUserinfo:\s*(?P<slot>\d+)\s+(?P<data>.*)"#,
    handler: clients::on_client_userinfo_with_auth,
};

// votes
////////

pub const CALLVOTE: LineFormat = LineFormat {
    name: "Callvote",
    pattern: r#"Callvote:\s*(?P<slot>\d+)\s*-\s*"(?P<vote>.*)""#,
    handler: votes::on_callvote,
};
pub const VOTE: LineFormat = LineFormat {
    name: "Vote",
    pattern: r#"Vote:\s*(?P<slot>\d+)\s*-\s*(?P<vote>\d+)"#,
    handler: votes::on_vote,
};
pub const VOTE_PASSED: LineFormat = LineFormat {
    name: "VotePassed",
    pattern: r#"VotePassed:\s*(?P<yes>\d+)\s*-\s*(?P<no>\d+)\s*-\s*"(?P<what>.*)""#,
    handler: votes::on_vote_passed,
};
pub const VOTE_FAILED: LineFormat = LineFormat {
    name: "VoteFailed",
    pattern: r#"VoteFailed:\s*(?P<yes>\d+)\s*-\s*(?P<no>\d+)\s*-\s*"(?P<what>.*)""#,
    handler: votes::on_vote_failed,
};

// radio
////////

pub const RADIO: LineFormat = LineFormat {
    name: "Radio",
    pattern: r#"Radio:\s*(?P<slot>\d+)\s*-\s*(?P<group>\d+)\s*-\s*(?P<id>\d+)\s*-\s*"(?P<location>.*?)"\s*-\s*"(?P<message>.*)""#,
    handler: chat::on_radio,
};

// jump mode
////////////

pub const CLIENT_JUMP_RUN_STARTED: LineFormat = LineFormat {
    name: "ClientJumpRunStarted",
    pattern: r#"ClientJumpRunStarted:\s*(?P<slot>\d+)\s*-\s*way:\s*(?P<way>\d+)(?:\s*-\s*attempt:\s*(?P<attempt>\d+)\s+of\s+(?P<max_attempts>\d+))?"#,
    handler: jump::on_jump_run_started,
};
pub const CLIENT_JUMP_RUN_STOPPED: LineFormat = LineFormat {
    name: "ClientJumpRunStopped",
    pattern: r#"ClientJumpRunStopped:\s*(?P<slot>\d+)\s*-\s*way:\s*(?P<way>\d+)\s*-\s*time:\s*(?P<time>\d+)(?:\s*-\s*attempt:\s*(?P<attempt>\d+)\s+of\s+(?P<max_attempts>\d+))?"#,
    handler: jump::on_jump_run_stopped,
};
pub const CLIENT_JUMP_RUN_CANCELED: LineFormat = LineFormat {
    name: "ClientJumpRunCanceled",
    pattern: r#"ClientJumpRunCanceled:\s*(?P<slot>\d+)\s*-\s*way:\s*(?P<way>\d+)(?:\s*-\s*attempt:\s*(?P<attempt>\d+)\s+of\s+(?P<max_attempts>\d+))?"#,
    handler: jump::on_jump_run_canceled,
};
pub const CLIENT_SAVE_POSITION: LineFormat = LineFormat {
    name: "ClientSavePosition",
    pattern: r#"ClientSavePosition:\s*(?P<slot>\d+)\s*-\s*(?P<x>-?[\d.]+)\s*-\s*(?P<y>-?[\d.]+)\s*-\s*(?P<z>-?[\d.]+)"#,
    handler: jump::on_save_position,
};
pub const CLIENT_LOAD_POSITION: LineFormat = LineFormat {
    name: "ClientLoadPosition",
    pattern: r#"ClientLoadPosition:\s*(?P<slot>\d+)\s*-\s*(?P<x>-?[\d.]+)\s*-\s*(?P<y>-?[\d.]+)\s*-\s*(?P<z>-?[\d.]+)"#,
    handler: jump::on_load_position,
};
pub const CLIENT_GOTO: LineFormat = LineFormat {
    name: "ClientGoto",
    pattern: r#"ClientGoto:\s*(?P<slot>\d+)\s*-\s*(?P<target>\d+)\s*-\s*(?P<x>-?[\d.]+)\s*-\s*(?P<y>-?[\d.]+)\s*-\s*(?P<z>-?[\d.]+)"#,
    handler: jump::on_goto,
};

// survivor modes
/////////////////

/// A team name or, in the free-for-all modes, the slot of the last one standing
pub const SURVIVOR_WINNER: LineFormat = LineFormat {
    name: "SurvivorWinner",
    pattern: r#"SurvivorWinner:\s*(?P<winner>\S+)"#,
    handler: objectives::on_survivor_winner,
};


/// In priority order
pub static LINE_FORMATS: &[LineFormat] = &[
    iourt41::CLIENT_USERINFO_CHANGED,
    CLIENT_USERINFO,
    iourt41::CLIENT_CONNECT,
    iourt41::CLIENT_BEGIN,
    iourt41::CLIENT_DISCONNECT,
    iourt41::KILL,
    iourt41::HIT,
    iourt41::ITEM,
    iourt41::FLAG,
    iourt41::FLAG_RETURN,
    iourt41::BOMB,
    iourt41::BOMB_HOLDER,
    iourt41::SAY,
    iourt41::SAY_TEAM,
    iourt41::SAY_TELL,
    RADIO,
    CALLVOTE,
    VOTE,
    VOTE_PASSED,
    VOTE_FAILED,
    CLIENT_JUMP_RUN_STARTED,
    CLIENT_JUMP_RUN_STOPPED,
    CLIENT_JUMP_RUN_CANCELED,
    CLIENT_SAVE_POSITION,
    CLIENT_LOAD_POSITION,
    CLIENT_GOTO,
    SURVIVOR_WINNER,
    iourt41::TEAM_SCORES,
    iourt41::INIT_GAME,
    iourt41::INIT_ROUND,
    iourt41::WARMUP,
    iourt41::EXIT,
    iourt41::SHUTDOWN_GAME,
];
