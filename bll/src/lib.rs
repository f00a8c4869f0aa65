//! The Business Logic Layer: turns Urban Terror server log lines into [model::events::Event]s &
//! [model::command::Command]s, placing them on their queues.
//!
//!  1) [parser] -- the line dispatcher, implementing [bll_api::LogParserApi];
//!  2) [variants] -- the supported protocols, each one a set of code tables plus an ordered list of line formats;
//!  3) [handlers] -- what to do with each line format;
//!  4) [queues] -- the cancellable, bounded outbound queues.

pub mod errors;
pub mod queues;
pub mod parser;
pub mod handlers;
pub mod variants;

pub use parser::{Collaborators, LogParser, ParserContext};
