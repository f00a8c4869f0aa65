//! Protocol level knowledge of the Urban Terror server logs:
//!  1) [info_string] -- the `\key\value` serialization used for game & client metadata;
//!  2) [patterns] -- ordered tables of named regular expressions classifying log lines;
//!  3) [code_tables] & [protocol] -- the numeric codes of each protocol revision, mapped to the `model` enums;
//!  4) [text] -- small helpers for the texts players write (names & chat).
//!
//! What to do with a classified line is up to the `bll` crate.

pub mod info_string;
pub mod patterns;
pub mod code_tables;
pub mod protocol;
pub mod text;
