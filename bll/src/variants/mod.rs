//! The protocol variants: a variant is a value -- its code tables plus its ordered list of [LineFormat]s.
//!
//! Handlers are shared: a newer protocol lists the formats it keeps from the older one, replaces the ones
//! whose semantics changed and appends the new ones. Supporting a third protocol means writing one more
//! module with its code tables and line formats.

pub mod iourt41;
pub mod iourt42;

use std::fmt::{Debug, Formatter};
use urt_server_log::{
    code_tables::CodeTables,
    patterns::{PatternError, PatternTable},
    protocol::Protocol,
};
use crate::handlers::Handler;


/// A line shape and how to handle it
#[derive(Clone, Copy)]
pub struct LineFormat {
    pub name: &'static str,
    /// Regular expression body, with named groups for the fields -- see [PatternTable::new()] for how it is completed
    pub pattern: &'static str,
    pub handler: Handler,
}

pub struct ParserVariant {
    pub protocol: Protocol,
    pub tables: CodeTables,
    pub line_formats: PatternTable<Handler>,
}

impl ParserVariant {

    /// Compiles `line_formats`, keeping their order as the matching priority
    pub fn new(protocol: Protocol, tables: CodeTables, line_formats: &[LineFormat]) -> Result<Self, PatternError> {
        let line_formats = PatternTable::new(line_formats.iter()
            .map(|format| (format.name, format.pattern, format.handler)))?;
        Ok(Self { protocol, tables, line_formats })
    }

    pub fn for_protocol(protocol: Protocol) -> Result<Self, PatternError> {
        match protocol {
            Protocol::Iourt41 => Self::new(protocol, protocol.code_tables(), iourt41::LINE_FORMATS),
            Protocol::Iourt42 => Self::new(protocol, protocol.code_tables(), iourt42::LINE_FORMATS),
        }
    }

}

impl Debug for ParserVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserVariant")
            .field("protocol", &self.protocol)
            .field("line_formats", &self.line_formats.names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
