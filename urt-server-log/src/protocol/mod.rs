//! The protocol revisions the parsers understand.
//!
//! Each revision owns its complete set of code tables: codes get renumbered between revisions,
//! so a newer revision never inherits the tables of an older one.

pub mod iourt41;
pub mod iourt42;

use strum_macros::{Display, EnumIter, EnumString};
use crate::code_tables::CodeTables;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Protocol {
    /// Urban Terror 4.1
    Iourt41,
    /// Urban Terror 4.2
    Iourt42,
}

impl Protocol {

    pub fn code_tables(&self) -> CodeTables {
        match self {
            Protocol::Iourt41 => iourt41::code_tables(),
            Protocol::Iourt42 => iourt42::code_tables(),
        }
    }

}
