//! Implementations of the collaborators declared in `dal-api`:
//!  1) Log line feeds, reading from files (optionally following them as the server appends lines) or from the standard input;
//!  2) In-memory client registry, group lookup & console -- used by the application when no real storage / RCON is
//!     configured and by the tests of the upper layers.

pub mod factory;
pub mod sync_reader;
pub mod sync_file_reader;
pub mod stdin_reader;
pub mod memory_registry;
pub mod memory_groups;
pub mod memory_console;
