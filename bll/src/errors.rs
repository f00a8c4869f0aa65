//! Resting place for [HandlerError]

use dal_api::DalError;
use log::Level;
use urt_server_log::code_tables::CodeTableError;


/// Why a line handler abandoned its line.\
/// None of these stop the log processing: they are logged by the dispatcher at the [HandlerError::severity()] level.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// The code tables are incomplete for the server being observed
    #[error("unmapped code: {0}")]
    UnmappedCode(#[from] CodeTableError),
    #[error("no client found {0}")]
    ClientNotFound(String),
    #[error("{count} connected clients are named '{name}'")]
    AmbiguousName { name: String, count: usize },
    #[error("malformed `{field}`: '{value}'")]
    Malformed { field: &'static str, value: String },
    #[error("empty chat message")]
    EmptyMessage,
    #[error("the group with keyword '{0}' doesn't exist")]
    MissingGroup(String),
    #[error("persistence failure: {0}")]
    Persistence(DalError),
    #[error("console failure: {0}")]
    Console(DalError),
}

impl HandlerError {

    pub fn severity(&self) -> Level {
        match self {
            HandlerError::UnmappedCode(_)              => Level::Error,
            HandlerError::ClientNotFound(_)            |
            HandlerError::AmbiguousName { .. }         => Level::Debug,
            HandlerError::Malformed { .. }             |
            HandlerError::EmptyMessage                 => Level::Warn,
            HandlerError::MissingGroup(_)              |
            HandlerError::Persistence(_)               |
            HandlerError::Console(_)                   => Level::Error,
        }
    }

}
