//! Resting place for [MemoryConsole]

use std::collections::HashMap;
use dal_api::{Console, DalError};
use log::debug;
use model::Slot;
use parking_lot::{Mutex, RwLock};


/// [Console] stand-in for when no RCON connection is available: server variables & auth logins are
/// whatever was set through this object, and written commands are recorded instead of sent
#[derive(Debug, Default)]
pub struct MemoryConsole {
    cvars: RwLock<HashMap<String, String>>,
    auth_logins: RwLock<HashMap<Slot, String>>,
    written: Mutex<Vec<String>>,
    unavailable: RwLock<bool>,
}

impl MemoryConsole {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cvar<IntoString: Into<String>>(&self, name: &str, value: IntoString) {
        self.cvars.write().insert(name.to_ascii_lowercase(), value.into());
    }

    /// Sets what `auth-whois` reports for `slot`
    pub fn set_auth_login<IntoString: Into<String>>(&self, slot: Slot, auth_login: IntoString) {
        self.auth_logins.write().insert(slot, auth_login.into());
    }

    /// When `true`, commands fail -- as a real console would while the server is unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write() = unavailable;
    }

    /// The commands written so far, in order
    pub fn written(&self) -> Vec<String> {
        self.written.lock().clone()
    }

    fn check_availability(&self) -> Result<(), DalError> {
        if *self.unavailable.read() {
            Err(DalError::Console("the game server is unreachable".to_string()))
        } else {
            Ok(())
        }
    }

}

impl Console for MemoryConsole {

    fn cvar(&self, name: &str) -> Option<String> {
        self.cvars.read().get(&name.to_ascii_lowercase()).cloned()
    }

    fn auth_whois(&self, slot: Slot) -> Result<Option<String>, DalError> {
        self.check_availability()?;
        Ok(self.auth_logins.read().get(&slot).cloned())
    }

    fn write(&self, command: &str) -> Result<(), DalError> {
        self.check_availability()?;
        debug!("RCON <- {command}");
        self.written.lock().push(command.to_string());
        Ok(())
    }

}
