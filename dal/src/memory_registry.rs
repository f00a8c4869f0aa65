//! Resting place for [MemoryClientRegistry]

use std::collections::BTreeMap;
use dal_api::{ClientRegistry, DalError};
use log::debug;
use model::{Slot, client::Client};
use parking_lot::RwLock;


/// [ClientRegistry] keeping everything in RAM: persisted clients are lost when the process ends
#[derive(Debug, Default)]
pub struct MemoryClientRegistry {
    state: RwLock<RegistryState>,
}

#[derive(Debug, Default)]
struct RegistryState {
    /// persisted clients, by their storage id
    persisted: BTreeMap<i64, Client>,
    /// connected clients
    slots: BTreeMap<Slot, Client>,
    last_id: i64,
    /// simulates a storage outage
    unavailable: bool,
}

impl MemoryClientRegistry {

    pub fn new() -> Self {
        Self::default()
    }

    /// When `true`, [ClientRegistry::save()] fails -- as a real storage would while it is unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.write().unavailable = unavailable;
    }

    pub fn get_by_id(&self, id: i64) -> Option<Client> {
        self.state.read().persisted.get(&id).cloned()
    }

    pub fn persisted_count(&self) -> usize {
        self.state.read().persisted.len()
    }

    /// The connected clients, by slot order
    pub fn connected(&self) -> Vec<Client> {
        self.state.read().slots.values().cloned().collect()
    }

}

impl ClientRegistry for MemoryClientRegistry {

    fn get_by_slot(&self, slot: Slot) -> Option<Client> {
        self.state.read().slots.get(&slot).cloned()
    }

    fn remove_by_slot(&self, slot: Slot) -> Option<Client> {
        self.state.write().slots.remove(&slot)
    }

    fn get_by_guid(&self, guid: &str) -> Option<Client> {
        self.state.read().persisted.values()
            .find(|client| client.guid.as_deref().is_some_and(|stored| stored.eq_ignore_ascii_case(guid)))
            .cloned()
    }

    fn get_by_auth(&self, auth: &str) -> Option<Client> {
        self.state.read().persisted.values()
            .find(|client| client.auth.as_deref().is_some_and(|stored| stored.eq_ignore_ascii_case(auth)))
            .cloned()
    }

    fn get_by_name(&self, name: &str) -> Vec<Client> {
        self.state.read().slots.values()
            .filter(|client| client.name == name)
            .cloned()
            .collect()
    }

    fn add(&self, client: Client) -> Result<(), DalError> {
        let Some(slot) = client.slot
        else {
            return Err(DalError::InvalidClient { client: client.name, reason: "it isn't connected to any slot".to_string() })
        };
        debug!("Slot {slot} bound to client '{}' (id {:?})", client.name, client.id);
        self.state.write().slots.insert(slot, client);
        Ok(())
    }

    fn save(&self, mut client: Client) -> Result<Client, DalError> {
        let mut state = self.state.write();
        if state.unavailable {
            return Err(DalError::Storage(format!("couldn't save client '{}': storage is unavailable", client.name)))
        }
        let id = match client.id {
            Some(id) => id,
            None => {
                state.last_id += 1;
                state.last_id
            },
        };
        client.id = Some(id);
        if let Some(slot) = client.slot {
            if let Some(bound) = state.slots.get_mut(&slot) {
                if bound.id == client.id {
                    *bound = client.clone();
                }
            }
        }
        state.persisted.insert(id, client.clone());
        Ok(client)
    }

}
