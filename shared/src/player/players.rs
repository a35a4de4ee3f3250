use std::collections::{btree_map, BTreeMap};

use log::info;

use crate::{Player, PlayerId, RegistryError};

/// Session registry of every connected player, keyed by identity token
#[derive(Clone, Debug, Default)]
pub struct Players {
    players: BTreeMap<PlayerId, Player>,
}

impl Players {
    pub fn new() -> Self {
        Self {
            players: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, player: Player) -> Result<(), RegistryError> {
        let id = player.id();
        if self.players.contains_key(&id) {
            return Err(RegistryError::AlreadyConnected { player: id });
        }
        info!("registering player {} ({})", player.name(), id);
        self.players.insert(id, player);
        Ok(())
    }

    pub fn remove(&mut self, id: &PlayerId) -> Option<Player> {
        self.players.remove(id)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.players.contains_key(id)
    }

    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn get_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    pub fn try_get(&self, id: &PlayerId) -> Result<&Player, RegistryError> {
        self.players
            .get(id)
            .ok_or(RegistryError::UnknownPlayer { player: *id })
    }

    pub fn try_get_mut(&mut self, id: &PlayerId) -> Result<&mut Player, RegistryError> {
        self.players
            .get_mut(id)
            .ok_or(RegistryError::UnknownPlayer { player: *id })
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.keys().copied().collect()
    }

    pub fn iter(&self) -> btree_map::Values<'_, PlayerId, Player> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
