use crate::PlayerId;

/// What a presence-list packet does to the entries it carries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerInfoAction {
    AddPlayer,
    UpdateGameMode,
    UpdateLatency,
    UpdateDisplayName,
    RemovePlayer,
}

impl PlayerInfoAction {
    /// True for the actions whose entries carry a display name
    pub fn carries_display_name(&self) -> bool {
        matches!(
            self,
            PlayerInfoAction::AddPlayer | PlayerInfoAction::UpdateDisplayName
        )
    }
}

/// One player's entry inside a presence-list packet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerInfoData {
    pub id: PlayerId,
    /// Raw identity label, only present on `AddPlayer`
    pub name: Option<String>,
    /// Rendered display value; None reverts the viewer to the identity label
    pub display_name: Option<String>,
}

impl PlayerInfoData {
    /// Entry that clears the display value back to the identity label
    pub fn cleared(id: PlayerId) -> Self {
        Self {
            id,
            name: None,
            display_name: None,
        }
    }

    pub fn display_name(id: PlayerId, display_name: Option<String>) -> Self {
        Self {
            id,
            name: None,
            display_name,
        }
    }

    pub fn add(id: PlayerId, name: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            display_name,
        }
    }
}

/// A batch of presence-list entries destined for one viewer. Identity
/// tokens are unique within a packet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerInfoPacket {
    action: PlayerInfoAction,
    entries: Vec<PlayerInfoData>,
}

impl PlayerInfoPacket {
    pub fn new(action: PlayerInfoAction, entries: Vec<PlayerInfoData>) -> Self {
        let mut packet = Self {
            action,
            entries: Vec::with_capacity(entries.len()),
        };
        for entry in entries {
            packet.push(entry);
        }
        packet
    }

    pub fn single(action: PlayerInfoAction, entry: PlayerInfoData) -> Self {
        Self {
            action,
            entries: vec![entry],
        }
    }

    pub fn action(&self) -> PlayerInfoAction {
        self.action
    }

    pub fn entries(&self) -> &[PlayerInfoData] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut PlayerInfoData> {
        self.entries.iter_mut()
    }

    pub fn entry(&self, id: &PlayerId) -> Option<&PlayerInfoData> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Adds an entry, replacing any earlier entry for the same identity
    pub fn push(&mut self, entry: PlayerInfoData) {
        match self.entries.iter_mut().find(|existing| existing.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
