use thiserror::Error;

use crate::{PlayerId, PropertyKey};

/// Errors that can occur while reading a player's name properties
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property was queried before it was ever loaded for this player
    #[error("Property {key} of player {player} has not been loaded yet")]
    NotLoaded { player: PlayerId, key: PropertyKey },
}

/// Errors that can occur while looking players up in the session registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No connected player carries this identity token
    #[error("Player {player} is not connected")]
    UnknownPlayer { player: PlayerId },

    /// A player with this identity token is already registered
    #[error("Player {player} is already connected")]
    AlreadyConnected { player: PlayerId },
}
