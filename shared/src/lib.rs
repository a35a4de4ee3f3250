//! # Roster Shared
//! Player, property and presence-list packet types shared between the
//! roster sync engine and the host server that drives it.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

mod error;
mod packet;
mod player;
mod property;
mod region;
mod types;

pub use error::{PropertyError, RegistryError};
pub use packet::{
    outgoing_packet::OutgoingPacket,
    player_info::{PlayerInfoAction, PlayerInfoData, PlayerInfoPacket},
};
pub use player::{
    player::{Player, PlayerInfo},
    players::Players,
};
pub use property::{
    placeholders::detect_identifiers, property::Property, property_key::PropertyKey,
    property_source::PropertySource,
};
pub use region::RegionDenylist;
pub use types::{ClientVersion, PlayerId};
