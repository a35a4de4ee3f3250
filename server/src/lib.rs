//! # Roster Server
//! Keeps every viewer's presence list showing each player's composed
//! prefix, name and suffix. Outbound presence-list packets are rewritten
//! just before they are sent, property changes are pushed as display-name
//! updates, and third-party attempts to rename entries are reverted.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use roster_shared::{
        detect_identifiers, ClientVersion, OutgoingPacket, Player, PlayerId, PlayerInfo,
        PlayerInfoAction, PlayerInfoData, PlayerInfoPacket, Players, Property, PropertyError,
        PropertyKey, PropertySource, RegionDenylist, RegistryError,
    };
}

mod error;
mod events;
mod format;
mod override_guard;
mod server;
mod task_queue;
mod transport;

pub use error::RosterServerError;
pub use events::{OverrideAttemptEvent, RosterEvent, RosterEvents};
pub use format::{
    alignment::{Alignment, AlignmentTransform},
    composer::{FormatComposer, NameParts},
};
pub use override_guard::OverrideGuard;
pub use server::{
    AntiOverrideConfig, DelayedTask, FeatureState, RosterCollaborators, RosterConfig,
    RosterServer,
};
pub use task_queue::{TaskKey, TaskQueue};
pub use transport::{OutboundQueue, PacketSender};
