mod feature_state;
pub use feature_state::FeatureState;

mod server_config;
pub use server_config::{AntiOverrideConfig, RosterCollaborators, RosterConfig};

mod roster_server;
pub use roster_server::{DelayedTask, RosterServer};

mod lifecycle;
