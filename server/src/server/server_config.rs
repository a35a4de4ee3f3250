use std::default::Default;

use roster_shared::ClientVersion;

use crate::Alignment;

/// Contains Config properties which will be used by the RosterServer
#[derive(Clone, Debug)]
pub struct RosterConfig {
    /// Region patterns in which display names are left untouched
    pub disabled_regions: Vec<String>,
    /// Which third-party overrides get reverted
    pub anti_override: AntiOverrideConfig,
    /// Viewers below this version never receive display-name updates
    pub min_display_name_version: ClientVersion,
    /// Ticks to wait before re-sending a joiner's names when the packet
    /// guard is off
    pub join_resend_delay: u32,
    /// Whether the host can intercept outbound packets at all. Both
    /// anti-override settings are ignored without it.
    pub packet_injection: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            disabled_regions: vec!["disabledworld".to_string()],
            anti_override: AntiOverrideConfig::default(),
            min_display_name_version: ClientVersion::DISPLAY_NAMES,
            join_resend_delay: 100,
            packet_injection: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AntiOverrideConfig {
    /// Revert identity labels renamed by other code in `AddPlayer` packets
    pub usernames: bool,
    /// Rewrite display values of every outbound presence-list packet
    pub tablist_names: bool,
}

impl Default for AntiOverrideConfig {
    fn default() -> Self {
        Self {
            usernames: true,
            tablist_names: true,
        }
    }
}

/// Optional features of the host the roster server cooperates with
#[derive(Default)]
pub struct RosterCollaborators {
    pub alignment: Alignment,
    /// A name-tag feature relies on identity labels staying canonical
    pub nametags_active: bool,
}
