use std::fmt;

/// Stable identity token of a connected player, used as the key of its
/// presence-list entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u64);

impl PlayerId {
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Minor protocol version negotiated with a client. Structured display
/// names are only understood from a minimum version upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientVersion(u8);

impl ClientVersion {
    /// First minor version able to render presence-list display names
    pub const DISPLAY_NAMES: ClientVersion = ClientVersion(8);

    pub const fn new(minor: u8) -> Self {
        Self(minor)
    }

    pub fn minor(&self) -> u8 {
        self.0
    }
}

impl Default for ClientVersion {
    fn default() -> Self {
        Self::DISPLAY_NAMES
    }
}
