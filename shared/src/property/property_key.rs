use std::fmt;

/// The three properties composed into a presence-list display name,
/// in composition order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKey {
    TabPrefix,
    CustomTabName,
    TabSuffix,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 3] = [
        PropertyKey::TabPrefix,
        PropertyKey::CustomTabName,
        PropertyKey::TabSuffix,
    ];

    /// Configuration name of the property
    pub fn name(&self) -> &'static str {
        match self {
            PropertyKey::TabPrefix => "tabprefix",
            PropertyKey::CustomTabName => "customtabname",
            PropertyKey::TabSuffix => "tabsuffix",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PropertyKey::TabPrefix => 0,
            PropertyKey::CustomTabName => 1,
            PropertyKey::TabSuffix => 2,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
