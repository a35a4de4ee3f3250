use crate::{PlayerInfo, PropertySource};

/// A named text value of one player: the raw template plus the value it
/// resolved to on the last update
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    raw_value: String,
    last_resolved: String,
}

impl Property {
    pub fn new(raw_value: String, source: &dyn PropertySource, owner: &PlayerInfo) -> Self {
        let last_resolved = source.resolve(&raw_value, owner);
        Self {
            raw_value,
            last_resolved,
        }
    }

    /// Current raw template
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Value resolved on the last update, before viewer-relative expansion
    pub fn resolved(&self) -> &str {
        &self.last_resolved
    }

    /// Replaces the raw template and re-resolves it. Returns true if either
    /// the template or its resolved value changed.
    pub fn change_raw_value(
        &mut self,
        raw_value: String,
        source: &dyn PropertySource,
        owner: &PlayerInfo,
    ) -> bool {
        let raw_changed = self.raw_value != raw_value;
        self.raw_value = raw_value;
        let resolved_changed = self.update(source, owner);
        raw_changed || resolved_changed
    }

    /// Re-resolves the raw template. Returns true if the resolved value changed.
    pub fn update(&mut self, source: &dyn PropertySource, owner: &PlayerInfo) -> bool {
        let resolved = source.resolve(&self.raw_value, owner);
        if resolved == self.last_resolved {
            return false;
        }
        self.last_resolved = resolved;
        true
    }

    /// Text of this property as `viewer` should see it
    pub fn format(
        &self,
        source: &dyn PropertySource,
        owner: &PlayerInfo,
        viewer: &PlayerInfo,
    ) -> String {
        source.resolve_relational(&self.last_resolved, owner, viewer)
    }
}
