use std::collections::HashSet;

use crate::{detect_identifiers, PlayerInfo, PropertyKey};

/// Supplies property templates and expands them into text.
///
/// The templating language itself belongs to the host; the engine only
/// needs a template per (player, key), a way to resolve it for its owner,
/// and an optional viewer-relative pass over the resolved text.
pub trait PropertySource: Send + Sync {
    /// Template configured for `key` for this player, if any
    fn template(&self, player: &PlayerInfo, key: PropertyKey) -> Option<String>;

    /// Expands every placeholder of `template` for its owner
    fn resolve(&self, template: &str, owner: &PlayerInfo) -> String;

    /// Expands placeholders whose value depends on who is looking
    fn resolve_relational(
        &self,
        resolved: &str,
        _owner: &PlayerInfo,
        _viewer: &PlayerInfo,
    ) -> String {
        resolved.to_owned()
    }

    /// Templates configured globally (for every group and player) for `key`
    fn global_templates(&self, _key: PropertyKey) -> Vec<String> {
        Vec::new()
    }

    /// Template a placeholder itself expands to, when it nests other placeholders
    fn nested_template(&self, _identifier: &str) -> Option<String> {
        None
    }

    /// Placeholder identifiers referenced directly by `template`
    fn used_identifiers(&self, template: &str) -> Vec<String> {
        detect_identifiers(template)
    }

    /// Placeholder identifiers referenced by `templates`, following nested
    /// placeholder templates until no new identifier turns up
    fn used_identifiers_recursive(&self, templates: &[&str]) -> HashSet<String> {
        let mut used = HashSet::new();
        let mut pending: Vec<String> = templates
            .iter()
            .flat_map(|template| self.used_identifiers(template))
            .collect();

        while let Some(identifier) = pending.pop() {
            if !used.insert(identifier.clone()) {
                continue;
            }
            if let Some(nested) = self.nested_template(&identifier) {
                pending.extend(self.used_identifiers(&nested));
            }
        }

        used
    }
}
