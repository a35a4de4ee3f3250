use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use roster_shared::{detect_identifiers, PlayerId, PlayerInfo, PropertyKey, PropertySource};

#[derive(Default)]
struct TestSourceData {
    templates: HashMap<(PlayerId, PropertyKey), String>,
    global_templates: HashMap<PropertyKey, String>,
    values: HashMap<String, String>,
    player_values: HashMap<(PlayerId, String), String>,
    nested: HashMap<String, String>,
}

/// In-memory property source. Clones share state, so a test can keep one
/// handle and change templates or placeholder values after handing another
/// to the server.
///
/// Resolution replaces `%identifier%` tokens with per-player values, then
/// global values; `%player%` falls back to the owner's name. The relational
/// pass replaces `%rel_viewer%` with the viewer's name.
#[derive(Clone, Default)]
pub struct TestSource {
    data: Arc<RwLock<TestSourceData>>,
}

impl TestSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_template(&self, player: PlayerId, key: PropertyKey, template: &str) {
        self.data
            .write()
            .unwrap()
            .templates
            .insert((player, key), template.to_string());
    }

    pub fn set_global_template(&self, key: PropertyKey, template: &str) {
        self.data
            .write()
            .unwrap()
            .global_templates
            .insert(key, template.to_string());
    }

    pub fn set_value(&self, identifier: &str, value: &str) {
        self.data
            .write()
            .unwrap()
            .values
            .insert(identifier.to_string(), value.to_string());
    }

    pub fn set_player_value(&self, player: PlayerId, identifier: &str, value: &str) {
        self.data
            .write()
            .unwrap()
            .player_values
            .insert((player, identifier.to_string()), value.to_string());
    }

    pub fn set_nested(&self, identifier: &str, template: &str) {
        self.data
            .write()
            .unwrap()
            .nested
            .insert(identifier.to_string(), template.to_string());
    }
}

impl PropertySource for TestSource {
    fn template(&self, player: &PlayerInfo, key: PropertyKey) -> Option<String> {
        let data = self.data.read().unwrap();
        data.templates
            .get(&(player.id(), key))
            .or_else(|| data.global_templates.get(&key))
            .cloned()
    }

    fn resolve(&self, template: &str, owner: &PlayerInfo) -> String {
        let data = self.data.read().unwrap();
        let mut resolved = template.to_string();
        for identifier in detect_identifiers(template) {
            let value = data
                .player_values
                .get(&(owner.id(), identifier.clone()))
                .or_else(|| data.values.get(&identifier))
                .cloned()
                .or_else(|| (identifier == "%player%").then(|| owner.name().to_string()));
            if let Some(value) = value {
                resolved = resolved.replace(&identifier, &value);
            }
        }
        resolved
    }

    fn resolve_relational(
        &self,
        resolved: &str,
        _owner: &PlayerInfo,
        viewer: &PlayerInfo,
    ) -> String {
        resolved.replace("%rel_viewer%", viewer.name())
    }

    fn global_templates(&self, key: PropertyKey) -> Vec<String> {
        let data = self.data.read().unwrap();
        data.global_templates.get(&key).cloned().into_iter().collect()
    }

    fn nested_template(&self, identifier: &str) -> Option<String> {
        self.data.read().unwrap().nested.get(identifier).cloned()
    }
}
