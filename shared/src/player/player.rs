use crate::{ClientVersion, PlayerId, Property, PropertyError, PropertyKey, PropertySource};

/// Identity of a player as seen by property templates: its roster key,
/// canonical name and current region
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerInfo {
    id: PlayerId,
    name: String,
    region: String,
}

impl PlayerInfo {
    pub fn new(id: PlayerId, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            region: region.into(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

/// A connected session participant and its name properties
#[derive(Clone, Debug)]
pub struct Player {
    info: PlayerInfo,
    version: ClientVersion,
    properties: [Option<Property>; 3],
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        region: impl Into<String>,
        version: ClientVersion,
    ) -> Self {
        Self {
            info: PlayerInfo::new(id, name, region),
            version,
            properties: [None, None, None],
        }
    }

    pub fn info(&self) -> &PlayerInfo {
        &self.info
    }

    pub fn id(&self) -> PlayerId {
        self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn region(&self) -> &str {
        &self.info.region
    }

    pub fn version(&self) -> ClientVersion {
        self.version
    }

    /// Moves the player to another region. Does not touch its properties.
    pub fn set_region(&mut self, region: impl Into<String>) {
        self.info.region = region.into();
    }

    // Properties

    /// Returns the property, or None if it was never loaded
    pub fn property(&self, key: PropertyKey) -> Option<&Property> {
        self.properties[key.index()].as_ref()
    }

    pub fn try_property(&self, key: PropertyKey) -> Result<&Property, PropertyError> {
        self.property(key).ok_or(PropertyError::NotLoaded {
            player: self.info.id,
            key,
        })
    }

    pub fn has_loaded_properties(&self) -> bool {
        self.properties.iter().all(Option::is_some)
    }

    /// (Re)loads a property from its configured template, falling back to
    /// `default` when nothing is configured. Returns true if the property was
    /// created or its value changed.
    pub fn load_property_from_config(
        &mut self,
        source: &dyn PropertySource,
        key: PropertyKey,
        default: &str,
    ) -> bool {
        let raw_value = source
            .template(&self.info, key)
            .unwrap_or_else(|| default.to_owned());

        let Self {
            info, properties, ..
        } = self;
        let slot = &mut properties[key.index()];
        if let Some(property) = slot.as_mut() {
            return property.change_raw_value(raw_value, source, info);
        }
        *slot = Some(Property::new(raw_value, source, info));
        true
    }

    /// Re-resolves a loaded property. Returns true if its value changed,
    /// false if it did not or was never loaded.
    pub fn update_property(&mut self, source: &dyn PropertySource, key: PropertyKey) -> bool {
        let Self {
            info, properties, ..
        } = self;
        match &mut properties[key.index()] {
            Some(property) => property.update(source, info),
            None => false,
        }
    }

    /// Property text as `viewer` should see it
    pub fn format_property(
        &self,
        source: &dyn PropertySource,
        key: PropertyKey,
        viewer: &PlayerInfo,
    ) -> Result<String, PropertyError> {
        let property = self.try_property(key)?;
        Ok(property.format(source, &self.info, viewer))
    }
}
