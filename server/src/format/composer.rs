use roster_shared::{Player, PropertyError, PropertyKey, PropertySource};

use super::alignment::Alignment;

/// The three property texts of one subject, resolved for one viewer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameParts {
    pub prefix: String,
    pub name: String,
    pub suffix: String,
}

impl NameParts {
    pub fn new(
        prefix: impl Into<String>,
        name: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
            suffix: suffix.into(),
        }
    }

    /// Resolves the parts of `subject` as `viewer` sees them. Fails if any of
    /// the three properties has not been loaded yet.
    pub fn resolve(
        source: &dyn PropertySource,
        subject: &Player,
        viewer: &Player,
    ) -> Result<Self, PropertyError> {
        let viewer = viewer.info();
        Ok(Self {
            prefix: subject.format_property(source, PropertyKey::TabPrefix, viewer)?,
            name: subject.format_property(source, PropertyKey::CustomTabName, viewer)?,
            suffix: subject.format_property(source, PropertyKey::TabSuffix, viewer)?,
        })
    }

    fn head(&self) -> String {
        let mut head = String::with_capacity(self.prefix.len() + self.name.len());
        head.push_str(&self.prefix);
        head.push_str(&self.name);
        head
    }
}

/// Builds the display value of a (subject, viewer) pair
#[derive(Default)]
pub struct FormatComposer {
    alignment: Alignment,
}

impl FormatComposer {
    pub fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// Joins already resolved parts: delegated to the alignment transform
    /// when there is one, plain prefix + name + suffix otherwise
    pub fn compose_parts(&self, parts: &NameParts) -> String {
        match &self.alignment {
            Alignment::Transform(transform) => transform.format_name(&parts.head(), &parts.suffix),
            Alignment::None => {
                let mut value = parts.head();
                value.push_str(&parts.suffix);
                value
            }
        }
    }

    /// Display value of `subject` for `viewer`, or None while any of the
    /// subject's properties is not loaded
    pub fn compose(
        &self,
        source: &dyn PropertySource,
        subject: &Player,
        viewer: &Player,
    ) -> Option<String> {
        self.try_compose(source, subject, viewer).ok()
    }

    pub fn try_compose(
        &self,
        source: &dyn PropertySource,
        subject: &Player,
        viewer: &Player,
    ) -> Result<String, PropertyError> {
        let parts = NameParts::resolve(source, subject, viewer)?;
        Ok(self.compose_parts(&parts))
    }

    /// Like [`compose`](Self::compose), but lets the alignment transform
    /// track `subject` as a column leader. Used when pushing fresh values.
    pub fn compose_and_update_leader(
        &mut self,
        source: &dyn PropertySource,
        subject: &Player,
        viewer: &Player,
    ) -> Option<String> {
        let parts = NameParts::resolve(source, subject, viewer).ok()?;
        if let Alignment::Transform(transform) = &mut self.alignment {
            return Some(transform.format_name_and_update_leader(
                subject.id(),
                &parts.head(),
                &parts.suffix,
            ));
        }
        Some(self.compose_parts(&parts))
    }
}
