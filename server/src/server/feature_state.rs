/// Lifecycle of the roster feature. Once `Disabling`, packet interception
/// passes everything through and delayed tasks no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeatureState {
    #[default]
    Active,
    Disabling,
}

impl FeatureState {
    pub fn is_active(&self) -> bool {
        matches!(self, FeatureState::Active)
    }

    pub fn is_disabling(&self) -> bool {
        matches!(self, FeatureState::Disabling)
    }
}
