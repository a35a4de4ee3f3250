use roster_shared::PlayerId;

/// Lines up suffixes into a column across the whole presence list
pub trait AlignmentTransform: Send + Sync {
    /// Joins `head` (prefix and name) and `tail` (suffix) into one aligned value
    fn format_name(&self, head: &str, tail: &str) -> String;

    /// Same as [`format_name`](Self::format_name), but also lets the
    /// transform record `subject` as a candidate for the widest entry the
    /// column is aligned against
    fn format_name_and_update_leader(
        &mut self,
        _subject: PlayerId,
        head: &str,
        tail: &str,
    ) -> String {
        self.format_name(head, tail)
    }
}

/// Optional alignment collaborator, injected at construction
#[derive(Default)]
pub enum Alignment {
    #[default]
    None,
    Transform(Box<dyn AlignmentTransform>),
}

impl Alignment {
    pub fn transform<T: AlignmentTransform + 'static>(transform: T) -> Self {
        Alignment::Transform(Box::new(transform))
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Alignment::Transform(_))
    }
}
