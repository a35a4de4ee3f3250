use std::{mem, vec::IntoIter};

use roster_shared::PlayerId;

/// Diagnostics produced while the roster server runs, drained by the host
pub struct RosterEvents {
    override_attempts: Vec<OverrideAttemptEvent>,
    empty: bool,
}

impl RosterEvents {
    pub(crate) fn new() -> Self {
        Self {
            override_attempts: Vec::new(),
            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: RosterEvent>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: RosterEvent>(&self) -> bool {
        V::has(self)
    }

    // Crate-public

    pub(crate) fn push_override_attempt(&mut self, event: OverrideAttemptEvent) {
        self.override_attempts.push(event);
        self.empty = false;
    }

    pub(crate) fn take(&mut self) -> RosterEvents {
        mem::replace(self, RosterEvents::new())
    }
}

// Event Trait
pub trait RosterEvent {
    type Iter;

    fn iter(events: &mut RosterEvents) -> Self::Iter;

    fn has(events: &RosterEvents) -> bool;
}

/// Another subsystem tried to change the identity label of a managed
/// player in an outbound `AddPlayer` packet. The label has already been
/// reverted when this is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverrideAttemptEvent {
    pub player: PlayerId,
    pub player_name: String,
    pub attempted_name: String,
    pub viewer: PlayerId,
    pub viewer_name: String,
}

impl RosterEvent for OverrideAttemptEvent {
    type Iter = IntoIter<OverrideAttemptEvent>;

    fn iter(events: &mut RosterEvents) -> Self::Iter {
        let list = mem::take(&mut events.override_attempts);
        events.empty = true;
        IntoIterator::into_iter(list)
    }

    fn has(events: &RosterEvents) -> bool {
        !events.override_attempts.is_empty()
    }
}
