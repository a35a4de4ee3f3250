pub(crate) mod roster_events;

pub use roster_events::*;
