use thiserror::Error;

use roster_shared::{PropertyError, RegistryError};

/// Errors surfaced by the `try_*` operations of the roster server. The
/// plain operations log these and skip the affected entry instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterServerError {
    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
