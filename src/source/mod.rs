/// In-memory vehicle source.
pub mod memory;

use thiserror::Error;

use crate::ident::VehicleListId;

/// Failure enumerating vehicles for a list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The backing state cannot be read right now.
    #[error("vehicle source unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Produces the current vehicles matching a list identifier.
///
/// Implementations must return vehicles in a stable order so that grouping
/// and sorting are deterministic.
pub trait VehicleSource<V> {
    /// Enumerates every vehicle shown by `list`.
    fn fetch(&self, list: &VehicleListId) -> SourceResult<Vec<V>>;
}

impl<V, S: VehicleSource<V> + ?Sized> VehicleSource<V> for &S {
    fn fetch(&self, list: &VehicleListId) -> SourceResult<Vec<V>> {
        (**self).fetch(list)
    }
}
