//! Change notification payloads.

use crate::ident::VehicleListId;

/// Events emitted by a list controller as its pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Vehicles were refetched from the source.
    Rebuilt {
        /// List that was rebuilt.
        list: VehicleListId,
        /// Vehicles before filtering.
        vehicles: usize,
    },
    /// The source failed; the list is shown empty until the next rebuild.
    SourceFailed {
        /// List whose source failed.
        list: VehicleListId,
    },
    /// The cargo filter was reapplied.
    Filtered {
        /// Vehicles passing the filter.
        vehicles: usize,
    },
    /// Groups were rebuilt.
    Regrouped {
        /// Number of groups.
        groups: usize,
    },
    /// Group order changed.
    Resorted,
}
