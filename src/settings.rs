//! Persisted grouping and sort state, keyed by list scope and vehicle type.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::types::{GroupBy, VehicleListType, VehicleType};

/// Version number for serialized [`SettingsSnapshotV1`] payloads.
pub const SETTINGS_FORMAT_VERSION: u16 = 1;

/// Sort selection: criterion index into the active registry table plus direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Listing {
    /// Index into the criterion table.
    pub criterion: u8,
    /// True for descending order.
    pub descending: bool,
}

/// Grouping and sort state shared by every vehicle list of a process.
///
/// Owned by whatever manages persistence; controllers read from it on
/// creation and write back through [`crate::controller::window::ListController::persist`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSettings {
    grouping: HashMap<(VehicleListType, VehicleType), GroupBy>,
    sorting: HashMap<(GroupBy, VehicleType), Listing>,
}

/// Flat, serializable form of [`ListSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshotV1 {
    /// Payload format version.
    pub format_version: u16,
    /// Grouping per list scope and vehicle type.
    pub grouping: Vec<(VehicleListType, VehicleType, GroupBy)>,
    /// Listing per grouping mode and vehicle type.
    pub sorting: Vec<(GroupBy, VehicleType, Listing)>,
}

impl ListSettings {
    /// Creates empty settings; every lookup returns the default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grouping for a list scope, [`GroupBy::None`] when never set.
    pub fn grouping(&self, list_type: VehicleListType, vehicle_type: VehicleType) -> GroupBy {
        self.grouping
            .get(&(list_type, vehicle_type))
            .copied()
            .unwrap_or_default()
    }

    /// Stores the grouping for a list scope.
    pub fn set_grouping(&mut self, list_type: VehicleListType, vehicle_type: VehicleType, group_by: GroupBy) {
        self.grouping.insert((list_type, vehicle_type), group_by);
    }

    /// Listing for a grouping mode, ascending by the first criterion when never set.
    pub fn listing(&self, group_by: GroupBy, vehicle_type: VehicleType) -> Listing {
        self.sorting
            .get(&(group_by, vehicle_type))
            .copied()
            .unwrap_or_default()
    }

    /// Stores the listing for a grouping mode.
    pub fn set_listing(&mut self, group_by: GroupBy, vehicle_type: VehicleType, listing: Listing) {
        self.sorting.insert((group_by, vehicle_type), listing);
    }

    /// Exports a deterministic, serializable snapshot.
    pub fn export_snapshot(&self) -> SettingsSnapshotV1 {
        let mut grouping: Vec<_> = self
            .grouping
            .iter()
            .map(|(&(lt, vt), &g)| (lt, vt, g))
            .collect();
        grouping.sort_by_key(|&(lt, vt, _)| (lt, vt));

        let mut sorting: Vec<_> = self
            .sorting
            .iter()
            .map(|(&(g, vt), &l)| (g, vt, l))
            .collect();
        sorting.sort_by_key(|&(g, vt, _)| (g, vt));

        SettingsSnapshotV1 {
            format_version: SETTINGS_FORMAT_VERSION,
            grouping,
            sorting,
        }
    }

    /// Rebuilds settings from a snapshot; later duplicates win.
    pub fn from_snapshot(snapshot: SettingsSnapshotV1) -> Self {
        let mut settings = Self::new();
        for (lt, vt, g) in snapshot.grouping {
            settings.set_grouping(lt, vt, g);
        }
        for (g, vt, l) in snapshot.sorting {
            settings.set_listing(g, vt, l);
        }
        settings
    }
}
