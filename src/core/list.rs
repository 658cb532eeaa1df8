use std::ops::Range;

use thiserror::Error;

use crate::{
    types::{Days, Money},
    vehicle::Vehicle,
};

/// Errors raised by list and controller accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A group was read against a buffer it was not built from.
    #[error("group built for list version {group_version} read against version {list_version}")]
    StaleGroup {
        /// Version recorded in the group.
        group_version: u64,
        /// Current buffer version.
        list_version: u64,
    },
    /// A group range points outside the buffer.
    #[error("group range {begin}..{end} out of bounds for {len} vehicles")]
    GroupOutOfRange {
        /// Range start.
        begin: usize,
        /// Range end.
        end: usize,
        /// Buffer length.
        len: usize,
    },
    /// A sort criterion index is not valid for the active table.
    #[error("sort criterion {index} out of range for {len} entries")]
    CriterionOutOfRange {
        /// Requested index.
        index: usize,
        /// Table length.
        len: usize,
    },
}

/// Half-open range `[begin, end)` into a [`VehicleList`] of a given version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleGroup {
    begin: usize,
    end: usize,
    version: u64,
}

impl VehicleGroup {
    /// First index of the range.
    pub const fn begin(&self) -> usize {
        self.begin
    }

    /// Past-the-end index of the range.
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Buffer version this group was built from.
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Number of vehicles covered.
    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    /// True for an empty range.
    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// Ordered, versioned buffer of vehicle handles that groups index into.
///
/// Any reassignment bumps the version, which invalidates every
/// [`VehicleGroup`] built before it.
#[derive(Debug, Clone)]
pub struct VehicleList<V> {
    items: Vec<V>,
    version: u64,
}

impl<V> Default for VehicleList<V> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            version: 0,
        }
    }
}

impl<V> VehicleList<V> {
    /// Creates an empty buffer at version 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current version.
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no vehicles.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Vehicles in buffer order.
    pub fn as_slice(&self) -> &[V] {
        &self.items
    }

    /// Replaces the contents and bumps the version.
    pub fn replace(&mut self, items: Vec<V>) {
        self.items = items;
        self.version += 1;
    }

    /// Empties the buffer and bumps the version.
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Swaps in newer values for vehicles already in the buffer.
    ///
    /// Positions and version are kept, so existing groups stay readable; the
    /// caller must only pass values that do not change group membership.
    pub(crate) fn refresh_values(&mut self, mut fresh: impl FnMut(&V) -> Option<V>) {
        for item in &mut self.items {
            if let Some(next) = fresh(item) {
                *item = next;
            }
        }
    }

    /// Stamps index ranges with the current version.
    pub(crate) fn stamp(&self, ranges: impl IntoIterator<Item = Range<usize>>) -> Vec<VehicleGroup> {
        ranges
            .into_iter()
            .map(|r| VehicleGroup {
                begin: r.start,
                end: r.end,
                version: self.version,
            })
            .collect()
    }

    /// Validates `group` against this buffer and returns a view of its vehicles.
    pub fn view(&self, group: &VehicleGroup) -> Result<GroupView<'_, V>, ListError> {
        if group.version != self.version {
            return Err(ListError::StaleGroup {
                group_version: group.version,
                list_version: self.version,
            });
        }
        let vehicles = self
            .items
            .get(group.begin..group.end)
            .ok_or(ListError::GroupOutOfRange {
                begin: group.begin,
                end: group.end,
                len: self.items.len(),
            })?;
        Ok(GroupView { vehicles })
    }
}

/// Validated, borrowed view of one group's vehicles with aggregate accessors.
#[derive(Debug)]
pub struct GroupView<'a, V> {
    vehicles: &'a [V],
}

impl<V> Clone for GroupView<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for GroupView<'_, V> {}

impl<'a, V> GroupView<'a, V> {
    /// Wraps a slice directly; used by the sort stage on already-validated ranges.
    pub(crate) const fn from_slice(vehicles: &'a [V]) -> Self {
        Self { vehicles }
    }

    /// Number of vehicles in the group.
    pub const fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// True for an empty group.
    pub const fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Vehicles of the group in buffer order.
    pub const fn vehicles(&self) -> &'a [V] {
        self.vehicles
    }
}

impl<'a, V: Vehicle> GroupView<'a, V> {
    /// The only vehicle of a singleton group.
    ///
    /// # Panics
    ///
    /// Panics unless the group holds exactly one vehicle.
    pub fn single_vehicle(&self) -> &'a V {
        assert_eq!(self.vehicles.len(), 1, "single_vehicle on a group of {}", self.vehicles.len());
        &self.vehicles[0]
    }

    /// Sum of this year's profit over the group, saturating at the `Money` bounds.
    pub fn profit_this_year(&self) -> Money {
        total(self.vehicles, Vehicle::profit_this_year)
    }

    /// Sum of last year's profit over the group, saturating at the `Money` bounds.
    pub fn profit_last_year(&self) -> Money {
        total(self.vehicles, Vehicle::profit_last_year)
    }

    /// Mean of this year's profit; zero for an empty group.
    pub fn average_profit_this_year(&self) -> Money {
        average(self.profit_this_year(), self.len())
    }

    /// Mean of last year's profit; zero for an empty group.
    pub fn average_profit_last_year(&self) -> Money {
        average(self.profit_last_year(), self.len())
    }

    /// Age of the oldest vehicle; the first one wins on ties.
    pub fn oldest_age(&self) -> Option<Days> {
        self.oldest_vehicle().map(Vehicle::age)
    }

    /// Oldest vehicle of the group, first occurrence on equal ages.
    pub fn oldest_vehicle(&self) -> Option<&'a V> {
        let mut iter = self.vehicles.iter();
        let mut oldest = iter.next()?;
        for v in iter {
            if v.age() > oldest.age() {
                oldest = v;
            }
        }
        Some(oldest)
    }
}

fn average(total: Money, count: usize) -> Money {
    if count == 0 {
        return 0;
    }
    total / count as Money
}

fn total<V>(vehicles: &[V], key: impl Fn(&V) -> Money) -> Money {
    vehicles.iter().fold(0, |acc: Money, v| acc.saturating_add(key(v)))
}
