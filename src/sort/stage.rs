use tracing::debug;

use crate::{
    core::list::{GroupView, ListError, VehicleGroup, VehicleList},
    vehicle::Vehicle,
};

use super::criteria::SortCriterion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SortStamp {
    version: u64,
    criterion: SortCriterion,
    descending: bool,
}

/// Stable, dirty-tracked sorter for a group collection.
///
/// Descending order reverses the comparator's `Ordering`; `Equal` stays
/// `Equal`, so tied groups keep their input order in both directions.
#[derive(Debug, Default)]
pub struct Sorter {
    last: Option<SortStamp>,
    forced: bool,
}

impl Sorter {
    /// Creates a sorter that will sort on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next [`Sorter::sort`] run even when nothing tracked changed.
    pub fn force_resort(&mut self) {
        self.forced = true;
    }

    /// True when a forced resort is pending.
    pub const fn is_forced(&self) -> bool {
        self.forced
    }

    /// Sorts `groups` in place; returns `Ok(false)` when the previous order is still valid.
    pub fn sort<V: Vehicle>(
        &mut self,
        groups: &mut [VehicleGroup],
        list: &VehicleList<V>,
        criterion: SortCriterion,
        descending: bool,
    ) -> Result<bool, ListError> {
        let stamp = SortStamp {
            version: list.version(),
            criterion,
            descending,
        };
        if !self.forced && self.last == Some(stamp) {
            return Ok(false);
        }

        for group in groups.iter() {
            list.view(group)?;
        }

        let items = list.as_slice();
        groups.sort_by(|a, b| {
            let va = GroupView::from_slice(&items[a.begin()..a.end()]);
            let vb = GroupView::from_slice(&items[b.begin()..b.end()]);
            let ord = criterion.compare(&va, &vb);
            if descending { ord.reverse() } else { ord }
        });

        debug!(groups = groups.len(), ?criterion, descending, version = stamp.version, "groups sorted");
        self.last = Some(stamp);
        self.forced = false;
        Ok(true)
    }
}
