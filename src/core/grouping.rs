use std::ops::Range;

use hashbrown::HashMap;

use crate::{
    types::{GroupBy, VehicleId},
    vehicle::Vehicle,
};

use super::list::{VehicleGroup, VehicleList};

/// Arranges `filtered` for `mode` and returns the arranged vehicles plus group ranges.
///
/// Shared-orders groups appear in order of the first appearance of their
/// chain; members keep their input order.
pub fn build_groups<V: Vehicle + Clone>(filtered: &[V], mode: GroupBy) -> (Vec<V>, Vec<Range<usize>>) {
    match mode {
        GroupBy::None => (filtered.to_vec(), (0..filtered.len()).map(|i| i..i + 1).collect()),
        GroupBy::SharedOrders => {
            let mut slot_of: HashMap<VehicleId, usize> = HashMap::new();
            let mut buckets: Vec<Vec<&V>> = Vec::new();
            for v in filtered {
                let slot = *slot_of.entry(v.first_shared()).or_insert_with(|| {
                    buckets.push(Vec::new());
                    buckets.len() - 1
                });
                buckets[slot].push(v);
            }

            let mut arranged = Vec::with_capacity(filtered.len());
            let mut ranges = Vec::with_capacity(buckets.len());
            for bucket in buckets {
                let begin = arranged.len();
                arranged.extend(bucket.into_iter().cloned());
                ranges.push(begin..arranged.len());
            }
            (arranged, ranges)
        }
    }
}

impl<V: Vehicle + Clone> VehicleList<V> {
    /// Rebuilds the buffer from `filtered` for `mode` and returns groups stamped with the new version.
    pub fn regroup(&mut self, filtered: &[V], mode: GroupBy) -> Vec<VehicleGroup> {
        let (arranged, ranges) = build_groups(filtered, mode);
        self.replace(arranged);
        self.stamp(ranges)
    }
}

/// Decimal digits of the highest unit number in `vehicles`, at least one.
pub fn unit_number_digits<V: Vehicle>(vehicles: &[V]) -> u8 {
    let max = vehicles.iter().map(Vehicle::unit_number).max().unwrap_or(0);
    let mut digits = 1;
    let mut rest = max / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}
