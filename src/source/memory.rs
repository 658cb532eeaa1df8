//! Vehicle source backed by an in-memory table of shared records.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::{
    ident::VehicleListId,
    types::{VehicleId, VehicleListType},
    vehicle::VehicleRecord,
};

use super::{SourceResult, VehicleSource};

/// In-memory vehicle table that hands out `Arc` handles in insertion order.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: HashMap<VehicleId, Arc<VehicleRecord>>,
    order: Vec<VehicleId>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a record; a replaced record keeps its position.
    pub fn upsert(&mut self, record: VehicleRecord) {
        let id = record.id;
        if self.records.insert(id, Arc::new(record)).is_none() {
            self.order.push(id);
        }
    }

    /// Removes a record, returning it when present.
    pub fn remove(&mut self, id: VehicleId) -> Option<Arc<VehicleRecord>> {
        let removed = self.records.remove(&id)?;
        if let Some(pos) = self.order.iter().position(|x| *x == id) {
            self.order.remove(pos);
        }
        Some(removed)
    }

    /// Current record for `id`.
    pub fn get(&self, id: VehicleId) -> Option<&Arc<VehicleRecord>> {
        self.records.get(&id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn in_list(rec: &VehicleRecord, list: &VehicleListId) -> bool {
    if rec.vehicle_type != list.vehicle_type || rec.owner != list.company {
        return false;
    }
    match list.list_type {
        VehicleListType::Company => true,
        VehicleListType::SharedOrders => rec.first_shared == list.index,
        VehicleListType::Station => rec.stations.contains(&list.index),
        VehicleListType::Depot => rec.depots.contains(&list.index),
        VehicleListType::Group => rec.group == Some(list.index),
    }
}

impl VehicleSource<Arc<VehicleRecord>> for MemorySource {
    fn fetch(&self, list: &VehicleListId) -> SourceResult<Vec<Arc<VehicleRecord>>> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.records.get(id))
            .filter(|rec| in_list(rec, list))
            .cloned()
            .collect())
    }
}
