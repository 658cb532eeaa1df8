use std::time::Duration;

use hashbrown::HashMap;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::{
    core::{
        filter::{apply_cargo_filter, cargo_menu, used_cargo_types, CargoFilter, CargoMenuEntry},
        grouping::unit_number_digits,
        list::{GroupView, ListError, VehicleGroup, VehicleList},
    },
    ident::VehicleListId,
    settings::{ListSettings, Listing},
    sort::{
        registry::{criteria, SortEntry},
        stage::Sorter,
    },
    source::{SourceResult, VehicleSource},
    types::{CargoType, CargoTypes, GroupBy, TimeDisplay, VehicleId, NUM_CARGO},
    vehicle::Vehicle,
};

use super::events::ListEvent;

/// How far the derived views are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Nothing fetched, or a structural change invalidated everything.
    Uninitialized,
    /// Vehicles fetched; filter pending.
    Built,
    /// Filter applied; grouping pending.
    Filtered,
    /// Groups built; sort pending.
    Grouped,
    /// Groups sorted and safe to read.
    Sorted,
}

/// Controller tuning.
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Whether profit labels use years or periods.
    pub time_display: TimeDisplay,
    /// Display order of every cargo type, used for the filter menu.
    pub known_cargoes: Vec<CargoType>,
    /// Cargo types counted as passengers by the freight filter.
    pub passenger_cargoes: CargoTypes,
    /// Interval after which [`ListController::advance`] schedules a value refresh and resort; zero disables it.
    pub resort_interval: Duration,
    /// Capacity of the event broadcast channel.
    pub event_capacity: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            time_display: TimeDisplay::Calendar,
            known_cargoes: (0..NUM_CARGO).collect(),
            passenger_cargoes: CargoTypes::from_bits(1),
            resort_interval: Duration::from_secs(3),
            event_capacity: 64,
        }
    }
}

const fn slot(group_by: GroupBy) -> usize {
    match group_by {
        GroupBy::None => 0,
        GroupBy::SharedOrders => 1,
    }
}

/// Filtered, grouped, sorted view over the vehicles of one list.
///
/// Group accessors return nothing unless the pipeline reached
/// [`Stage::Sorted`], so views built before a structural change are never
/// handed out.
pub struct ListController<V> {
    id: VehicleListId,
    config: ListConfig,
    grouping: GroupBy,
    listings: [Listing; 2],
    cargo_filter: CargoFilter,
    all: Vec<V>,
    filtered: Vec<V>,
    list: VehicleList<V>,
    groups: Vec<VehicleGroup>,
    used_cargoes: CargoTypes,
    unit_number_digits: u8,
    stage: Stage,
    sorter: Sorter,
    selected: Option<VehicleId>,
    since_resort: Duration,
    values_due: bool,
    events_tx: broadcast::Sender<ListEvent>,
}

impl<V: Vehicle + Clone> ListController<V> {
    /// Creates a controller for `id`, loading its grouping and listings from `settings`.
    pub fn new(id: VehicleListId, settings: &ListSettings, config: ListConfig) -> Self {
        let (events_tx, _) = broadcast::channel(config.event_capacity.max(1));
        let mut controller = Self {
            id,
            grouping: settings.grouping(id.list_type, id.vehicle_type),
            listings: [
                settings.listing(GroupBy::None, id.vehicle_type),
                settings.listing(GroupBy::SharedOrders, id.vehicle_type),
            ],
            config,
            cargo_filter: CargoFilter::Any,
            all: Vec::new(),
            filtered: Vec::new(),
            list: VehicleList::new(),
            groups: Vec::new(),
            used_cargoes: CargoTypes::EMPTY,
            unit_number_digits: 1,
            stage: Stage::Uninitialized,
            sorter: Sorter::new(),
            selected: None,
            since_resort: Duration::ZERO,
            values_due: false,
            events_tx,
        };
        for group_by in GroupBy::ALL {
            controller.clamp_listing(group_by);
        }
        controller
    }

    /// Writes this list's grouping and both listings back to `settings`.
    pub fn persist(&self, settings: &mut ListSettings) {
        settings.set_grouping(self.id.list_type, self.id.vehicle_type, self.grouping);
        for group_by in GroupBy::ALL {
            settings.set_listing(group_by, self.id.vehicle_type, self.listings[slot(group_by)]);
        }
    }

    /// Subscribes to pipeline events.
    pub fn subscribe(&self) -> broadcast::Receiver<ListEvent> {
        self.events_tx.subscribe()
    }

    /// Identifier of the list.
    pub const fn id(&self) -> &VehicleListId {
        &self.id
    }

    /// Current pipeline position.
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Marks the source as structurally changed; groups are unreadable until [`ListController::refresh`].
    pub fn invalidate(&mut self) {
        debug!(list = ?self.id, "list invalidated");
        self.stage = Stage::Uninitialized;
    }

    /// Brings every derived view up to date.
    ///
    /// Refetches from `source` when invalidated; when a periodic refresh is
    /// due, refetches vehicle values and resorts without regrouping.
    pub fn refresh<S: VehicleSource<V>>(&mut self, source: &S) {
        if self.stage == Stage::Uninitialized {
            self.values_due = false;
            self.rebuild(source.fetch(&self.id));
        } else if self.values_due {
            self.refetch_values(source);
        }
        self.update();
    }

    /// Switches grouping; regroups from the filtered vehicles and resorts.
    pub fn set_grouping(&mut self, group_by: GroupBy) {
        if self.grouping == group_by {
            return;
        }
        info!(list = ?self.id, from = ?self.grouping, to = ?group_by, "grouping changed");
        self.grouping = group_by;
        self.clamp_listing(group_by);
        self.lower_stage(Stage::Filtered);
        self.update();
    }

    /// Changes the cargo filter; refilters from the full vehicle set.
    pub fn set_cargo_filter(&mut self, filter: CargoFilter) {
        if self.cargo_filter == filter {
            return;
        }
        debug!(list = ?self.id, ?filter, "cargo filter changed");
        self.cargo_filter = filter;
        self.lower_stage(Stage::Built);
        self.update();
    }

    /// Selects a sort criterion by index into [`ListController::sort_entries`].
    pub fn set_sort_criterion(&mut self, index: usize) -> Result<(), ListError> {
        let len = self.sort_entries().len();
        if index >= len {
            return Err(ListError::CriterionOutOfRange { index, len });
        }
        let listing = &mut self.listings[slot(self.grouping)];
        if usize::from(listing.criterion) == index {
            return Ok(());
        }
        listing.criterion = index as u8;
        self.lower_stage(Stage::Grouped);
        self.update();
        Ok(())
    }

    /// Sets the sort direction.
    pub fn set_descending(&mut self, descending: bool) {
        let listing = &mut self.listings[slot(self.grouping)];
        if listing.descending == descending {
            return;
        }
        listing.descending = descending;
        self.lower_stage(Stage::Grouped);
        self.update();
    }

    /// Flips the sort direction.
    pub fn toggle_direction(&mut self) {
        self.set_descending(!self.listing().descending);
    }

    /// Switches between calendar and wallclock sort tables.
    pub fn set_time_display(&mut self, time_display: TimeDisplay) {
        if self.config.time_display == time_display {
            return;
        }
        self.config.time_display = time_display;
        for group_by in GroupBy::ALL {
            self.clamp_listing(group_by);
        }
        self.force_resort();
    }

    /// Resorts on the next update even though nothing tracked changed, e.g. after profits moved.
    pub fn force_resort(&mut self) {
        self.sorter.force_resort();
        self.lower_stage(Stage::Grouped);
        self.update();
    }

    /// Accounts for elapsed wall time.
    ///
    /// Once per configured interval the next [`ListController::refresh`]
    /// refetches vehicle values and resorts.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.config.resort_interval.is_zero() {
            return;
        }
        self.since_resort += elapsed;
        if self.since_resort >= self.config.resort_interval {
            self.since_resort = Duration::ZERO;
            self.values_due = true;
        }
    }

    /// True when the next refresh will refetch vehicle values.
    pub const fn values_due(&self) -> bool {
        self.values_due
    }

    /// Active grouping mode.
    pub const fn grouping(&self) -> GroupBy {
        self.grouping
    }

    /// Listing of the active grouping mode.
    pub const fn listing(&self) -> Listing {
        self.listings[slot(self.grouping)]
    }

    /// Active cargo filter.
    pub const fn cargo_filter(&self) -> CargoFilter {
        self.cargo_filter
    }

    /// Active time display.
    pub const fn time_display(&self) -> TimeDisplay {
        self.config.time_display
    }

    /// Criterion menu for the active grouping and time display.
    pub fn sort_entries(&self) -> &'static [SortEntry] {
        criteria(self.grouping, self.config.time_display)
    }

    /// Entry currently used for sorting.
    pub fn sort_entry(&self) -> SortEntry {
        self.sort_entries()[usize::from(self.listing().criterion)]
    }

    /// Cargo types carried by any fetched vehicle, ignoring the filter.
    pub const fn used_cargoes(&self) -> CargoTypes {
        self.used_cargoes
    }

    /// Cargo filter menu; `full` lists unused cargoes as disabled entries.
    pub fn cargo_menu(&self, full: bool) -> Vec<CargoMenuEntry> {
        cargo_menu(self.used_cargoes, &self.config.known_cargoes, full)
    }

    /// Digits needed to print the highest unit number.
    pub const fn unit_number_digits(&self) -> u8 {
        self.unit_number_digits
    }

    /// Number of rows.
    pub fn group_count(&self) -> usize {
        if self.stage == Stage::Sorted { self.groups.len() } else { 0 }
    }

    /// Number of vehicles across all rows.
    pub fn vehicle_count(&self) -> usize {
        if self.stage == Stage::Sorted { self.list.len() } else { 0 }
    }

    /// Row `index` in display order.
    pub fn group(&self, index: usize) -> Option<GroupView<'_, V>> {
        if self.stage != Stage::Sorted {
            return None;
        }
        self.list.view(self.groups.get(index)?).ok()
    }

    /// Every row in display order.
    pub fn groups(&self) -> impl Iterator<Item = GroupView<'_, V>> + '_ {
        let visible = if self.stage == Stage::Sorted { self.groups.as_slice() } else { &[] };
        visible.iter().filter_map(|g| self.list.view(g).ok())
    }

    /// Row under a vertical offset, given the row height and the first visible row.
    pub fn group_at_offset(&self, y: u32, row_height: u32, first_visible: usize) -> Option<usize> {
        if row_height == 0 {
            return None;
        }
        let index = first_visible.checked_add((y / row_height) as usize)?;
        (index < self.group_count()).then_some(index)
    }

    /// Row containing vehicle `id`.
    pub fn row_of_vehicle(&self, id: VehicleId) -> Option<usize> {
        self.groups()
            .position(|g| g.vehicles().iter().any(|v| v.id() == id))
    }

    /// Highlights a vehicle; `None` clears the selection.
    pub fn select(&mut self, id: Option<VehicleId>) {
        self.selected = id;
    }

    /// Highlighted vehicle, if any.
    pub const fn selected(&self) -> Option<VehicleId> {
        self.selected
    }

    fn lower_stage(&mut self, stage: Stage) {
        self.stage = self.stage.min(stage);
    }

    fn clamp_listing(&mut self, group_by: GroupBy) {
        let len = criteria(group_by, self.config.time_display).len();
        let listing = &mut self.listings[slot(group_by)];
        if usize::from(listing.criterion) >= len {
            warn!(list = ?self.id, ?group_by, criterion = listing.criterion, len, "sort criterion out of range; reset to default");
            listing.criterion = 0;
        }
    }

    fn rebuild(&mut self, fetched: SourceResult<Vec<V>>) {
        match fetched {
            Ok(vehicles) => {
                info!(list = ?self.id, vehicles = vehicles.len(), "vehicle list rebuilt");
                self.all = vehicles;
                let _ = self.events_tx.send(ListEvent::Rebuilt {
                    list: self.id,
                    vehicles: self.all.len(),
                });
            }
            Err(err) => {
                warn!(list = ?self.id, %err, "vehicle source failed; showing an empty list");
                self.all.clear();
                let _ = self.events_tx.send(ListEvent::SourceFailed { list: self.id });
            }
        }
        self.used_cargoes = used_cargo_types(&self.all);
        self.unit_number_digits = unit_number_digits(&self.all);
        self.stage = Stage::Built;
    }

    fn refetch_values<S: VehicleSource<V>>(&mut self, source: &S) {
        self.values_due = false;
        let fresh = match source.fetch(&self.id) {
            Ok(fresh) => fresh,
            Err(err) => {
                warn!(list = ?self.id, %err, "vehicle source failed; keeping previous values");
                return;
            }
        };
        if !same_vehicles(&fresh, &self.all) {
            debug!(list = ?self.id, "vehicle set changed since last fetch");
            self.rebuild(Ok(fresh));
            return;
        }
        self.all = fresh;
        self.used_cargoes = used_cargo_types(&self.all);
        self.unit_number_digits = unit_number_digits(&self.all);
        let filtered = apply_cargo_filter(&self.all, self.cargo_filter, self.config.passenger_cargoes);
        let same_groups = self.stage >= Stage::Grouped
            && same_vehicles(&filtered, &self.filtered)
            && filtered
                .iter()
                .zip(&self.filtered)
                .all(|(a, b)| a.first_shared() == b.first_shared());
        if same_groups {
            {
                let by_id: HashMap<VehicleId, &V> = filtered.iter().map(|v| (v.id(), v)).collect();
                self.list
                    .refresh_values(|v| by_id.get(&v.id()).map(|fresh| (*fresh).clone()));
            }
            self.filtered = filtered;
        } else {
            // Filter or chain membership moved; regroup from the new values.
            self.lower_stage(Stage::Built);
        }
        debug!(list = ?self.id, "vehicle values refreshed");
        self.sorter.force_resort();
        self.lower_stage(Stage::Grouped);
    }

    fn update(&mut self) {
        if self.stage == Stage::Uninitialized {
            return;
        }
        if self.stage < Stage::Filtered {
            self.filtered = apply_cargo_filter(&self.all, self.cargo_filter, self.config.passenger_cargoes);
            self.stage = Stage::Filtered;
            let _ = self.events_tx.send(ListEvent::Filtered {
                vehicles: self.filtered.len(),
            });
        }
        if self.stage < Stage::Grouped {
            self.groups = self.list.regroup(&self.filtered, self.grouping);
            self.stage = Stage::Grouped;
            let _ = self.events_tx.send(ListEvent::Regrouped {
                groups: self.groups.len(),
            });
        }
        if self.stage < Stage::Sorted {
            self.sort();
        }
    }

    fn sort(&mut self) {
        let entry = self.sort_entry();
        let descending = self.listing().descending;
        match self
            .sorter
            .sort(&mut self.groups, &self.list, entry.criterion, descending)
        {
            Ok(true) => {
                let _ = self.events_tx.send(ListEvent::Resorted);
            }
            Ok(false) => {}
            Err(err) => {
                warn!(list = ?self.id, %err, "dropping groups that no longer match the vehicle buffer");
                self.groups.clear();
            }
        }
        self.stage = Stage::Sorted;
    }
}

fn same_vehicles<V: Vehicle>(a: &[V], b: &[V]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.id() == y.id())
}
