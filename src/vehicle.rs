//! Read-only vehicle view trait and a plain record implementing it.

use std::{borrow::Cow, rc::Rc, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::types::{
    CargoType, CargoTypes, CompanyId, Days, EngineId, Money, UnitNumber, VehicleId, VehicleType,
};

/// Read-only view into an externally owned vehicle.
///
/// The list core never creates or destroys vehicles; it only holds handles
/// implementing this trait and orders them.
pub trait Vehicle {
    /// Stable identity.
    fn id(&self) -> VehicleId;
    /// Player-visible unit number.
    fn unit_number(&self) -> UnitNumber;
    /// Custom name, if the player set one.
    fn name(&self) -> Option<Cow<'_, str>>;
    /// Profit in the current year or period.
    fn profit_this_year(&self) -> Money;
    /// Profit in the previous year or period.
    fn profit_last_year(&self) -> Money;
    /// Age in days.
    fn age(&self) -> Days;
    /// Maximum age in days before the vehicle is considered old.
    fn max_age(&self) -> Days;
    /// Reliability as a fraction of `u16::MAX`.
    fn reliability(&self) -> u16;
    /// Maximum speed in internal units.
    fn max_speed(&self) -> u32;
    /// Engine the vehicle was built from.
    fn engine(&self) -> EngineId;
    /// Current value.
    fn value(&self) -> Money;
    /// Total consist length.
    fn length(&self) -> u32;
    /// Timetable lateness in ticks, negative when early.
    fn lateness(&self) -> i32;
    /// First vehicle of the shared-orders chain; the vehicle's own id when it shares with nobody.
    fn first_shared(&self) -> VehicleId;
    /// Capacity for `cargo` summed over the consist.
    fn capacity(&self, cargo: CargoType) -> u32;
    /// Cargo types with nonzero capacity anywhere in the consist.
    fn cargo_types(&self) -> CargoTypes;
}

macro_rules! forward_vehicle {
    ($($handle:ty),+) => {$(
        impl<T: Vehicle + ?Sized> Vehicle for $handle {
            fn id(&self) -> VehicleId { (**self).id() }
            fn unit_number(&self) -> UnitNumber { (**self).unit_number() }
            fn name(&self) -> Option<Cow<'_, str>> { (**self).name() }
            fn profit_this_year(&self) -> Money { (**self).profit_this_year() }
            fn profit_last_year(&self) -> Money { (**self).profit_last_year() }
            fn age(&self) -> Days { (**self).age() }
            fn max_age(&self) -> Days { (**self).max_age() }
            fn reliability(&self) -> u16 { (**self).reliability() }
            fn max_speed(&self) -> u32 { (**self).max_speed() }
            fn engine(&self) -> EngineId { (**self).engine() }
            fn value(&self) -> Money { (**self).value() }
            fn length(&self) -> u32 { (**self).length() }
            fn lateness(&self) -> i32 { (**self).lateness() }
            fn first_shared(&self) -> VehicleId { (**self).first_shared() }
            fn capacity(&self, cargo: CargoType) -> u32 { (**self).capacity(cargo) }
            fn cargo_types(&self) -> CargoTypes { (**self).cargo_types() }
        }
    )+};
}

forward_vehicle!(&T, Rc<T>, Arc<T>);

/// Capacity of one cargo type within a consist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoCapacity {
    /// Cargo carried.
    pub cargo: CargoType,
    /// Capacity in cargo units.
    pub amount: u32,
}

/// Plain vehicle snapshot, owned by whoever enumerates vehicles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Stable vehicle identifier.
    pub id: VehicleId,
    /// Owning company.
    pub owner: CompanyId,
    /// Vehicle category.
    pub vehicle_type: VehicleType,
    /// Player-visible unit number.
    pub unit_number: UnitNumber,
    /// Optional custom name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Profit in the current year/period.
    pub profit_this_year: Money,
    /// Profit in the previous year/period.
    pub profit_last_year: Money,
    /// Age in days.
    pub age: Days,
    /// Maximum age in days.
    pub max_age: Days,
    /// Reliability as a fraction of `u16::MAX`.
    pub reliability: u16,
    /// Maximum speed.
    pub max_speed: u32,
    /// Engine (model) id.
    pub engine: EngineId,
    /// Current value.
    pub value: Money,
    /// Consist length.
    pub length: u32,
    /// Timetable lateness in ticks.
    pub lateness: i32,
    /// First vehicle of the shared-orders chain.
    pub first_shared: VehicleId,
    /// Vehicle group the vehicle belongs to, if any.
    #[serde(default)]
    pub group: Option<u32>,
    /// Stations visited by the vehicle's orders.
    #[serde(default)]
    pub stations: Vec<u32>,
    /// Depots visited by the vehicle's orders.
    #[serde(default)]
    pub depots: Vec<u32>,
    /// Per-cargo capacities over the consist.
    #[serde(default)]
    pub capacities: Vec<CargoCapacity>,
}

impl VehicleRecord {
    /// Creates a record with neutral attributes; it shares orders with nobody.
    pub fn new(id: VehicleId, owner: CompanyId, vehicle_type: VehicleType, unit_number: UnitNumber) -> Self {
        Self {
            id,
            owner,
            vehicle_type,
            unit_number,
            name: None,
            profit_this_year: 0,
            profit_last_year: 0,
            age: 0,
            max_age: 0,
            reliability: 0,
            max_speed: 0,
            engine: 0,
            value: 0,
            length: 0,
            lateness: 0,
            first_shared: id,
            group: None,
            stations: Vec::new(),
            depots: Vec::new(),
            capacities: Vec::new(),
        }
    }
}

impl Vehicle for VehicleRecord {
    fn id(&self) -> VehicleId {
        self.id
    }

    fn unit_number(&self) -> UnitNumber {
        self.unit_number
    }

    fn name(&self) -> Option<Cow<'_, str>> {
        self.name.as_deref().map(Cow::Borrowed)
    }

    fn profit_this_year(&self) -> Money {
        self.profit_this_year
    }

    fn profit_last_year(&self) -> Money {
        self.profit_last_year
    }

    fn age(&self) -> Days {
        self.age
    }

    fn max_age(&self) -> Days {
        self.max_age
    }

    fn reliability(&self) -> u16 {
        self.reliability
    }

    fn max_speed(&self) -> u32 {
        self.max_speed
    }

    fn engine(&self) -> EngineId {
        self.engine
    }

    fn value(&self) -> Money {
        self.value
    }

    fn length(&self) -> u32 {
        self.length
    }

    fn lateness(&self) -> i32 {
        self.lateness
    }

    fn first_shared(&self) -> VehicleId {
        self.first_shared
    }

    fn capacity(&self, cargo: CargoType) -> u32 {
        self.capacities
            .iter()
            .filter(|c| c.cargo == cargo)
            .map(|c| c.amount)
            .sum()
    }

    fn cargo_types(&self) -> CargoTypes {
        self.capacities
            .iter()
            .filter(|c| c.amount > 0)
            .map(|c| c.cargo)
            .collect()
    }
}
