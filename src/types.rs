//! Shared primitive IDs, money/date aliases, and list-related enums.

use serde::{Deserialize, Serialize};

/// Stable vehicle identifier.
pub type VehicleId = u32;
/// Per-company vehicle number shown to the player.
pub type UnitNumber = u16;
/// Company identifier.
pub type CompanyId = u8;
/// Engine (model) identifier.
pub type EngineId = u16;
/// Money amount in base currency units.
pub type Money = i64;
/// Age or date offset in days.
pub type Days = i32;
/// Cargo type index, `0..NUM_CARGO`.
pub type CargoType = u8;

/// Number of distinct cargo slots.
pub const NUM_CARGO: u8 = 64;

/// Bitset of cargo types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CargoTypes(u64);

impl CargoTypes {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from raw bits.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw bits.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns true when `cargo` is in the set.
    pub const fn contains(self, cargo: CargoType) -> bool {
        cargo < NUM_CARGO && self.0 & (1u64 << cargo) != 0
    }

    /// Adds `cargo` to the set. Indices outside `0..NUM_CARGO` are ignored.
    pub fn insert(&mut self, cargo: CargoType) {
        if cargo < NUM_CARGO {
            self.0 |= 1u64 << cargo;
        }
    }

    /// Set union.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true when the two sets share at least one cargo.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns true when no cargo is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of cargo types in the set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates contained cargo types in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = CargoType> {
        (0..NUM_CARGO).filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CargoType> for CargoTypes {
    fn from_iter<I: IntoIterator<Item = CargoType>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for cargo in iter {
            set.insert(cargo);
        }
        set
    }
}

/// Vehicle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleType {
    /// Rail vehicles.
    Train,
    /// Road vehicles.
    Road,
    /// Ships.
    Ship,
    /// Aircraft.
    Aircraft,
}

impl VehicleType {
    /// All company-owned vehicle categories in discriminant order.
    pub const ALL: [Self; 4] = [Self::Train, Self::Road, Self::Ship, Self::Aircraft];
}

/// Scope of a vehicle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleListType {
    /// Every vehicle of one type owned by a company.
    Company,
    /// Vehicles sharing orders with a given vehicle.
    SharedOrders,
    /// Vehicles with orders to a given station.
    Station,
    /// Vehicles with orders to a given depot.
    Depot,
    /// Vehicles in a given vehicle group.
    Group,
}

impl VehicleListType {
    /// All list types in discriminant order.
    pub const ALL: [Self; 5] = [
        Self::Company,
        Self::SharedOrders,
        Self::Station,
        Self::Depot,
        Self::Group,
    ];
}

/// How the list is grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupBy {
    /// One row per vehicle.
    #[default]
    None,
    /// One row per set of vehicles sharing orders.
    SharedOrders,
}

impl GroupBy {
    /// Every grouping mode, in menu order.
    pub const ALL: [Self; 2] = [Self::None, Self::SharedOrders];

    /// Label key for the grouping menu.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "group_by.none",
            Self::SharedOrders => "group_by.shared_orders",
        }
    }
}

/// Whether time-based quantities are shown in calendar years or wallclock periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeDisplay {
    /// Calendar years.
    #[default]
    Calendar,
    /// Wallclock minutes-based periods.
    Wallclock,
}
