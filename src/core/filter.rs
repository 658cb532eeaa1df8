use serde::{Deserialize, Serialize};

use crate::{
    types::{CargoType, CargoTypes},
    vehicle::Vehicle,
};

/// Selected cargo filter criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CargoFilter {
    /// No filtering.
    #[default]
    Any,
    /// Vehicles with cargo capacity, none of it for passengers.
    Freight,
    /// Vehicles with no cargo capacity at all.
    NoCargo,
    /// Vehicles with nonzero capacity for one cargo type.
    Cargo(CargoType),
}

impl CargoFilter {
    /// Label key for menus; concrete cargoes are labelled by the caller.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "cargo_filter.any",
            Self::Freight => "cargo_filter.freight",
            Self::NoCargo => "cargo_filter.none",
            Self::Cargo(_) => "cargo_filter.cargo",
        }
    }

    /// Returns true when `v` passes this filter.
    pub fn matches<V: Vehicle>(self, v: &V, passengers: CargoTypes) -> bool {
        match self {
            Self::Any => true,
            Self::Freight => {
                let carried = v.cargo_types();
                !carried.is_empty() && !carried.intersects(passengers)
            }
            Self::NoCargo => v.cargo_types().is_empty(),
            Self::Cargo(cargo) => v.capacity(cargo) > 0,
        }
    }
}

/// One line of the cargo selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CargoMenuEntry {
    /// Selectable filter; `disabled` marks cargoes no listed vehicle carries.
    Filter {
        /// Filter applied when chosen.
        filter: CargoFilter,
        /// Shown greyed out.
        disabled: bool,
    },
    /// Visual separator.
    Divider,
    /// Re-open the menu with every known cargo.
    Expand,
}

/// Union of cargo types with nonzero capacity over `vehicles`.
pub fn used_cargo_types<V: Vehicle>(vehicles: &[V]) -> CargoTypes {
    vehicles
        .iter()
        .fold(CargoTypes::EMPTY, |acc, v| acc.union(v.cargo_types()))
}

/// Vehicles matching `filter`, in input order.
pub fn apply_cargo_filter<V: Vehicle + Clone>(
    vehicles: &[V],
    filter: CargoFilter,
    passengers: CargoTypes,
) -> Vec<V> {
    if filter == CargoFilter::Any {
        return vehicles.to_vec();
    }
    vehicles
        .iter()
        .filter(|v| filter.matches(*v, passengers))
        .cloned()
        .collect()
}

/// Builds the cargo selection menu.
///
/// `known` is the display order of every cargo type. Without `full`, cargoes
/// absent from `used` are hidden and an expand item is appended when any were.
pub fn cargo_menu(used: CargoTypes, known: &[CargoType], full: bool) -> Vec<CargoMenuEntry> {
    let mut menu: Vec<CargoMenuEntry> = [CargoFilter::Any, CargoFilter::Freight, CargoFilter::NoCargo]
        .into_iter()
        .map(|filter| CargoMenuEntry::Filter {
            filter,
            disabled: false,
        })
        .collect();

    let mut any_hidden = false;
    for &cargo in known {
        let is_used = used.contains(cargo);
        if !full && !is_used {
            any_hidden = true;
            continue;
        }
        menu.push(CargoMenuEntry::Filter {
            filter: CargoFilter::Cargo(cargo),
            disabled: !is_used,
        });
    }

    if any_hidden {
        menu.push(CargoMenuEntry::Divider);
        menu.push(CargoMenuEntry::Expand);
    }
    menu
}
