use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{core::list::GroupView, vehicle::Vehicle};

/// Ordering key used by the sort stage.
///
/// Individual criteria expect singleton groups; shared-orders criteria work
/// on whole groups. Every criterion compares a single key so that equal keys
/// compare `Equal` and keep their relative order under a stable sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortCriterion {
    /// Unit number.
    Number,
    /// Custom name; unnamed vehicles sort first.
    Name,
    /// Age.
    Age,
    /// Profit this year.
    ProfitThisYear,
    /// Profit last year.
    ProfitLastYear,
    /// Per-cargo capacity, compared cargo by cargo in index order.
    Cargo,
    /// Reliability.
    Reliability,
    /// Maximum speed.
    MaxSpeed,
    /// Engine id.
    Model,
    /// Current value.
    Value,
    /// Consist length.
    Length,
    /// Remaining life (`max_age - age`).
    TimeToLive,
    /// Timetable lateness.
    TimetableDelay,
    /// Number of vehicles in the group.
    VehicleCount,
    /// Group profit this year.
    TotalProfitThisYear,
    /// Group profit last year.
    TotalProfitLastYear,
    /// Mean profit this year.
    AverageProfitThisYear,
    /// Mean profit last year.
    AverageProfitLastYear,
}

impl SortCriterion {
    /// Compares two groups by this criterion, ascending.
    pub fn compare<V: Vehicle>(self, a: &GroupView<'_, V>, b: &GroupView<'_, V>) -> Ordering {
        match self {
            Self::VehicleCount => a.len().cmp(&b.len()),
            Self::TotalProfitThisYear => a.profit_this_year().cmp(&b.profit_this_year()),
            Self::TotalProfitLastYear => a.profit_last_year().cmp(&b.profit_last_year()),
            Self::AverageProfitThisYear => a
                .average_profit_this_year()
                .cmp(&b.average_profit_this_year()),
            Self::AverageProfitLastYear => a
                .average_profit_last_year()
                .cmp(&b.average_profit_last_year()),
            individual => individual.compare_vehicles(a.single_vehicle(), b.single_vehicle()),
        }
    }

    fn compare_vehicles<V: Vehicle>(self, a: &V, b: &V) -> Ordering {
        match self {
            Self::Number => a.unit_number().cmp(&b.unit_number()),
            Self::Name => a.name().cmp(&b.name()),
            Self::Age => a.age().cmp(&b.age()),
            Self::ProfitThisYear => a.profit_this_year().cmp(&b.profit_this_year()),
            Self::ProfitLastYear => a.profit_last_year().cmp(&b.profit_last_year()),
            Self::Cargo => compare_cargo(a, b),
            Self::Reliability => a.reliability().cmp(&b.reliability()),
            Self::MaxSpeed => a.max_speed().cmp(&b.max_speed()),
            Self::Model => a.engine().cmp(&b.engine()),
            Self::Value => a.value().cmp(&b.value()),
            Self::Length => a.length().cmp(&b.length()),
            Self::TimeToLive => time_to_live(a).cmp(&time_to_live(b)),
            Self::TimetableDelay => a.lateness().cmp(&b.lateness()),
            Self::VehicleCount
            | Self::TotalProfitThisYear
            | Self::TotalProfitLastYear
            | Self::AverageProfitThisYear
            | Self::AverageProfitLastYear => Ordering::Equal,
        }
    }
}

fn time_to_live<V: Vehicle>(v: &V) -> i64 {
    i64::from(v.max_age()) - i64::from(v.age())
}

fn compare_cargo<V: Vehicle>(a: &V, b: &V) -> Ordering {
    a.cargo_types()
        .union(b.cargo_types())
        .iter()
        .map(|cargo| a.capacity(cargo).cmp(&b.capacity(cargo)))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}
