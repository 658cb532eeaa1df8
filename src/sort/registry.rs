use crate::types::{GroupBy, TimeDisplay};

use super::criteria::SortCriterion;

/// Named entry of a sort-criterion menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortEntry {
    /// Label key shown in the menu.
    pub label: &'static str,
    /// Comparator applied when selected.
    pub criterion: SortCriterion,
}

const fn entry(label: &'static str, criterion: SortCriterion) -> SortEntry {
    SortEntry { label, criterion }
}

static NONE_CALENDAR: [SortEntry; 13] = [
    entry("sort.number", SortCriterion::Number),
    entry("sort.name", SortCriterion::Name),
    entry("sort.age", SortCriterion::Age),
    entry("sort.profit_this_year", SortCriterion::ProfitThisYear),
    entry("sort.profit_last_year", SortCriterion::ProfitLastYear),
    entry("sort.cargo", SortCriterion::Cargo),
    entry("sort.reliability", SortCriterion::Reliability),
    entry("sort.max_speed", SortCriterion::MaxSpeed),
    entry("sort.model", SortCriterion::Model),
    entry("sort.value", SortCriterion::Value),
    entry("sort.length", SortCriterion::Length),
    entry("sort.life_time", SortCriterion::TimeToLive),
    entry("sort.timetable_delay", SortCriterion::TimetableDelay),
];

static NONE_WALLCLOCK: [SortEntry; 13] = [
    entry("sort.number", SortCriterion::Number),
    entry("sort.name", SortCriterion::Name),
    entry("sort.age", SortCriterion::Age),
    entry("sort.profit_this_period", SortCriterion::ProfitThisYear),
    entry("sort.profit_last_period", SortCriterion::ProfitLastYear),
    entry("sort.cargo", SortCriterion::Cargo),
    entry("sort.reliability", SortCriterion::Reliability),
    entry("sort.max_speed", SortCriterion::MaxSpeed),
    entry("sort.model", SortCriterion::Model),
    entry("sort.value", SortCriterion::Value),
    entry("sort.length", SortCriterion::Length),
    entry("sort.life_time", SortCriterion::TimeToLive),
    entry("sort.timetable_delay", SortCriterion::TimetableDelay),
];

static SHARED_CALENDAR: [SortEntry; 5] = [
    entry("sort.num_vehicles", SortCriterion::VehicleCount),
    entry("sort.total_profit_this_year", SortCriterion::TotalProfitThisYear),
    entry("sort.total_profit_last_year", SortCriterion::TotalProfitLastYear),
    entry("sort.average_profit_this_year", SortCriterion::AverageProfitThisYear),
    entry("sort.average_profit_last_year", SortCriterion::AverageProfitLastYear),
];

static SHARED_WALLCLOCK: [SortEntry; 5] = [
    entry("sort.num_vehicles", SortCriterion::VehicleCount),
    entry("sort.total_profit_this_period", SortCriterion::TotalProfitThisYear),
    entry("sort.total_profit_last_period", SortCriterion::TotalProfitLastYear),
    entry("sort.average_profit_this_period", SortCriterion::AverageProfitThisYear),
    entry("sort.average_profit_last_period", SortCriterion::AverageProfitLastYear),
];

/// Sort menu for a grouping mode and time display.
pub fn criteria(group_by: GroupBy, time_display: TimeDisplay) -> &'static [SortEntry] {
    match (group_by, time_display) {
        (GroupBy::None, TimeDisplay::Calendar) => &NONE_CALENDAR,
        (GroupBy::None, TimeDisplay::Wallclock) => &NONE_WALLCLOCK,
        (GroupBy::SharedOrders, TimeDisplay::Calendar) => &SHARED_CALENDAR,
        (GroupBy::SharedOrders, TimeDisplay::Wallclock) => &SHARED_WALLCLOCK,
    }
}
