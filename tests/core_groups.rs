use vehlist::{
    core::{
        filter::{apply_cargo_filter, cargo_menu, used_cargo_types, CargoFilter, CargoMenuEntry},
        grouping::{build_groups, unit_number_digits},
        list::{ListError, VehicleList},
    },
    sort::{criteria::SortCriterion, registry::criteria, stage::Sorter},
    types::{CargoTypes, GroupBy, TimeDisplay, VehicleId, VehicleType},
    vehicle::{CargoCapacity, VehicleRecord},
};

fn road(id: VehicleId, chain: VehicleId, profit: i64, age: i32) -> VehicleRecord {
    let mut v = VehicleRecord::new(id, 0, VehicleType::Road, id as u16);
    v.first_shared = chain;
    v.profit_this_year = profit;
    v.profit_last_year = profit / 2;
    v.age = age;
    v
}

#[test]
fn shared_orders_groups_by_first_appearance() {
    let vs = vec![
        road(1, 10, 0, 0),
        road(2, 20, 0, 0),
        road(3, 10, 0, 0),
        road(4, 30, 0, 0),
        road(5, 20, 0, 0),
    ];
    let (arranged, ranges) = build_groups(&vs, GroupBy::SharedOrders);
    let order: Vec<VehicleId> = arranged.iter().map(|v| v.id).collect();
    assert_eq!(order, vec![1, 3, 2, 5, 4]);
    assert_eq!(ranges, vec![0..2, 2..4, 4..5]);

    let (again, ranges_again) = build_groups(&vs, GroupBy::SharedOrders);
    assert_eq!(again, arranged);
    assert_eq!(ranges_again, ranges);

    let (flat, singletons) = build_groups(&vs, GroupBy::None);
    assert_eq!(flat, vs);
    assert_eq!(singletons.len(), 5);
    assert!(singletons.iter().all(|r| r.len() == 1));
}

#[test]
fn group_view_aggregates() {
    let vs = vec![road(1, 1, 100, 7), road(2, 1, -40, 9), road(3, 1, 10, 9)];
    let mut list: VehicleList<VehicleRecord> = VehicleList::new();
    let groups = list.regroup(&vs, GroupBy::SharedOrders);
    assert_eq!(groups.len(), 1);

    let view = list.view(&groups[0]).expect("fresh");
    assert_eq!(view.len(), 3);
    assert_eq!(view.profit_this_year(), 70);
    assert_eq!(view.profit_last_year(), 50 - 20 + 5);
    assert_eq!(view.average_profit_this_year(), 23);
    assert_eq!(view.oldest_age(), Some(9));
    assert_eq!(view.oldest_vehicle().map(|v| v.id), Some(2));
}

#[test]
fn stale_groups_are_rejected_after_reassignment() {
    let vs = vec![road(1, 1, 0, 0), road(2, 2, 0, 0)];
    let mut list: VehicleList<VehicleRecord> = VehicleList::new();
    let old = list.regroup(&vs, GroupBy::None);
    let old_version = list.version();

    let fresh = list.regroup(&vs[..1], GroupBy::None);
    assert_eq!(
        list.view(&old[1]).expect_err("stale"),
        ListError::StaleGroup {
            group_version: old_version,
            list_version: old_version + 1,
        }
    );
    assert!(list.view(&fresh[0]).is_ok());

    let mut sorter = Sorter::new();
    let mut stale = old.clone();
    assert!(sorter.sort(&mut stale, &list, SortCriterion::Number, false).is_err());

    list.clear();
    assert!(list.is_empty());
    assert!(list.view(&fresh[0]).is_err());
}

#[test]
#[should_panic(expected = "single_vehicle on a group of 2")]
fn single_vehicle_requires_singleton() {
    let vs = vec![road(1, 1, 0, 0), road(2, 1, 0, 0)];
    let mut list: VehicleList<VehicleRecord> = VehicleList::new();
    let groups = list.regroup(&vs, GroupBy::SharedOrders);
    let view = list.view(&groups[0]).expect("fresh");
    let _ = view.single_vehicle();
}

#[test]
fn empty_input_flows_through_every_stage() {
    let vs: Vec<VehicleRecord> = Vec::new();
    assert!(used_cargo_types(&vs).is_empty());
    assert!(apply_cargo_filter(&vs, CargoFilter::Cargo(3), CargoTypes::EMPTY).is_empty());
    assert_eq!(unit_number_digits(&vs), 1);

    let mut list: VehicleList<VehicleRecord> = VehicleList::new();
    let mut groups = list.regroup(&vs, GroupBy::SharedOrders);
    assert!(groups.is_empty());
    let mut sorter = Sorter::new();
    assert_eq!(sorter.sort(&mut groups, &list, SortCriterion::VehicleCount, true), Ok(true));
}

#[test]
fn sorter_skips_when_nothing_changed() {
    let vs = vec![road(1, 1, 5, 0), road(2, 2, 3, 0)];
    let mut list: VehicleList<VehicleRecord> = VehicleList::new();
    let mut groups = list.regroup(&vs, GroupBy::None);
    let mut sorter = Sorter::new();

    assert_eq!(sorter.sort(&mut groups, &list, SortCriterion::ProfitThisYear, false), Ok(true));
    assert_eq!(sorter.sort(&mut groups, &list, SortCriterion::ProfitThisYear, false), Ok(false));
    assert_eq!(sorter.sort(&mut groups, &list, SortCriterion::ProfitThisYear, true), Ok(true));
    assert_eq!(sorter.sort(&mut groups, &list, SortCriterion::Number, true), Ok(true));

    groups = list.regroup(&vs, GroupBy::None);
    assert_eq!(sorter.sort(&mut groups, &list, SortCriterion::Number, true), Ok(true));

    sorter.force_resort();
    assert!(sorter.is_forced());
    assert_eq!(sorter.sort(&mut groups, &list, SortCriterion::Number, true), Ok(true));
    assert!(!sorter.is_forced());
}

#[test]
fn individual_criteria_order_by_their_key() {
    let mut a = road(1, 1, 0, 100);
    a.max_age = 1000;
    a.name = Some("Zephyr".to_string());
    a.capacities.push(CargoCapacity { cargo: 2, amount: 10 });
    let mut b = road(2, 2, 0, 500);
    b.max_age = 700;
    b.capacities.push(CargoCapacity { cargo: 1, amount: 5 });
    let vs = vec![a, b];

    let mut list: VehicleList<VehicleRecord> = VehicleList::new();
    let order = |list: &mut VehicleList<VehicleRecord>, criterion| {
        let mut groups = list.regroup(&vs, GroupBy::None);
        Sorter::new().sort(&mut groups, list, criterion, false).expect("sort");
        groups
            .iter()
            .map(|g| list.view(g).expect("fresh").single_vehicle().id)
            .collect::<Vec<_>>()
    };

    assert_eq!(order(&mut list, SortCriterion::Age), vec![1, 2]);
    assert_eq!(order(&mut list, SortCriterion::TimeToLive), vec![2, 1]);
    assert_eq!(order(&mut list, SortCriterion::Name), vec![2, 1]);
    assert_eq!(order(&mut list, SortCriterion::Cargo), vec![1, 2]);
}

#[test]
fn each_criterion_follows_its_key_in_both_directions() {
    let mut low = road(1, 1, 10, 0);
    low.reliability = 100;
    low.max_speed = 80;
    low.engine = 3;
    low.value = 1_000;
    low.length = 2;
    low.lateness = -5;
    let mut high = road(2, 2, 20, 0);
    high.reliability = 200;
    high.max_speed = 120;
    high.engine = 4;
    high.value = 5_000;
    high.length = 6;
    high.lateness = 30;
    let vs = vec![high, low];

    let table = [
        SortCriterion::Number,
        SortCriterion::ProfitThisYear,
        SortCriterion::ProfitLastYear,
        SortCriterion::Reliability,
        SortCriterion::MaxSpeed,
        SortCriterion::Model,
        SortCriterion::Value,
        SortCriterion::Length,
        SortCriterion::TimetableDelay,
    ];
    for criterion in table {
        for (descending, expected) in [(false, vec![1, 2]), (true, vec![2, 1])] {
            let mut list: VehicleList<VehicleRecord> = VehicleList::new();
            let mut groups = list.regroup(&vs, GroupBy::None);
            Sorter::new()
                .sort(&mut groups, &list, criterion, descending)
                .expect("sort");
            let ids: Vec<VehicleId> = groups
                .iter()
                .map(|g| list.view(g).expect("fresh").single_vehicle().id)
                .collect();
            assert_eq!(ids, expected, "{criterion:?} descending={descending}");
        }
    }
}

#[test]
fn group_criteria_follow_group_aggregates() {
    // Chain 7: three vehicles earning 10 each. Chain 9: one vehicle earning 90.
    let vs = vec![
        road(1, 7, 10, 0),
        road(2, 9, 90, 0),
        road(3, 7, 10, 0),
        road(4, 7, 10, 0),
    ];

    let table = [
        (SortCriterion::VehicleCount, vec![9, 7]),
        (SortCriterion::TotalProfitThisYear, vec![7, 9]),
        (SortCriterion::AverageProfitThisYear, vec![7, 9]),
        (SortCriterion::AverageProfitLastYear, vec![7, 9]),
    ];
    for (criterion, ascending) in table {
        for descending in [false, true] {
            let mut list: VehicleList<VehicleRecord> = VehicleList::new();
            let mut groups = list.regroup(&vs, GroupBy::SharedOrders);
            Sorter::new()
                .sort(&mut groups, &list, criterion, descending)
                .expect("sort");
            let chains: Vec<VehicleId> = groups
                .iter()
                .map(|g| list.view(g).expect("fresh").vehicles()[0].first_shared)
                .collect();
            let mut expected = ascending.clone();
            if descending {
                expected.reverse();
            }
            assert_eq!(chains, expected, "{criterion:?} descending={descending}");
        }
    }
}

#[test]
fn group_totals_saturate_instead_of_overflowing() {
    let vs = vec![road(1, 1, i64::MAX, 0), road(2, 1, i64::MAX, 0), road(3, 2, i64::MIN, 0)];
    let mut list: VehicleList<VehicleRecord> = VehicleList::new();
    let groups = list.regroup(&vs, GroupBy::SharedOrders);

    let rich = list.view(&groups[0]).expect("fresh");
    assert_eq!(rich.profit_this_year(), i64::MAX);
    assert_eq!(rich.average_profit_this_year(), i64::MAX / 2);
    let poor = list.view(&groups[1]).expect("fresh");
    assert_eq!(poor.profit_this_year(), i64::MIN);
}

#[test]
fn cargo_type_set_reports_members() {
    let vs = vec![
        road(1, 1, 0, 0),
        {
            let mut v = road(2, 2, 0, 0);
            v.capacities.push(CargoCapacity { cargo: 4, amount: 1 });
            v.capacities.push(CargoCapacity { cargo: 1, amount: 1 });
            v
        },
    ];
    let used = used_cargo_types(&vs);
    assert_eq!(used.len(), 2);
    assert_eq!(used.bits(), 1 << 1 | 1 << 4);
    assert_eq!(CargoTypes::from_bits(used.bits()), used);
}

#[test]
fn registry_tables_are_parallel() {
    for group_by in GroupBy::ALL {
        let calendar = criteria(group_by, TimeDisplay::Calendar);
        let wallclock = criteria(group_by, TimeDisplay::Wallclock);
        assert_eq!(calendar.len(), wallclock.len());
        for (c, w) in calendar.iter().zip(wallclock) {
            assert_eq!(c.criterion, w.criterion);
        }
    }
    assert_eq!(criteria(GroupBy::None, TimeDisplay::Calendar).len(), 13);
    assert_eq!(criteria(GroupBy::SharedOrders, TimeDisplay::Calendar).len(), 5);
}

#[test]
fn cargo_menu_orders_fixed_entries_first() {
    let used: CargoTypes = [4u8, 1].into_iter().collect();
    let menu = cargo_menu(used, &[4, 0, 1], false);
    assert_eq!(
        menu,
        vec![
            CargoMenuEntry::Filter { filter: CargoFilter::Any, disabled: false },
            CargoMenuEntry::Filter { filter: CargoFilter::Freight, disabled: false },
            CargoMenuEntry::Filter { filter: CargoFilter::NoCargo, disabled: false },
            CargoMenuEntry::Filter { filter: CargoFilter::Cargo(4), disabled: false },
            CargoMenuEntry::Filter { filter: CargoFilter::Cargo(1), disabled: false },
            CargoMenuEntry::Divider,
            CargoMenuEntry::Expand,
        ]
    );
    assert_eq!(cargo_menu(used, &[4, 1], false).len(), 5);
    assert_eq!(CargoFilter::Freight.label(), "cargo_filter.freight");
}
