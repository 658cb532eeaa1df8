use vehlist::{
    ident::{IdentError, VehicleListId},
    settings::{ListSettings, Listing, SettingsSnapshotV1, SETTINGS_FORMAT_VERSION},
    types::{GroupBy, VehicleListType, VehicleType},
};

#[test]
fn settings_snapshot_survives_json_encoding() {
    let mut settings = ListSettings::new();
    settings.set_grouping(VehicleListType::Station, VehicleType::Ship, GroupBy::SharedOrders);
    settings.set_grouping(VehicleListType::Company, VehicleType::Train, GroupBy::None);
    settings.set_listing(GroupBy::None, VehicleType::Aircraft, Listing { criterion: 4, descending: true });

    let snapshot = settings.export_snapshot();
    assert_eq!(snapshot.format_version, SETTINGS_FORMAT_VERSION);
    assert_eq!(snapshot.grouping[0].0, VehicleListType::Company);

    let json = serde_json::to_string(&snapshot).expect("encode");
    let decoded: SettingsSnapshotV1 = serde_json::from_str(&json).expect("decode");
    let restored = ListSettings::from_snapshot(decoded);

    assert_eq!(restored, settings);
    assert_eq!(
        restored.grouping(VehicleListType::Station, VehicleType::Ship),
        GroupBy::SharedOrders
    );
    assert_eq!(
        restored.listing(GroupBy::None, VehicleType::Aircraft),
        Listing { criterion: 4, descending: true }
    );
    assert_eq!(restored.listing(GroupBy::SharedOrders, VehicleType::Aircraft), Listing::default());
}

#[test]
fn list_id_packs_into_documented_layout() {
    let id = VehicleListId::new(VehicleListType::Depot, VehicleType::Ship, 3, 0x1234);
    let packed = id.pack().expect("fits");
    assert_eq!(packed, 3 << 28 | 2 << 26 | 3 << 23 | 0x1234);
    assert_eq!(VehicleListId::unpack(packed), Ok(id));
}

#[test]
fn list_id_rejects_overflow_and_garbage() {
    let big_company = VehicleListId::new(VehicleListType::Company, VehicleType::Train, 16, 0);
    assert_eq!(big_company.pack(), Err(IdentError::CompanyOverflow(16)));

    let big_index = VehicleListId::new(VehicleListType::Group, VehicleType::Road, 0, 1 << 20);
    assert_eq!(big_index.pack(), Err(IdentError::IndexOverflow(1 << 20)));

    assert_eq!(VehicleListId::unpack(7 << 23), Err(IdentError::UnknownListType(7)));
    assert_eq!(VehicleListId::unpack(1 << 21), Err(IdentError::Reserved(1 << 21)));
}
