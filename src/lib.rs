//! Filtered, grouped, and sorted vehicle list views over a volatile source.
//!
//! # Examples
//!
//! ```
//! use vehlist::{
//!     controller::window::{ListConfig, ListController},
//!     ident::VehicleListId,
//!     settings::ListSettings,
//!     source::memory::MemorySource,
//!     types::{GroupBy, VehicleListType, VehicleType},
//!     vehicle::VehicleRecord,
//! };
//!
//! let mut source = MemorySource::new();
//! let mut a = VehicleRecord::new(1, 0, VehicleType::Train, 1);
//! a.profit_this_year = 100;
//! a.age = 5;
//! let mut b = VehicleRecord::new(2, 0, VehicleType::Train, 2);
//! b.profit_this_year = 200;
//! b.age = 10;
//! b.first_shared = 1;
//! source.upsert(a);
//! source.upsert(b);
//!
//! let id = VehicleListId::new(VehicleListType::Company, VehicleType::Train, 0, 0);
//! let mut list = ListController::new(id, &ListSettings::new(), ListConfig::default());
//! list.set_grouping(GroupBy::SharedOrders);
//! list.refresh(&source);
//!
//! let group = list.group(0).expect("one group");
//! assert_eq!(group.len(), 2);
//! assert_eq!(group.profit_this_year(), 300);
//! assert_eq!(group.oldest_age(), Some(10));
//! ```
#![deny(missing_docs)]

/// List controller, configuration, and change events.
pub mod controller;
/// Versioned buffer, filter stage, and group aggregator.
pub mod core;
/// Vehicle list identifiers.
pub mod ident;
/// Persisted grouping and sort state.
pub mod settings;
/// Sort criteria, registry, and sorter.
pub mod sort;
/// Vehicle source collaborator.
pub mod source;
/// Shared primitive types and enums.
pub mod types;
/// Vehicle view trait and plain record.
pub mod vehicle;
