//! List controller orchestrating rebuild, filter, group, and sort.

/// Change notifications emitted by the controller.
pub mod events;
/// Controller state machine and configuration.
pub mod window;
