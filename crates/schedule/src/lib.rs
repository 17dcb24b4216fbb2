//! Operating-hours domain module.
//!
//! Weekly opening schedules as value objects: a daily open/close interval
//! plus the set of weekdays it applies to. Point-in-time queries only; no
//! dates, no timezones.

pub mod hours;

pub use hours::{OperatingInterval, WeeklySchedule};
