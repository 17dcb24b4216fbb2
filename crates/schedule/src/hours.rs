use std::collections::HashSet;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use mercato_core::{DomainError, DomainResult, ValueObject};

/// A daily open/close interval. Time-of-day values only, no date component.
///
/// The interval is half-open: a query exactly at the opening time is open,
/// exactly at the closing time is closed. Closing must be strictly after
/// opening, so overnight-spanning intervals are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingInterval {
    open: NaiveTime,
    close: NaiveTime,
}

impl OperatingInterval {
    pub fn new(open: NaiveTime, close: NaiveTime) -> DomainResult<Self> {
        if close <= open {
            return Err(DomainError::invalid_argument(
                "closing time must be after opening time",
            ));
        }
        Ok(Self { open, close })
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// True iff `open <= time < close`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.open <= time && time < self.close
    }
}

impl ValueObject for OperatingInterval {}

/// One daily interval applied to a non-empty set of weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    hours: OperatingInterval,
    open_days: HashSet<Weekday>,
}

impl WeeklySchedule {
    pub fn new(hours: OperatingInterval, open_days: HashSet<Weekday>) -> DomainResult<Self> {
        if open_days.is_empty() {
            return Err(DomainError::invalid_argument(
                "at least one operating day is required",
            ));
        }
        Ok(Self { hours, open_days })
    }

    pub fn hours(&self) -> OperatingInterval {
        self.hours
    }

    pub fn open_days(&self) -> &HashSet<Weekday> {
        &self.open_days
    }

    /// True iff the weekday is an operating day and the interval contains
    /// the time.
    pub fn is_open_at(&self, weekday: Weekday, time: NaiveTime) -> bool {
        self.open_days.contains(&weekday) && self.hours.contains(time)
    }
}

impl ValueObject for WeeklySchedule {}
