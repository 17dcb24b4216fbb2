//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two instances
/// with the same attributes are interchangeable. Entities, in contrast, are
/// tracked by identifier even when their attributes change.
///
/// To "modify" a value object, construct a new one. Operating hours are the
/// canonical case here: a schedule with the same interval and weekdays is the
/// same schedule, wherever it appears.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
