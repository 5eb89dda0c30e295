//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values alone;
/// identity doesn't matter. A gender option is a value object (`Gender::Male`
/// equals any other `Gender::Male`), while a roster record is an entity (two
/// records with the same id are the same record regardless of field values).
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied,
/// compared structurally, and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
