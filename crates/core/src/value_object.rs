//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// - **Value Object**: `Cents(40500)`, a resolved `Play`, an enriched performance line
/// - **Entity**: a `Producer`, addressed by its `ProducerId` inside a province
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Seats(u32);
///
/// impl ValueObject for Seats {}
///
/// assert_eq!(Seats(35), Seats(35));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
