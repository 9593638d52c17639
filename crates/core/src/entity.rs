//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Producers are entities: two producers with the same name and numbers are
/// still distinct members of their province.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
