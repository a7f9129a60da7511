//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are compared by `id()` wherever identity matters, independently of
/// whatever `PartialEq` says about their attributes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when both values are the same entity.
    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
