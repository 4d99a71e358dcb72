//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are interchangeable. In this domain an item's category is a value
/// object; the item records themselves are plain mutable state owned by the
/// caller.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum ItemCategory { Legendary, Ordinary }
///
/// impl ValueObject for ItemCategory {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
