//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects holding the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one and put it where the old one was.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two phone numbers with the same digits are equal)
/// - **Entity**: has identity (a contact record is identified by its name)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Extension(String);
///
/// impl ValueObject for Extension {}
///
/// assert_eq!(Extension("42".into()), Extension("42".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
