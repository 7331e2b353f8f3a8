//! Value object trait: equality by value, not identity.
//!
//! Plays, performances and fee schedules have no identity of their own. A
//! play's identifier lives in the catalog key, not in the play.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Performance {
///     play_id: PlayId,
///     audience: u32,
/// }
///
/// impl ValueObject for Performance {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
