//! Billing error model.

use thiserror::Error;

/// Result type used across the billing domain.
pub type BillingResult<T> = Result<T, BillingError>;

/// Billing-level error.
///
/// Every variant describes a defect in caller-supplied input (catalog,
/// invoice or fee schedule). Nothing here is retried or recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A play carries a type with no pricing rule.
    #[error("unknown type: {0}")]
    UnknownPlayType(String),

    /// A performance references a play missing from the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(String),

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A fee schedule failed validation or could not be parsed.
    #[error("invalid fee schedule: {0}")]
    InvalidSchedule(String),

    /// Integer arithmetic on an amount or credit total overflowed.
    #[error("amount overflow: {0}")]
    Overflow(String),
}

impl BillingError {
    pub fn unknown_play_type(play_type: impl Into<String>) -> Self {
        Self::UnknownPlayType(play_type.into())
    }

    pub fn unknown_play(play_id: impl Into<String>) -> Self {
        Self::UnknownPlay(play_id.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_schedule(msg: impl Into<String>) -> Self {
        Self::InvalidSchedule(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }
}
