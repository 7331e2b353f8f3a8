//! `theater-core` — billing foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{BillingError, BillingResult};
pub use id::PlayId;
pub use value_object::ValueObject;
