//! Theater invoicing: performance pricing and customer statements.
//!
//! This crate contains the billing rules as deterministic domain logic
//! (no IO, no storage). Catalogs and invoices are supplied by the caller.

pub mod invoice;
pub mod play;
pub mod pricing;
pub mod schedule;
pub mod statement;
pub mod usd;

pub use invoice::{Invoice, Performance};
pub use play::{Play, PlayCatalog, PlayType};
pub use pricing::{PerformanceCharge, PricingRule, quote};
pub use schedule::FeeSchedule;
pub use statement::{
    LINE_SEPARATOR, StatementData, StatementLine, StatementPrinter, statement,
    statement_with_schedule,
};
pub use usd::usd;

pub use theater_core::{BillingError, BillingResult, PlayId};
