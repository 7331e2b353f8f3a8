//! Fee schedule: the tunable constants behind pricing and currency rendering.
//!
//! Amounts are in cents, thresholds and divisors in seats.

use serde::{Deserialize, Serialize};

use theater_core::{BillingError, BillingResult, ValueObject};

pub const TRAGEDY_BASE_AMOUNT: u64 = 40_000;
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;
pub const TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON: u64 = 1_000;
pub const COMEDY_BASE_AMOUNT: u64 = 30_000;
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;
pub const COMEDY_OVER_BASE_CAPACITY_AMOUNT: u64 = 10_000;
pub const COMEDY_OVER_BASE_CAPACITY_PER_PERSON: u64 = 500;
pub const COMEDY_AMOUNT_PER_AUDIENCE: u64 = 300;
pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;
pub const COMEDY_EXTRA_VOLUME_FACTOR: u32 = 5;
pub const PERCENT_FACTOR: u64 = 100;

/// Environment variable holding a JSON fee schedule override.
pub const FEE_SCHEDULE_ENV: &str = "THEATER_FEE_SCHEDULE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub tragedy_base_amount: u64,
    pub tragedy_audience_threshold: u32,
    pub tragedy_over_base_capacity_per_person: u64,
    pub comedy_base_amount: u64,
    pub comedy_audience_threshold: u32,
    pub comedy_over_base_capacity_amount: u64,
    pub comedy_over_base_capacity_per_person: u64,
    pub comedy_amount_per_audience: u64,
    /// Seats that earn no credits. Also the subtrahend of the tragedy
    /// over-capacity charge.
    pub base_volume_credit_threshold: u32,
    pub comedy_extra_volume_factor: u32,
    /// Cents per dollar.
    pub percent_factor: u64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            tragedy_base_amount: TRAGEDY_BASE_AMOUNT,
            tragedy_audience_threshold: TRAGEDY_AUDIENCE_THRESHOLD,
            tragedy_over_base_capacity_per_person: TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON,
            comedy_base_amount: COMEDY_BASE_AMOUNT,
            comedy_audience_threshold: COMEDY_AUDIENCE_THRESHOLD,
            comedy_over_base_capacity_amount: COMEDY_OVER_BASE_CAPACITY_AMOUNT,
            comedy_over_base_capacity_per_person: COMEDY_OVER_BASE_CAPACITY_PER_PERSON,
            comedy_amount_per_audience: COMEDY_AMOUNT_PER_AUDIENCE,
            base_volume_credit_threshold: BASE_VOLUME_CREDIT_THRESHOLD,
            comedy_extra_volume_factor: COMEDY_EXTRA_VOLUME_FACTOR,
            percent_factor: PERCENT_FACTOR,
        }
    }
}

impl ValueObject for FeeSchedule {}

impl FeeSchedule {
    /// Check the constraints pricing and rendering rely on.
    pub fn validate(&self) -> BillingResult<()> {
        if self.comedy_extra_volume_factor == 0 {
            return Err(BillingError::invalid_schedule(
                "comedy_extra_volume_factor must be positive",
            ));
        }
        if self.percent_factor == 0 {
            return Err(BillingError::invalid_schedule(
                "percent_factor must be positive",
            ));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON schedule; missing fields take defaults.
    pub fn from_json(json: &str) -> BillingResult<Self> {
        let schedule: FeeSchedule = serde_json::from_str(json)
            .map_err(|e| BillingError::invalid_schedule(e.to_string()))?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Load the schedule from `THEATER_FEE_SCHEDULE`, or the default when unset.
    pub fn from_env() -> BillingResult<Self> {
        Self::from_env_value(std::env::var(FEE_SCHEDULE_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> BillingResult<Self> {
        match value {
            Some(json) => {
                let schedule = Self::from_json(json).inspect_err(|e| {
                    tracing::warn!("{FEE_SCHEDULE_ENV} rejected: {e}");
                })?;
                tracing::info!("using fee schedule from {FEE_SCHEDULE_ENV}");
                Ok(schedule)
            }
            None => {
                tracing::debug!("{FEE_SCHEDULE_ENV} not set; using default fee schedule");
                Ok(Self::default())
            }
        }
    }
}
