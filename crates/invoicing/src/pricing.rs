//! Per-performance pricing.
//!
//! All arithmetic is checked integer arithmetic in cents.

use serde::{Deserialize, Serialize};

use theater_core::{BillingError, BillingResult, ValueObject};

use crate::invoice::Performance;
use crate::play::Play;
use crate::schedule::FeeSchedule;

/// Pricing rule selected by play type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingRule {
    Tragedy,
    Comedy,
}

/// Charge and credits for a single performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceCharge {
    /// Amount in smallest currency unit (cents).
    pub amount: u64,
    pub volume_credits: u64,
}

impl ValueObject for PerformanceCharge {}

fn mul(rate: u64, seats: u32, what: &str) -> BillingResult<u64> {
    rate.checked_mul(u64::from(seats))
        .ok_or_else(|| BillingError::overflow(what.to_owned()))
}

fn add(lhs: u64, rhs: u64, what: &str) -> BillingResult<u64> {
    lhs.checked_add(rhs)
        .ok_or_else(|| BillingError::overflow(what.to_owned()))
}

impl PricingRule {
    /// Charge in cents for `audience` seats.
    pub fn amount(self, audience: u32, schedule: &FeeSchedule) -> BillingResult<u64> {
        match self {
            PricingRule::Tragedy => {
                let mut result = schedule.tragedy_base_amount;
                if audience > schedule.tragedy_audience_threshold {
                    // Overflow seats are counted from the credit threshold,
                    // not the tragedy threshold, so the increment can be
                    // negative when the tragedy threshold sits below it.
                    let extra_seats = i128::from(audience)
                        - i128::from(schedule.base_volume_credit_threshold);
                    let charge = i128::from(result)
                        + i128::from(schedule.tragedy_over_base_capacity_per_person) * extra_seats;
                    result = u64::try_from(charge).map_err(|_| {
                        if charge < 0 {
                            BillingError::invalid_schedule(format!(
                                "tragedy charge for {audience} seats is below zero"
                            ))
                        } else {
                            BillingError::overflow("tragedy charge")
                        }
                    })?;
                }
                Ok(result)
            }
            PricingRule::Comedy => {
                let mut result = schedule.comedy_base_amount;
                if audience > schedule.comedy_audience_threshold {
                    let extra = mul(
                        schedule.comedy_over_base_capacity_per_person,
                        audience - schedule.comedy_audience_threshold,
                        "comedy over-capacity charge",
                    )?;
                    let extra = add(
                        schedule.comedy_over_base_capacity_amount,
                        extra,
                        "comedy over-capacity charge",
                    )?;
                    result = add(result, extra, "comedy charge")?;
                }
                let per_audience = mul(
                    schedule.comedy_amount_per_audience,
                    audience,
                    "comedy per-audience charge",
                )?;
                add(result, per_audience, "comedy charge")
            }
        }
    }

    /// Volume credits earned for `audience` seats.
    pub fn volume_credits(self, audience: u32, schedule: &FeeSchedule) -> BillingResult<u64> {
        let base = u64::from(audience.saturating_sub(schedule.base_volume_credit_threshold));
        match self {
            PricingRule::Tragedy => Ok(base),
            PricingRule::Comedy => {
                let bonus = audience
                    .checked_div(schedule.comedy_extra_volume_factor)
                    .ok_or_else(|| {
                        BillingError::invalid_schedule("comedy_extra_volume_factor must be positive")
                    })?;
                Ok(base + u64::from(bonus))
            }
        }
    }
}

/// Price one performance of `play`.
///
/// Fails with `UnknownPlayType` when the play's type has no pricing rule.
pub fn quote(
    play: &Play,
    performance: &Performance,
    schedule: &FeeSchedule,
) -> BillingResult<PerformanceCharge> {
    let rule = play.play_type().pricing()?;
    let audience = performance.audience();
    Ok(PerformanceCharge {
        amount: rule.amount(audience, schedule)?,
        volume_credits: rule.volume_credits(audience, schedule)?,
    })
}
