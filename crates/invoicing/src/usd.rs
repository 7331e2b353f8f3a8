//! US-dollar rendering for amounts held in minor units.

use theater_core::{BillingError, BillingResult};

/// Render `amount` minor units as US currency, e.g. `$1,730.00`.
///
/// `percent_factor` is the number of minor units per dollar and must be
/// positive. Factors other than 100 are rounded to whole cents half-to-even.
pub fn usd(amount: u64, percent_factor: u64) -> BillingResult<String> {
    if percent_factor == 0 {
        return Err(BillingError::invalid_schedule(
            "percent_factor must be positive",
        ));
    }
    let cents = to_cents(amount, percent_factor);
    let dollars = cents / 100;
    Ok(format!("${}.{:02}", group_thousands(dollars), cents % 100))
}

fn to_cents(amount: u64, percent_factor: u64) -> u128 {
    let scaled = u128::from(amount) * 100;
    let factor = u128::from(percent_factor);
    let (quotient, remainder) = (scaled / factor, scaled % factor);
    let twice = remainder * 2;
    if twice > factor || (twice == factor && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
