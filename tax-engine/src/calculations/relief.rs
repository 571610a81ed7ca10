//! Consolidated Relief Allowance of the pre-2026 law.
//!
//! Before the 2026 reform, gross annual income was reduced by a relief of
//! ₦200,000 (or 1% of gross, whichever is higher) plus 20% of gross, and
//! only the remainder entered the graduated scale.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::{max, round_half_up};

/// Fixed floor of the relief.
pub const FIXED_RELIEF: Decimal = dec!(200_000);

/// Gross-income alternative to the fixed floor.
pub const RELIEF_INCOME_RATE: Decimal = dec!(0.01);

/// Consolidated share of gross income granted on top of the floor.
pub const CONSOLIDATED_RATE: Decimal = dec!(0.20);

/// Relief subtracted from gross annual income before bracketing.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculations::relief::consolidated_relief;
///
/// // max(200,000, 1% of 1,000,000) + 20% of 1,000,000
/// assert_eq!(consolidated_relief(dec!(1_000_000)), dec!(400_000));
/// ```
pub fn consolidated_relief(annual_income: Decimal) -> Decimal {
    let floor = max(FIXED_RELIEF, annual_income * RELIEF_INCOME_RATE);
    round_half_up(floor + annual_income * CONSOLIDATED_RATE)
}

/// Gross annual income less relief, floored at zero.
pub fn relief_adjusted_taxable(annual_income: Decimal) -> Decimal {
    max(
        round_half_up(annual_income - consolidated_relief(annual_income)),
        Decimal::ZERO,
    )
}
