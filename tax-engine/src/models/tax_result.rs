use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// One row of the per-band tax breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdownLine {
    /// Band label, e.g. "First ₦800,000" or "Remaining ₦1,200,000".
    pub description: String,

    /// Taxable income falling inside this band.
    pub taxable: Decimal,

    /// Marginal rate applied to the band, as a fraction in [0, 1].
    pub rate: Decimal,

    /// Tax charged on this band.
    pub tax: Decimal,
}

/// Assembled outcome of a tax assessment.
///
/// `total_tax` always equals the sum of the breakdown rows, and the rows
/// together account for the whole taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// Total annual tax across all bands.
    pub total_tax: Decimal,

    /// Gross income annualized from the caller's pay period.
    pub annual_income: Decimal,

    /// Income actually subjected to the bands, after the source/cash
    /// adjustment (2026 reform) or relief subtraction (prior law).
    pub taxable_income: Decimal,

    /// Annual income net of total tax.
    pub net_income: Decimal,

    /// Total tax as a percentage of gross annual income; zero when there is
    /// no income.
    pub effective_rate: Decimal,

    /// Per-band rows in ascending band order.
    pub breakdown: Vec<TaxBreakdownLine>,
}

impl TaxCalculationResult {
    /// Average monthly take-home pay.
    pub fn monthly_net_income(&self) -> Decimal {
        round_half_up(self.net_income / dec!(12))
    }

    /// Highest marginal rate among the bands the income actually reached.
    pub fn top_marginal_rate(&self) -> Decimal {
        self.breakdown
            .iter()
            .map(|line| line.rate)
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}
