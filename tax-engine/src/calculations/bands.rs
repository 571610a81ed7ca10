//! Progressive band walk over an ordered bracket table.
//!
//! A [`BandSchedule`] charges taxable income marginally: each band taxes only
//! the slice of income that falls inside it. The walk visits bands in
//! ascending limit order and takes `min(remaining income, band width)` into
//! each one until the income is exhausted. Income exactly at a band limit is
//! charged entirely within that band.
//!
//! Bands the income never reaches are omitted from the breakdown rather than
//! emitted as zero rows. The one exception is zero (or negative) taxable
//! income, which short-circuits to a single explanatory zero row.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_engine::calculations::BandSchedule;
//!
//! let assessment = BandSchedule::reform_2026().assess(dec!(1_800_000));
//!
//! assert_eq!(assessment.total_tax, dec!(150_000));
//! assert_eq!(assessment.breakdown.len(), 2);
//! assert_eq!(assessment.breakdown[0].description, "First ₦800,000");
//! assert_eq!(assessment.breakdown[1].description, "Next ₦1,000,000");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::{group_thousands, max, round_half_up};
use crate::models::{TaxBracket, TaxBreakdownLine, TaxRegime};
use crate::tables::{PRE_2026_BRACKETS, REFORM_2026_BRACKETS};

/// Errors reported when a bracket table fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BandScheduleError {
    /// The table contains no brackets at all.
    #[error("no tax brackets provided")]
    EmptyTable,

    /// A bracket's limit does not exceed the previous bracket's limit.
    #[error("bracket limits must be strictly increasing, got {0}")]
    NonAscendingLimit(Decimal),

    /// An unbounded bracket appears before the final position.
    #[error("only the final bracket may be unbounded")]
    UnboundedBracketBeforeEnd,

    /// The final bracket carries a limit, leaving the table with a gap above it.
    #[error("the final bracket must be unbounded")]
    BoundedFinalBracket,

    /// A rate falls outside [0, 1].
    #[error("tax rate must be between 0 and 1, got {0}")]
    RateOutOfRange(Decimal),
}

/// Total tax and per-band rows produced by one walk of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandAssessment {
    /// Sum of the tax charged in every row, never negative.
    pub total_tax: Decimal,

    /// Rows in ascending band order; together they account for the whole
    /// taxable income.
    pub breakdown: Vec<TaxBreakdownLine>,
}

/// A validated progressive tax schedule over a borrowed bracket table.
#[derive(Debug, Clone)]
pub struct BandSchedule<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> BandSchedule<'a> {
    /// Creates a schedule from an arbitrary bracket table.
    ///
    /// # Errors
    ///
    /// Returns [`BandScheduleError`] if:
    /// - the table is empty
    /// - any bracket before the last is unbounded
    /// - the last bracket is bounded
    /// - limits are not strictly increasing from zero
    /// - any rate falls outside [0, 1]
    pub fn new(brackets: &'a [TaxBracket]) -> Result<Self, BandScheduleError> {
        let Some((last, leading)) = brackets.split_last() else {
            return Err(BandScheduleError::EmptyTable);
        };
        if last.upper_limit.is_some() {
            return Err(BandScheduleError::BoundedFinalBracket);
        }
        let mut previous = Decimal::ZERO;
        for bracket in leading {
            let Some(limit) = bracket.upper_limit else {
                return Err(BandScheduleError::UnboundedBracketBeforeEnd);
            };
            if limit <= previous {
                return Err(BandScheduleError::NonAscendingLimit(limit));
            }
            previous = limit;
        }
        for bracket in brackets {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(BandScheduleError::RateOutOfRange(bracket.rate));
            }
        }
        Ok(Self { brackets })
    }

    /// Walks the schedule, charging `taxable_income` band by band.
    pub fn assess(&self, taxable_income: Decimal) -> BandAssessment {
        if taxable_income <= Decimal::ZERO {
            return BandAssessment {
                total_tax: Decimal::ZERO,
                breakdown: vec![TaxBreakdownLine {
                    description: "Taxable Income".to_string(),
                    taxable: Decimal::ZERO,
                    rate: Decimal::ZERO,
                    tax: Decimal::ZERO,
                }],
            };
        }

        let mut total_tax = Decimal::ZERO;
        let mut remaining = taxable_income;
        let mut last_limit = Decimal::ZERO;
        let mut breakdown = Vec::new();

        for bracket in self.brackets {
            if remaining <= Decimal::ZERO {
                break;
            }

            let amount = match bracket.upper_limit {
                Some(limit) => remaining.min(limit - last_limit),
                None => remaining,
            };

            if amount > Decimal::ZERO {
                let tax = round_half_up(amount * bracket.rate);
                total_tax += tax;
                breakdown.push(TaxBreakdownLine {
                    description: band_label(last_limit, bracket.upper_limit, amount),
                    taxable: amount,
                    rate: bracket.rate,
                    tax,
                });
            }

            remaining -= amount;
            if let Some(limit) = bracket.upper_limit {
                last_limit = limit;
            }
        }

        BandAssessment {
            total_tax: max(total_tax, Decimal::ZERO),
            breakdown,
        }
    }
}

impl BandSchedule<'static> {
    /// Schedule over the 2026 reform bands.
    pub fn reform_2026() -> Self {
        Self {
            brackets: REFORM_2026_BRACKETS,
        }
    }

    /// Schedule over the prior law's graduated scale.
    pub fn pre_2026() -> Self {
        Self {
            brackets: PRE_2026_BRACKETS,
        }
    }

    /// Schedule over `regime`'s bracket table.
    pub fn for_regime(regime: TaxRegime) -> Self {
        Self {
            brackets: regime.brackets(),
        }
    }
}

/// Label carrying the grouped amount actually charged in the band.
fn band_label(last_limit: Decimal, upper_limit: Option<Decimal>, amount: Decimal) -> String {
    if last_limit == Decimal::ZERO {
        format!("First ₦{}", group_thousands(amount))
    } else if upper_limit.is_none() {
        format!("Remaining ₦{}", group_thousands(amount))
    } else {
        format!("Next ₦{}", group_thousands(amount))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bounded(limit: Decimal, rate: Decimal) -> TaxBracket {
        TaxBracket {
            upper_limit: Some(limit),
            rate,
        }
    }

    fn unbounded(rate: Decimal) -> TaxBracket {
        TaxBracket {
            upper_limit: None,
            rate,
        }
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn new_rejects_empty_table() {
        let result = BandSchedule::new(&[]);

        assert_eq!(result.unwrap_err(), BandScheduleError::EmptyTable);
    }

    #[test]
    fn new_rejects_bounded_final_bracket() {
        let brackets = [bounded(dec!(1000), dec!(0.10))];

        let result = BandSchedule::new(&brackets);

        assert_eq!(result.unwrap_err(), BandScheduleError::BoundedFinalBracket);
    }

    #[test]
    fn new_rejects_unbounded_bracket_before_end() {
        let brackets = [unbounded(dec!(0.10)), unbounded(dec!(0.20))];

        let result = BandSchedule::new(&brackets);

        assert_eq!(
            result.unwrap_err(),
            BandScheduleError::UnboundedBracketBeforeEnd
        );
    }

    #[test]
    fn new_rejects_non_ascending_limits() {
        let brackets = [
            bounded(dec!(1000), dec!(0.10)),
            bounded(dec!(1000), dec!(0.20)),
            unbounded(dec!(0.30)),
        ];

        let result = BandSchedule::new(&brackets);

        assert_eq!(
            result.unwrap_err(),
            BandScheduleError::NonAscendingLimit(dec!(1000))
        );
    }

    #[test]
    fn new_rejects_zero_first_limit() {
        let brackets = [bounded(dec!(0), dec!(0.10)), unbounded(dec!(0.20))];

        let result = BandSchedule::new(&brackets);

        assert_eq!(
            result.unwrap_err(),
            BandScheduleError::NonAscendingLimit(dec!(0))
        );
    }

    #[test]
    fn new_rejects_rate_above_one() {
        let brackets = [bounded(dec!(1000), dec!(1.10)), unbounded(dec!(0.20))];

        let result = BandSchedule::new(&brackets);

        assert_eq!(
            result.unwrap_err(),
            BandScheduleError::RateOutOfRange(dec!(1.10))
        );
    }

    #[test]
    fn new_rejects_negative_rate() {
        let brackets = [bounded(dec!(1000), dec!(0.10)), unbounded(dec!(-0.20))];

        let result = BandSchedule::new(&brackets);

        assert_eq!(
            result.unwrap_err(),
            BandScheduleError::RateOutOfRange(dec!(-0.20))
        );
    }

    #[test]
    fn new_accepts_valid_custom_table() {
        let brackets = [
            bounded(dec!(1000), dec!(0.10)),
            bounded(dec!(5000), dec!(0.20)),
            unbounded(dec!(0.30)),
        ];

        assert!(BandSchedule::new(&brackets).is_ok());
    }

    #[test]
    fn built_in_tables_pass_validation() {
        assert!(BandSchedule::new(REFORM_2026_BRACKETS).is_ok());
        assert!(BandSchedule::new(PRE_2026_BRACKETS).is_ok());
    }

    // =========================================================================
    // zero-income tests
    // =========================================================================

    #[test]
    fn assess_zero_income_yields_single_zero_row() {
        let assessment = BandSchedule::reform_2026().assess(Decimal::ZERO);

        assert_eq!(assessment.total_tax, Decimal::ZERO);
        assert_eq!(assessment.breakdown.len(), 1);
        assert_eq!(assessment.breakdown[0].description, "Taxable Income");
        assert_eq!(assessment.breakdown[0].taxable, Decimal::ZERO);
        assert_eq!(assessment.breakdown[0].tax, Decimal::ZERO);
    }

    #[test]
    fn assess_negative_income_yields_single_zero_row() {
        let assessment = BandSchedule::reform_2026().assess(dec!(-100));

        assert_eq!(assessment.total_tax, Decimal::ZERO);
        assert_eq!(assessment.breakdown.len(), 1);
    }

    // =========================================================================
    // band-boundary tests
    // =========================================================================

    #[test]
    fn assess_at_tax_free_limit_charges_nothing() {
        let assessment = BandSchedule::reform_2026().assess(dec!(800_000));

        assert_eq!(assessment.total_tax, Decimal::ZERO);
        assert_eq!(assessment.breakdown.len(), 1);
        assert_eq!(assessment.breakdown[0].description, "First ₦800,000");
        assert_eq!(assessment.breakdown[0].rate, Decimal::ZERO);
    }

    #[test]
    fn assess_one_naira_past_limit_charges_second_band() {
        let assessment = BandSchedule::reform_2026().assess(dec!(800_001));

        assert_eq!(assessment.total_tax, dec!(0.15));
        assert_eq!(assessment.breakdown.len(), 2);
        assert_eq!(assessment.breakdown[1].description, "Next ₦1");
        assert_eq!(assessment.breakdown[1].taxable, dec!(1));
        assert_eq!(assessment.breakdown[1].tax, dec!(0.15));
    }

    // =========================================================================
    // full-walk tests
    // =========================================================================

    #[test]
    fn assess_income_through_all_reform_bands() {
        let assessment = BandSchedule::reform_2026().assess(dec!(25_000_000));

        assert_eq!(assessment.total_tax, dec!(5_290_000));
        assert_eq!(assessment.breakdown.len(), 6);
        assert_eq!(assessment.breakdown[0].description, "First ₦800,000");
        assert_eq!(assessment.breakdown[1].description, "Next ₦2,200,000");
        assert_eq!(assessment.breakdown[1].tax, dec!(330_000));
        assert_eq!(assessment.breakdown[2].tax, dec!(360_000));
        assert_eq!(assessment.breakdown[3].tax, dec!(1_050_000));
        assert_eq!(assessment.breakdown[4].tax, dec!(2_300_000));
        assert_eq!(assessment.breakdown[5].description, "Remaining ₦5,000,000");
        assert_eq!(assessment.breakdown[5].tax, dec!(1_250_000));
    }

    #[test]
    fn assess_pre_2026_scale() {
        let assessment = BandSchedule::pre_2026().assess(dec!(1_000_000));

        // 300,000 @ 7% + 300,000 @ 11% + 400,000 @ 15%
        assert_eq!(assessment.total_tax, dec!(114_000));
        assert_eq!(assessment.breakdown.len(), 3);
        assert_eq!(assessment.breakdown[0].tax, dec!(21_000));
        assert_eq!(assessment.breakdown[1].tax, dec!(33_000));
        assert_eq!(assessment.breakdown[2].tax, dec!(60_000));
    }

    #[test]
    fn assess_custom_table() {
        let brackets = [bounded(dec!(1000), dec!(0.10)), unbounded(dec!(0.20))];
        let schedule = BandSchedule::new(&brackets).unwrap();

        let assessment = schedule.assess(dec!(1500));

        assert_eq!(assessment.total_tax, dec!(200));
        assert_eq!(assessment.breakdown[0].description, "First ₦1,000");
        assert_eq!(assessment.breakdown[1].description, "Remaining ₦500");
    }

    // =========================================================================
    // invariant tests
    // =========================================================================

    #[test]
    fn breakdown_sums_match_totals() {
        let samples = [
            dec!(1),
            dec!(500_000),
            dec!(800_000),
            dec!(800_001),
            dec!(1_800_000),
            dec!(4_800_000),
            dec!(9_999_999.99),
            dec!(25_000_000),
        ];

        for taxable in samples {
            let assessment = BandSchedule::reform_2026().assess(taxable);
            let tax_sum: Decimal = assessment.breakdown.iter().map(|line| line.tax).sum();
            let taxable_sum: Decimal = assessment.breakdown.iter().map(|line| line.taxable).sum();

            assert_eq!(tax_sum, assessment.total_tax);
            assert_eq!(taxable_sum, taxable);
        }
    }

    #[test]
    fn total_tax_is_monotonic_in_taxable_income() {
        let samples = [
            Decimal::ZERO,
            dec!(100_000),
            dec!(800_000),
            dec!(800_001),
            dec!(3_000_000),
            dec!(5_000_000.50),
            dec!(12_000_000),
            dec!(30_000_000),
        ];

        let mut previous = Decimal::ZERO;
        for taxable in samples {
            let total = BandSchedule::reform_2026().assess(taxable).total_tax;
            assert!(total >= previous, "tax decreased at {taxable}");
            previous = total;
        }
    }
}
