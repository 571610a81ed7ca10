//! Engine entry point: normalizes income to an annual figure, derives the
//! taxable base for the requested regime, walks the bands, and assembles the
//! result.
//!
//! The whole path is total: zero income produces a zero-tax result and
//! out-of-domain values (negative income, percentages outside [0, 100]) are
//! clamped with a warning rather than rejected.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::calculations::bands::BandSchedule;
use crate::calculations::common::{max, round_half_up};
use crate::calculations::relief::relief_adjusted_taxable;
use crate::models::{IncomeSource, PayPeriod, TaxCalculationResult, TaxInput, TaxRegime};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Business share of mixed income assumed when the caller supplies none.
const DEFAULT_BUSINESS_SHARE: Decimal = dec!(50);

/// Computes the tax liability for `input` under `regime`.
///
/// Pure and deterministic; defined for all income ≥ 0 and clamping outside
/// that domain.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::{IncomeSource, PayPeriod, TaxInput, TaxRegime, compute_tax};
///
/// let input = TaxInput {
///     income: dec!(150_000),
///     period: PayPeriod::Monthly,
///     source: IncomeSource::Salary,
/// };
///
/// let result = compute_tax(&input, TaxRegime::Reform2026);
///
/// assert_eq!(result.annual_income, dec!(1_800_000));
/// assert_eq!(result.total_tax, dec!(150_000));
/// assert_eq!(result.net_income, dec!(1_650_000));
/// ```
pub fn compute_tax(input: &TaxInput, regime: TaxRegime) -> TaxCalculationResult {
    let annual_income = annualize(input.income, input.period);
    let taxable_income = match regime {
        TaxRegime::Reform2026 => source_adjusted_taxable(annual_income, input.source),
        TaxRegime::Pre2026 => relief_adjusted_taxable(annual_income),
    };

    let assessment = BandSchedule::for_regime(regime).assess(taxable_income);

    let net_income = annual_income - assessment.total_tax;
    let effective_rate = if annual_income > Decimal::ZERO {
        assessment.total_tax / annual_income * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    TaxCalculationResult {
        total_tax: assessment.total_tax,
        annual_income,
        taxable_income,
        net_income,
        effective_rate,
        breakdown: assessment.breakdown,
    }
}

fn annualize(income: Decimal, period: PayPeriod) -> Decimal {
    if income < Decimal::ZERO {
        warn!(%income, "negative income clamped to zero");
        return Decimal::ZERO;
    }
    match period {
        PayPeriod::Monthly => income * MONTHS_PER_YEAR,
        PayPeriod::Annually => income,
    }
}

/// Taxable income under the 2026 reform.
///
/// Cash-heavy business income is assumed untracked: only the non-cash
/// fraction of the business portion enters the taxable base.
fn source_adjusted_taxable(annual_income: Decimal, source: IncomeSource) -> Decimal {
    let taxable = match source {
        IncomeSource::Salary => annual_income,
        IncomeSource::Business { cash_percentage } => {
            annual_income * visible_fraction(cash_percentage)
        }
        IncomeSource::Mixed {
            cash_percentage,
            business_income_percentage,
        } => {
            let business_share = business_income_percentage.unwrap_or_else(|| {
                warn!("mixed income without a business share, assuming an even split");
                DEFAULT_BUSINESS_SHARE
            });
            let business_portion =
                annual_income * clamp_percentage(business_share) / Decimal::ONE_HUNDRED;
            let salary_portion = annual_income - business_portion;
            salary_portion + business_portion * visible_fraction(cash_percentage)
        }
    };
    max(round_half_up(taxable), Decimal::ZERO)
}

/// Fraction of business income visible to the tax authority.
fn visible_fraction(cash_percentage: Decimal) -> Decimal {
    (Decimal::ONE_HUNDRED - clamp_percentage(cash_percentage)) / Decimal::ONE_HUNDRED
}

fn clamp_percentage(percentage: Decimal) -> Decimal {
    if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        warn!(%percentage, "percentage outside [0, 100] clamped");
    }
    percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}
