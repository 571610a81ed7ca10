//! Side-by-side assessment of the same income under both regimes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::assessment::compute_tax;
use crate::models::{TaxCalculationResult, TaxInput, TaxRegime};

/// Both regime outcomes for a single input, with the change between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    /// Assessment under the prior law.
    pub pre_2026: TaxCalculationResult,

    /// Assessment under the 2026 reform.
    pub reform_2026: TaxCalculationResult,

    /// Prior-law tax minus reform tax; negative when the reform charges more.
    pub savings: Decimal,

    /// Savings as a percentage of the prior-law tax; zero when no prior-law
    /// tax was due.
    pub savings_percentage: Decimal,
}

/// Assesses `input` under both regimes.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::{IncomeSource, PayPeriod, TaxInput, compare_regimes};
///
/// let input = TaxInput {
///     income: dec!(150_000),
///     period: PayPeriod::Monthly,
///     source: IncomeSource::Salary,
/// };
///
/// let comparison = compare_regimes(&input);
///
/// assert_eq!(comparison.savings, dec!(5_600));
/// ```
pub fn compare_regimes(input: &TaxInput) -> RegimeComparison {
    let pre_2026 = compute_tax(input, TaxRegime::Pre2026);
    let reform_2026 = compute_tax(input, TaxRegime::Reform2026);

    let savings = pre_2026.total_tax - reform_2026.total_tax;
    let savings_percentage = if pre_2026.total_tax > Decimal::ZERO {
        savings / pre_2026.total_tax * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    RegimeComparison {
        pre_2026,
        reform_2026,
        savings,
        savings_percentage,
    }
}
