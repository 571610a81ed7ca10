use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Composition of the income being assessed.
///
/// Business-type income carries an estimate of the fraction received as
/// untracked cash, which the engine treats as invisible to the tax
/// authority. Mixed income additionally carries the share of the total
/// attributable to business activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeSource {
    /// Employment income, fully visible.
    Salary,
    /// Business income with an estimated cash fraction in [0, 100].
    Business { cash_percentage: Decimal },
    /// Salary and business income combined.
    ///
    /// `business_income_percentage` is the share of the total earned from
    /// business activity, in [0, 100]. Callers that cannot supply the split
    /// may leave it unset; the engine assumes an even split.
    Mixed {
        cash_percentage: Decimal,
        business_income_percentage: Option<Decimal>,
    },
}
