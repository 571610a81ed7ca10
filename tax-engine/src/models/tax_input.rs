use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{IncomeSource, PayPeriod};

/// Caller-supplied description of the income to assess.
///
/// Rejecting non-positive income is the caller's concern; the engine only
/// clamps defensively and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    /// Gross income, stated per `period`.
    pub income: Decimal,
    pub period: PayPeriod,
    pub source: IncomeSource,
}
