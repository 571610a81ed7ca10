//! Process-wide bracket tables for the supported tax regimes.
//!
//! Both tables are immutable static data: ordered, non-overlapping bands
//! covering all income from zero upward, with the final band unbounded.
//! Amounts are annual naira.

use rust_decimal_macros::dec;

use crate::models::TaxBracket;

/// Bands of the 2026 reform: the first ₦800,000 is tax free, the remainder
/// is charged at 15% up to 25%.
pub static REFORM_2026_BRACKETS: &[TaxBracket] = &[
    TaxBracket {
        upper_limit: Some(dec!(800_000)),
        rate: dec!(0.00),
    },
    TaxBracket {
        upper_limit: Some(dec!(3_000_000)),
        rate: dec!(0.15),
    },
    TaxBracket {
        upper_limit: Some(dec!(5_000_000)),
        rate: dec!(0.18),
    },
    TaxBracket {
        upper_limit: Some(dec!(10_000_000)),
        rate: dec!(0.21),
    },
    TaxBracket {
        upper_limit: Some(dec!(20_000_000)),
        rate: dec!(0.23),
    },
    TaxBracket {
        upper_limit: None,
        rate: dec!(0.25),
    },
];

/// Graduated scale of the prior law, applied after the consolidated relief
/// allowance: 7% on the first ₦300,000 rising to 24% above ₦3,200,000.
pub static PRE_2026_BRACKETS: &[TaxBracket] = &[
    TaxBracket {
        upper_limit: Some(dec!(300_000)),
        rate: dec!(0.07),
    },
    TaxBracket {
        upper_limit: Some(dec!(600_000)),
        rate: dec!(0.11),
    },
    TaxBracket {
        upper_limit: Some(dec!(1_100_000)),
        rate: dec!(0.15),
    },
    TaxBracket {
        upper_limit: Some(dec!(1_600_000)),
        rate: dec!(0.19),
    },
    TaxBracket {
        upper_limit: Some(dec!(3_200_000)),
        rate: dec!(0.21),
    },
    TaxBracket {
        upper_limit: None,
        rate: dec!(0.24),
    },
];
