use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of a progressive tax schedule.
///
/// `upper_limit` is the cumulative annual income at which the band ends;
/// the top band of a schedule is unbounded (`None`). Income exactly at a
/// limit falls within that band, not the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}
