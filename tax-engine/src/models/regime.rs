use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;
use crate::tables::{PRE_2026_BRACKETS, REFORM_2026_BRACKETS};

/// Tax law under which an assessment is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRegime {
    /// Progressive bands effective 2026.
    Reform2026,
    /// Prior law: consolidated relief followed by the graduated scale.
    Pre2026,
}

impl TaxRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reform2026 => "new",
            Self::Pre2026 => "old",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::Reform2026),
            "old" => Some(Self::Pre2026),
            _ => None,
        }
    }

    /// The bracket table this regime assesses against.
    pub fn brackets(&self) -> &'static [TaxBracket] {
        match self {
            Self::Reform2026 => REFORM_2026_BRACKETS,
            Self::Pre2026 => PRE_2026_BRACKETS,
        }
    }
}
