use serde::{Deserialize, Serialize};

/// Pay period the caller's income figure is stated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayPeriod {
    Monthly,
    Annually,
}

impl PayPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annually => "annually",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(Self::Monthly),
            "annually" => Some(Self::Annually),
            _ => None,
        }
    }
}
