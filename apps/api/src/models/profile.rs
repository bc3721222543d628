use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Self-reported appetite for investment-linked products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "Low",
            RiskTolerance::Medium => "Medium",
            RiskTolerance::High => "High",
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRiskTolerance(pub String);

impl fmt::Display for UnknownRiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown risk tolerance '{}'", self.0)
    }
}

impl std::error::Error for UnknownRiskTolerance {}

/// Case-insensitive: "high", "HIGH" and " High " all normalize to `High`.
impl FromStr for RiskTolerance {
    type Err = UnknownRiskTolerance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownRiskTolerance(s.to_string()))
    }
}

/// A validated financial profile. Construct through intake validation;
/// the engine trusts every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: u32,
    /// Whole currency units.
    pub annual_income: u64,
    pub dependent_count: u32,
    pub risk_tolerance: RiskTolerance,
}
