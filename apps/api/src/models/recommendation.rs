use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    TermLife,
    WholeLife,
    UniversalLife,
}

impl ProductType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::TermLife => "Term Life",
            ProductType::WholeLife => "Whole Life",
            ProductType::UniversalLife => "Universal Life",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How long a policy stays in force. Serialized as its label:
/// `"20 years"`, `"Lifetime"` or `"Flexible"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TermLength {
    Years(u8),
    Lifetime,
    Flexible,
}

impl TermLength {
    pub fn years(&self) -> Option<u8> {
        match self {
            TermLength::Years(n) => Some(*n),
            TermLength::Lifetime | TermLength::Flexible => None,
        }
    }
}

impl fmt::Display for TermLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermLength::Years(n) => write!(f, "{n} years"),
            TermLength::Lifetime => f.write_str("Lifetime"),
            TermLength::Flexible => f.write_str("Flexible"),
        }
    }
}

impl From<TermLength> for String {
    fn from(term: TermLength) -> Self {
        term.to_string()
    }
}

impl TryFrom<String> for TermLength {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        match label.as_str() {
            "Lifetime" => Ok(TermLength::Lifetime),
            "Flexible" => Ok(TermLength::Flexible),
            other => other
                .strip_suffix(" years")
                .and_then(|n| n.parse::<u8>().ok())
                .map(TermLength::Years)
                .ok_or_else(|| format!("unrecognized term label '{label}'")),
        }
    }
}

/// Display emphasis only, not a statistical measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

/// Output of the canonical rule set. Built fresh per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub product_type: ProductType,
    /// Whole currency units, never above the coverage cap.
    pub coverage_amount: u64,
    /// e.g. `"$880K"`
    pub coverage_label: String,
    pub coverage_multiplier: u32,
    #[serde(rename = "termLabel")]
    pub term: TermLength,
    /// Whole currency units per month.
    pub monthly_premium: u64,
    pub explanation: String,
    pub benefits: Vec<String>,
    pub considerations: Vec<String>,
    pub confidence_level: ConfidenceLevel,
}
