//! Intake validation — turns a loosely typed request body into a `UserProfile`.
//!
//! Browsers post whatever the form holds: numbers may arrive as strings, income
//! may carry a currency sign and thousands separators, and risk tolerance may
//! be in any case. Every failing field is reported, not just the first one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::profile::{RiskTolerance, UserProfile};

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;
pub const MAX_DEPENDENTS: i64 = 20;

const AGE_MESSAGE: &str = "Please enter a valid age between 18 and 100";
const INCOME_MESSAGE: &str = "Please enter a valid annual income";
const DEPENDENTS_MESSAGE: &str = "Please enter a valid number of dependents (0-20)";
const RISK_MISSING_MESSAGE: &str = "Please select your risk tolerance";
const RISK_INVALID_MESSAGE: &str = "Invalid risk tolerance";

/// Request body as received. `null` and absent fields are both treated as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    pub age: Option<Value>,
    #[serde(alias = "income")]
    pub annual_income: Option<Value>,
    #[serde(alias = "dependents")]
    pub dependent_count: Option<Value>,
    pub risk_tolerance: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Age,
    AnnualIncome,
    DependentCount,
    RiskTolerance,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Age => "age",
            ProfileField::AnnualIncome => "annualIncome",
            ProfileField::DependentCount => "dependentCount",
            ProfileField::RiskTolerance => "riskTolerance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ProfileField,
    pub message: String,
}

impl FieldError {
    fn new(field: ProfileField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validates every field and returns either a complete profile or all failures.
pub fn validate_profile(raw: &RawProfile) -> Result<UserProfile, Vec<FieldError>> {
    let mut errors = Vec::new();

    let age = raw
        .age
        .as_ref()
        .and_then(parse_whole_number)
        .filter(|n| (MIN_AGE..=MAX_AGE).contains(n))
        .and_then(|n| u32::try_from(n).ok());
    if age.is_none() {
        errors.push(FieldError::new(ProfileField::Age, AGE_MESSAGE));
    }

    let annual_income = raw.annual_income.as_ref().and_then(parse_income);
    if annual_income.is_none() {
        errors.push(FieldError::new(ProfileField::AnnualIncome, INCOME_MESSAGE));
    }

    let dependent_count = raw
        .dependent_count
        .as_ref()
        .and_then(parse_whole_number)
        .filter(|n| (0..=MAX_DEPENDENTS).contains(n))
        .and_then(|n| u32::try_from(n).ok());
    if dependent_count.is_none() {
        errors.push(FieldError::new(ProfileField::DependentCount, DEPENDENTS_MESSAGE));
    }

    let risk_tolerance = match parse_risk_tolerance(raw.risk_tolerance.as_ref()) {
        Ok(risk) => Some(risk),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (age, annual_income, dependent_count, risk_tolerance) {
        (Some(age), Some(annual_income), Some(dependent_count), Some(risk_tolerance))
            if errors.is_empty() =>
        {
            Ok(UserProfile {
                age,
                annual_income,
                dependent_count,
                risk_tolerance,
            })
        }
        _ => Err(errors),
    }
}

/// Integers only. Accepts `35`, `35.0` and `"35"`; rejects `"35.5"` and `"abc"`.
fn parse_whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Whole currency units. Strings may carry a leading `$`, separators
/// (`,` `_` and spaces) and a fractional part, which is truncated.
fn parse_income(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => parse_income_text(s),
        _ => None,
    }
}

fn parse_income_text(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = unsigned
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    whole.parse::<u64>().ok()
}

fn parse_risk_tolerance(value: Option<&Value>) -> Result<RiskTolerance, FieldError> {
    match value {
        None => Err(FieldError::new(ProfileField::RiskTolerance, RISK_MISSING_MESSAGE)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(FieldError::new(
            ProfileField::RiskTolerance,
            RISK_MISSING_MESSAGE,
        )),
        Some(Value::String(s)) => s
            .parse::<RiskTolerance>()
            .map_err(|_| FieldError::new(ProfileField::RiskTolerance, RISK_INVALID_MESSAGE)),
        Some(_) => Err(FieldError::new(
            ProfileField::RiskTolerance,
            RISK_INVALID_MESSAGE,
        )),
    }
}
