//! Legacy rule set — the earlier age-band table, kept as an explicitly labelled
//! alternate mode. Disabled unless `ENABLE_LEGACY_RULES=true`.
//!
//! Never mixed with the canonical engine: it has its own coverage formula
//! (multiplicative, rounded to the nearest 50,000, uncapped), its own product
//! table and no premium estimate.

use serde::{Deserialize, Serialize};

use crate::models::profile::{RiskTolerance, UserProfile};
use crate::models::recommendation::{ProductType, TermLength};
use crate::recommendation::format::currency_label;

const BASE_MULTIPLIER: f64 = 7.0;
const COVERAGE_ROUNDING: f64 = 50_000.0;

/// Label carried on every legacy response so callers can never confuse it
/// with the canonical output.
pub const RULE_SET_LABEL: &str = "legacy";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRecommendation {
    pub rule_set: String,
    pub product_type: ProductType,
    pub coverage_amount: u64,
    #[serde(rename = "termLabel")]
    pub term: TermLength,
    /// e.g. `"Term Life – $900,000 for 30 years"`
    pub headline: String,
    pub explanation: String,
}

pub fn generate_legacy_recommendation(profile: &UserProfile) -> LegacyRecommendation {
    let coverage_amount = legacy_coverage(profile.age, profile.annual_income, profile.dependent_count);
    let (product_type, term, explanation) = legacy_product(profile.age, profile.risk_tolerance);

    let headline = match term {
        TermLength::Years(n) => format!(
            "{product_type} – {} for {n} years",
            currency_label(coverage_amount)
        ),
        TermLength::Lifetime | TermLength::Flexible => {
            format!("{product_type} – {}", currency_label(coverage_amount))
        }
    };

    LegacyRecommendation {
        rule_set: RULE_SET_LABEL.to_string(),
        product_type,
        coverage_amount,
        term,
        headline,
        explanation: explanation.to_string(),
    }
}

/// Rounded to the nearest 50,000. Not capped.
pub fn legacy_coverage(age: u32, annual_income: u64, dependent_count: u32) -> u64 {
    let dependent_factor = (f64::from(dependent_count) * 0.5).max(1.0);
    let mut coverage = annual_income as f64 * BASE_MULTIPLIER * dependent_factor;

    if age < 30 {
        coverage *= 1.2;
    } else if age > 50 {
        coverage *= 0.8;
    }

    ((coverage / COVERAGE_ROUNDING).round() * COVERAGE_ROUNDING) as u64
}

/// Age bands: under 40, 40 to 54, 55 and over.
fn legacy_product(age: u32, risk: RiskTolerance) -> (ProductType, TermLength, &'static str) {
    match (age, risk) {
        (0..=39, RiskTolerance::High) => (
            ProductType::TermLife,
            TermLength::Years(30),
            "30-year term life: low cost and good for investing the difference.",
        ),
        (0..=39, RiskTolerance::Medium) => (
            ProductType::TermLife,
            TermLength::Years(20),
            "20-year term life: balances cost and duration.",
        ),
        (0..=39, RiskTolerance::Low) => (
            ProductType::WholeLife,
            TermLength::Lifetime,
            "Whole life: guaranteed coverage with cash value.",
        ),
        (40..=54, RiskTolerance::High) => (
            ProductType::TermLife,
            TermLength::Years(15),
            "15-year term: cost-effective for remaining earning years.",
        ),
        (40..=54, _) => (
            ProductType::UniversalLife,
            TermLength::Flexible,
            "Universal life: flexible and suited to your age and profile.",
        ),
        _ => (
            ProductType::WholeLife,
            TermLength::Lifetime,
            "Whole life: good for estate planning and guaranteed coverage.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: u32, income: u64, dependents: u32, risk: RiskTolerance) -> UserProfile {
        UserProfile {
            age,
            annual_income: income,
            dependent_count: dependents,
            risk_tolerance: risk,
        }
    }

    #[test]
    fn test_coverage_dependent_factor_floors_at_one() {
        // 0 or 1 or 2 dependents all use factor 1.0
        assert_eq!(legacy_coverage(35, 100_000, 0), 700_000);
        assert_eq!(legacy_coverage(35, 100_000, 2), 700_000);
        // 4 dependents → 2.0
        assert_eq!(legacy_coverage(35, 100_000, 4), 1_400_000);
    }

    #[test]
    fn test_coverage_age_adjustments() {
        // 700,000 × 1.2 = 840,000 → 850,000
        assert_eq!(legacy_coverage(29, 100_000, 0), 850_000);
        assert_eq!(legacy_coverage(30, 100_000, 0), 700_000);
        assert_eq!(legacy_coverage(50, 100_000, 0), 700_000);
        // 700,000 × 0.8 = 560,000 → 550,000
        assert_eq!(legacy_coverage(51, 100_000, 0), 550_000);
    }

    #[test]
    fn test_coverage_is_multiple_of_fifty_thousand_and_uncapped() {
        let coverage = legacy_coverage(35, 1_000_000, 20);
        assert_eq!(coverage % 50_000, 0);
        assert!(coverage > 2_000_000);
    }

    #[test]
    fn test_young_band() {
        let high = generate_legacy_recommendation(&profile(39, 80_000, 0, RiskTolerance::High));
        assert_eq!(high.product_type, ProductType::TermLife);
        assert_eq!(high.term, TermLength::Years(30));

        let medium = generate_legacy_recommendation(&profile(25, 80_000, 0, RiskTolerance::Medium));
        assert_eq!(medium.term, TermLength::Years(20));

        let low = generate_legacy_recommendation(&profile(25, 80_000, 0, RiskTolerance::Low));
        assert_eq!(low.product_type, ProductType::WholeLife);
        assert_eq!(low.term, TermLength::Lifetime);
    }

    #[test]
    fn test_middle_band_boundaries() {
        let at_40 = generate_legacy_recommendation(&profile(40, 80_000, 0, RiskTolerance::High));
        assert_eq!(at_40.term, TermLength::Years(15));

        let at_54 = generate_legacy_recommendation(&profile(54, 80_000, 0, RiskTolerance::Low));
        assert_eq!(at_54.product_type, ProductType::UniversalLife);
        assert_eq!(at_54.term, TermLength::Flexible);
    }

    #[test]
    fn test_old_band_is_whole_life_regardless_of_risk() {
        for risk in RiskTolerance::ALL {
            let rec = generate_legacy_recommendation(&profile(55, 80_000, 0, risk));
            assert_eq!(rec.product_type, ProductType::WholeLife);
            assert_eq!(rec.term, TermLength::Lifetime);
        }
    }

    #[test]
    fn test_headline_includes_years_for_fixed_term() {
        let rec = generate_legacy_recommendation(&profile(35, 100_000, 0, RiskTolerance::High));
        assert_eq!(rec.headline, "Term Life – $700,000 for 30 years");
        assert_eq!(rec.rule_set, "legacy");
    }

    #[test]
    fn test_headline_omits_years_for_permanent() {
        let rec = generate_legacy_recommendation(&profile(60, 100_000, 0, RiskTolerance::Low));
        // 700,000 × 0.8 = 560,000 → 550,000
        assert_eq!(rec.headline, "Whole Life – $550,000");
    }
}
