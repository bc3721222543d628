//! Recommendation engine — the canonical rule set.
//!
//! Pure and deterministic: `generate_recommendation` maps a validated profile
//! to a complete `Recommendation` with no I/O and no shared state, so any
//! number of requests may call it concurrently.
//!
//! Pipeline:
//! 1. coverage sizing   — additive income multiplier, capped at `COVERAGE_CAP`
//! 2. product selection — decision table, first match wins
//! 3. term refinement   — Term Life only, last applicable rule wins
//! 4. premium estimate  — per-thousand base rate, stacked age factors, product factor
//! 5. narrative         — fixed templates per product (see `narrative`)

use crate::models::profile::{RiskTolerance, UserProfile};
use crate::models::recommendation::{ConfidenceLevel, ProductType, Recommendation, TermLength};
use crate::recommendation::format::thousands_label;
use crate::recommendation::narrative::{build_explanation, product_narrative};

/// Upper bound on recommended coverage, in whole currency units.
pub const COVERAGE_CAP: u64 = 2_000_000;

const BASE_MULTIPLIER: u32 = 7;
const PER_DEPENDENT_BONUS: u32 = 2;
const LARGE_FAMILY_BONUS: u32 = 2;
const LARGE_FAMILY_THRESHOLD: u32 = 3;

/// Monthly rate per 1,000 of coverage before any adjustment.
const BASE_RATE_PER_THOUSAND: f64 = 0.80;

/// Applied cumulatively: every threshold the age exceeds multiplies in.
const AGE_PREMIUM_FACTORS: &[(u32, f64)] = &[(40, 1.5), (50, 2.0), (60, 3.0)];

const WHOLE_LIFE_THRESHOLD_INCOME: u64 = 100_000;
const WHOLE_LIFE_MAX_AGE: u32 = 45;
const UNIVERSAL_LIFE_THRESHOLD_INCOME: u64 = 75_000;

/// Product, term and confidence chosen by the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSelection {
    pub product_type: ProductType,
    pub term: TermLength,
    pub confidence: ConfidenceLevel,
}

/// Builds the full recommendation for a validated profile.
pub fn generate_recommendation(profile: &UserProfile) -> Recommendation {
    let multiplier = coverage_multiplier(profile.age, profile.dependent_count);
    let coverage_amount = size_coverage(profile.annual_income, multiplier);
    let coverage_label = thousands_label(coverage_amount);

    let selection = select_product(profile);
    let monthly_premium =
        estimate_monthly_premium(coverage_amount, profile.age, selection.product_type);

    let explanation = build_explanation(
        selection.product_type,
        profile.dependent_count,
        selection.term,
        &coverage_label,
        multiplier,
    );
    let narrative = product_narrative(selection.product_type);

    Recommendation {
        product_type: selection.product_type,
        coverage_amount,
        coverage_label,
        coverage_multiplier: multiplier,
        term: selection.term,
        monthly_premium,
        explanation,
        benefits: narrative.benefits.iter().map(|s| s.to_string()).collect(),
        considerations: narrative
            .considerations
            .iter()
            .map(|s| s.to_string())
            .collect(),
        confidence_level: selection.confidence,
    }
}

/// Times-annual-income multiplier. Never below 6.
pub fn coverage_multiplier(age: u32, dependent_count: u32) -> u32 {
    let mut multiplier = BASE_MULTIPLIER;
    if dependent_count > 0 {
        multiplier = multiplier.saturating_add(dependent_count.saturating_mul(PER_DEPENDENT_BONUS));
    }
    // Stacks with the per-dependent bonus.
    if dependent_count > LARGE_FAMILY_THRESHOLD {
        multiplier = multiplier.saturating_add(LARGE_FAMILY_BONUS);
    }
    if age < 30 {
        multiplier = multiplier.saturating_add(1);
    }
    if age > 50 {
        multiplier = multiplier.saturating_sub(1);
    }
    multiplier
}

pub fn size_coverage(annual_income: u64, multiplier: u32) -> u64 {
    annual_income
        .saturating_mul(u64::from(multiplier))
        .min(COVERAGE_CAP)
}

/// Decision table, evaluated top to bottom:
///
/// | risk   | income    | age  | product        | term     | confidence |
/// |--------|-----------|------|----------------|----------|------------|
/// | High   | > 100,000 | < 45 | Whole Life     | Lifetime | High       |
/// | Medium | > 75,000  | any  | Universal Life | Flexible | Medium     |
/// | other  |           |      | Term Life      | refined  | High       |
pub fn select_product(profile: &UserProfile) -> ProductSelection {
    match profile.risk_tolerance {
        RiskTolerance::High
            if profile.annual_income > WHOLE_LIFE_THRESHOLD_INCOME
                && profile.age < WHOLE_LIFE_MAX_AGE =>
        {
            ProductSelection {
                product_type: ProductType::WholeLife,
                term: TermLength::Lifetime,
                confidence: ConfidenceLevel::High,
            }
        }
        RiskTolerance::Medium if profile.annual_income > UNIVERSAL_LIFE_THRESHOLD_INCOME => {
            ProductSelection {
                product_type: ProductType::UniversalLife,
                term: TermLength::Flexible,
                confidence: ConfidenceLevel::Medium,
            }
        }
        _ => ProductSelection {
            product_type: ProductType::TermLife,
            term: refine_term(profile.age, profile.dependent_count),
            confidence: ConfidenceLevel::High,
        },
    }
}

/// Term Life duration. Later rules override earlier ones, so a 62-year-old
/// gets 10 years even though the over-50 rule also matched.
pub fn refine_term(age: u32, dependent_count: u32) -> TermLength {
    let mut years = 20;
    if age < 35 && dependent_count > 0 {
        years = 30;
    }
    if age > 50 {
        years = 15;
    }
    if age > 60 {
        years = 10;
    }
    TermLength::Years(years)
}

/// Estimated monthly premium in whole currency units.
///
/// Age factors compound: above 60 the base rate is multiplied by
/// 1.5 × 2 × 3 = 9 before the product factor.
pub fn estimate_monthly_premium(coverage_amount: u64, age: u32, product: ProductType) -> u64 {
    let mut premium = (coverage_amount as f64 / 1000.0) * BASE_RATE_PER_THOUSAND;

    for &(threshold, factor) in AGE_PREMIUM_FACTORS {
        if age > threshold {
            premium *= factor;
        }
    }

    premium *= product_premium_factor(product);

    premium.round().max(0.0) as u64
}

fn product_premium_factor(product: ProductType) -> f64 {
    match product {
        ProductType::WholeLife => 8.0,
        ProductType::UniversalLife => 4.0,
        ProductType::TermLife => 1.0,
    }
}
