//! Product narratives — explanation templates and the fixed benefit/consideration
//! lists shown next to each product.
//!
//! Lists depend on the product only, never on profile values.

use crate::models::recommendation::{ProductType, TermLength};

/// Ordered talking points for one product.
#[derive(Debug, Clone, Copy)]
pub struct ProductNarrative {
    pub benefits: &'static [&'static str; 4],
    pub considerations: &'static [&'static str; 4],
}

const TERM_LIFE_BENEFITS: [&str; 4] = [
    "Most affordable premium for maximum coverage",
    "Simple and straightforward coverage",
    "Ideal for temporary financial obligations",
    "Can often be converted to permanent insurance later",
];

const TERM_LIFE_CONSIDERATIONS: [&str; 4] = [
    "Coverage expires at the end of the term",
    "Premiums will increase significantly if renewed",
    "No cash value or investment component",
    "May become unaffordable or unavailable with age",
];

const WHOLE_LIFE_BENEFITS: [&str; 4] = [
    "Permanent coverage that never expires",
    "Builds cash value that you can borrow against",
    "Fixed premiums that never increase",
    "Potential dividends from mutual insurance companies",
];

const WHOLE_LIFE_CONSIDERATIONS: [&str; 4] = [
    "Much higher premiums than term insurance",
    "Lower returns compared to other investment options",
    "Complex policy structure and features",
    "Early surrender may result in losses",
];

const UNIVERSAL_LIFE_BENEFITS: [&str; 4] = [
    "Flexible premiums and death benefits",
    "Cash value growth potential",
    "Permanent coverage with investment options",
    "Transparency in fees and charges",
];

const UNIVERSAL_LIFE_CONSIDERATIONS: [&str; 4] = [
    "More expensive than term insurance",
    "Investment risk affects cash value",
    "Requires active management and monitoring",
    "Fees can be complex and reduce returns",
];

const WHOLE_LIFE_EXPLANATION: &str = "Given your higher income and risk tolerance, Whole Life \
Insurance provides both protection and wealth building opportunities. This permanent coverage \
includes a cash value component that grows over time, offering financial flexibility and \
potential tax advantages. While premiums are higher, the investment component aligns with your \
risk profile and long-term financial goals.";

const UNIVERSAL_LIFE_EXPLANATION: &str = "Universal Life Insurance offers a balance between \
protection and flexibility. With adjustable premiums and death benefits, this policy can adapt \
to your changing financial circumstances. The cash value component provides growth potential \
while maintaining the security your family needs.";

pub fn product_narrative(product: ProductType) -> ProductNarrative {
    match product {
        ProductType::TermLife => ProductNarrative {
            benefits: &TERM_LIFE_BENEFITS,
            considerations: &TERM_LIFE_CONSIDERATIONS,
        },
        ProductType::WholeLife => ProductNarrative {
            benefits: &WHOLE_LIFE_BENEFITS,
            considerations: &WHOLE_LIFE_CONSIDERATIONS,
        },
        ProductType::UniversalLife => ProductNarrative {
            benefits: &UNIVERSAL_LIFE_BENEFITS,
            considerations: &UNIVERSAL_LIFE_CONSIDERATIONS,
        },
    }
}

/// Rationale shown above the figures. Only the Term Life template is
/// personalized; the permanent products use fixed text.
pub fn build_explanation(
    product: ProductType,
    dependent_count: u32,
    term: TermLength,
    coverage_label: &str,
    multiplier: u32,
) -> String {
    match product {
        ProductType::TermLife => {
            let household = describe_household(dependent_count);
            let term_phrase = match term.years() {
                Some(n) => format!("{n}-year"),
                None => term.to_string(),
            };
            format!(
                "Based on your profile, Term Life Insurance offers the most cost-effective \
                 protection for your family. With {household}, a {term_phrase} term provides \
                 coverage during your most financially vulnerable years. The {coverage_label} \
                 coverage amount is calculated to replace {multiplier}x your annual income, \
                 ensuring your family can maintain their lifestyle and meet financial obligations."
            )
        }
        ProductType::WholeLife => WHOLE_LIFE_EXPLANATION.to_string(),
        ProductType::UniversalLife => UNIVERSAL_LIFE_EXPLANATION.to_string(),
    }
}

fn describe_household(dependent_count: u32) -> String {
    match dependent_count {
        0 => "your current situation".to_string(),
        1 => "1 dependent".to_string(),
        n => format!("{n} dependents"),
    }
}
