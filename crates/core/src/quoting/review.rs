use rust_decimal::Decimal;

use crate::domain::request::{Frequency, QuoteRequest};

/// Quotes above this monthly total go to a human before checkout.
const PRICE_REVIEW_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Requested unit counts at or above this need custom scheduling.
const UNIT_COUNT_REVIEW_THRESHOLD: u32 = 4;

/// Whether a quote is too complex or risky for automatic pricing, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewDecision {
    pub requires_manual_review: bool,
    /// One reason per triggered rule, in evaluation order.
    pub reasons: Vec<String>,
}

/// Evaluate every safeguard rule independently; a quote can accumulate
/// several reasons. The order of the checks is the order reasons appear in.
pub fn evaluate_review(request: &QuoteRequest, final_price: Decimal) -> ReviewDecision {
    let mut reasons = Vec::new();

    if final_price > PRICE_REVIEW_THRESHOLD {
        reasons.push("Total monthly price exceeds $500".to_string());
    }

    // Raw requested count, not the single-unit default used for pricing.
    let requested_units = request.property.requested_unit_count();
    if requested_units >= UNIT_COUNT_REVIEW_THRESHOLD {
        reasons.push(format!("Dumpster count ({requested_units}) requires custom scheduling"));
    }

    if request.property.is_restaurant() && request.frequency == Frequency::Weekly {
        reasons.push("Weekly restaurant service requires custom review".to_string());
    }

    if request.property.has_pad_cleaning() && request.frequency == Frequency::Weekly {
        reasons.push("Weekly dumpster pad cleaning requires custom scheduling".to_string());
    }

    if request.has_special_requirements() {
        reasons.push("Special requirements need custom review".to_string());
    }

    ReviewDecision { requires_manual_review: !reasons.is_empty(), reasons }
}
