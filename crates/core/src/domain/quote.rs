use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized components of a priced quote. Amounts are post-frequency-scaling
/// and `total` always equals the result's `final_price`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub unit_cleaning: Decimal,
    pub pad_cleaning: Decimal,
    pub frequency_multiplier: Decimal,
    pub total: Decimal,
}

/// The priced, flagged output of one engine invocation. Produced fresh per
/// request and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Pre-frequency unit-cleaning subtotal (a single residential bin is 55).
    pub base_price: Decimal,
    pub final_price: Decimal,
    pub low_estimate: Decimal,
    pub high_estimate: Decimal,
    /// True iff floor enforcement raised the price above the raw computed
    /// value; when set, `final_price` equals the enforced floor exactly.
    pub minimum_floor_applied: bool,
    pub requires_manual_review: bool,
    /// One entry per triggered review rule, in evaluation order.
    pub review_reasons: Vec<String>,
    pub floor_reasons: Vec<String>,
    pub breakdown: QuoteBreakdown,
}
