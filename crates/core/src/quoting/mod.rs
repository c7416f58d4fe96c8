pub mod pricing;
pub mod range;
pub mod rates;
pub mod review;

use crate::domain::quote::{QuoteBreakdown, QuoteResult};
use crate::domain::request::QuoteRequest;

use self::{
    pricing::price_request, range::derive_estimate_band, rates::RateBook, review::evaluate_review,
};

/// The pricing safeguard engine seam. Implementations must be pure: same
/// request in, same result out, no shared mutable state.
pub trait QuotingEngine: Send + Sync {
    fn quote(&self, request: &QuoteRequest) -> QuoteResult;
}

/// Rule-table-driven engine closing over an immutable rate book.
#[derive(Clone, Debug, Default)]
pub struct DeterministicQuotingEngine {
    rates: RateBook,
}

impl DeterministicQuotingEngine {
    pub fn new(rates: RateBook) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateBook {
        &self.rates
    }
}

impl QuotingEngine for DeterministicQuotingEngine {
    fn quote(&self, request: &QuoteRequest) -> QuoteResult {
        calculate_quote(&self.rates, request)
    }
}

/// Turn one service request into a priced, flagged, range-bounded quote.
/// Total over the declared input domain: no error conditions exist.
pub fn calculate_quote(rates: &RateBook, request: &QuoteRequest) -> QuoteResult {
    let priced = price_request(rates, request);
    let review = evaluate_review(request, priced.final_price);
    let band = derive_estimate_band(rates, request, priced.final_price);

    QuoteResult {
        base_price: priced.base_price,
        final_price: priced.final_price,
        low_estimate: band.low,
        high_estimate: band.high,
        minimum_floor_applied: priced.minimum_floor_applied,
        requires_manual_review: review.requires_manual_review,
        review_reasons: review.reasons,
        floor_reasons: priced.floor_reasons,
        breakdown: QuoteBreakdown {
            unit_cleaning: priced.unit_cleaning,
            pad_cleaning: priced.pad_cleaning,
            frequency_multiplier: priced.frequency_multiplier,
            total: priced.final_price,
        },
    }
}
