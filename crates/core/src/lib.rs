pub mod config;
pub mod domain;
pub mod quoting;
pub mod wire;

pub use domain::quote::{QuoteBreakdown, QuoteResult};
pub use domain::request::{Frequency, PropertyDetails, QuoteRequest};
pub use quoting::rates::{CommercialRateClass, RateBook};
pub use quoting::{calculate_quote, DeterministicQuotingEngine, QuotingEngine};
pub use wire::{PropertyCategory, QuoteParams};
