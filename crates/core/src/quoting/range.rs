use rust_decimal::Decimal;

use crate::domain::request::{PropertyDetails, QuoteRequest};

use super::rates::{CommercialRateClass, RateBook};

const LOW_FACTOR: Decimal = Decimal::from_parts(85, 0, 0, false, 2);
const HIGH_FACTOR: Decimal = Decimal::from_parts(115, 0, 0, false, 2);

// Known residential price band; fixed absolute bounds, not derived from the
// computed price.
const RESIDENTIAL_LOW: Decimal = Decimal::from_parts(55, 0, 0, false, 0);
const RESIDENTIAL_HIGH: Decimal = Decimal::from_parts(85, 0, 0, false, 0);

/// Customer-facing estimate band around the final price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EstimateBand {
    pub low: Decimal,
    pub high: Decimal,
}

/// Derive the quoted range: 85%..115% of the final price, then widen or
/// narrow per category, then restore `low <= high` if a clamp crossed them.
pub fn derive_estimate_band(
    rates: &RateBook,
    request: &QuoteRequest,
    final_price: Decimal,
) -> EstimateBand {
    let mut low = (final_price * LOW_FACTOR).floor();
    let mut high = (final_price * HIGH_FACTOR).ceil();

    match &request.property {
        PropertyDetails::Residential { .. } => {
            low = low.max(RESIDENTIAL_LOW);
            high = high.min(RESIDENTIAL_HIGH);
        }
        PropertyDetails::Commercial { .. } => {
            // The low end never dips under the floor that governed pricing:
            // the pad floor when pad cleaning was requested, otherwise the
            // rate-class/frequency floor.
            let class = CommercialRateClass::of(&request.property)
                .unwrap_or(CommercialRateClass::Generic);
            let clamp = if request.property.has_pad_cleaning() {
                rates.pad_cleaning_floor
            } else {
                rates.commercial_floor(class, request.frequency)
            };
            low = low.max(clamp);
        }
        PropertyDetails::Hoa { .. } => {}
    }

    if low > high {
        std::mem::swap(&mut low, &mut high);
    }

    EstimateBand { low, high }
}
