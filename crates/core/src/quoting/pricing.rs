use rust_decimal::Decimal;

use crate::domain::request::{PropertyDetails, QuoteRequest};

use super::rates::{CommercialRateClass, RateBook, UnitRates};

/// Output of the pricing stages: base-cost lookup, pad add-on, frequency
/// scaling, and minimum-floor enforcement. Review flags and the estimate
/// band are derived separately from this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingOutcome {
    /// Pre-frequency unit-cleaning subtotal, before the pad add-on.
    pub base_price: Decimal,
    /// Unit-cleaning component after frequency scaling.
    pub unit_cleaning: Decimal,
    /// Pad-cleaning component after frequency scaling.
    pub pad_cleaning: Decimal,
    pub frequency_multiplier: Decimal,
    pub final_price: Decimal,
    pub minimum_floor_applied: bool,
    pub floor_reasons: Vec<String>,
}

/// Price a request against the rate book. Total over the input domain; an
/// unrecognized commercial subtype prices off the generic tables.
pub fn price_request(rates: &RateBook, request: &QuoteRequest) -> PricingOutcome {
    let multiplier = rates.multiplier(request.frequency);

    let (unit_subtotal, pad_subtotal) = match &request.property {
        PropertyDetails::Residential { bin_count } => {
            (first_plus_additional(rates.residential, bin_count.unwrap_or(1)), Decimal::ZERO)
        }
        PropertyDetails::Commercial { dumpster_count, pad_cleaning, .. } => {
            let class = CommercialRateClass::of(&request.property)
                .unwrap_or(CommercialRateClass::Generic);
            let unit =
                first_plus_additional(rates.commercial_unit_rates(class), dumpster_count.unwrap_or(1));
            let pad = if *pad_cleaning { rates.pad_cleaning_addon } else { Decimal::ZERO };
            (unit, pad)
        }
        PropertyDetails::Hoa { housing_units, bin_count } => {
            let subtotal = rates.hoa.per_housing_unit * Decimal::from(*housing_units)
                + rates.hoa.per_bin * Decimal::from(*bin_count);
            (subtotal, Decimal::ZERO)
        }
    };

    let unit_cleaning = unit_subtotal * multiplier;
    let pad_cleaning = pad_subtotal * multiplier;
    let scaled_total = unit_cleaning + pad_cleaning;

    let mut final_price = scaled_total;
    let mut minimum_floor_applied = false;
    let mut floor_reasons = Vec::new();

    // Floors only ever raise commercial quotes; residential and HOA prices
    // stand as computed.
    if let Some(class) = CommercialRateClass::of(&request.property) {
        let schedule_floor = rates.commercial_floor(class, request.frequency);
        let pad_requested = request.property.has_pad_cleaning();
        let binding_floor = if pad_requested {
            schedule_floor.max(rates.pad_cleaning_floor)
        } else {
            schedule_floor
        };

        if scaled_total < binding_floor {
            final_price = binding_floor;
            minimum_floor_applied = true;
            if pad_requested && rates.pad_cleaning_floor >= schedule_floor {
                floor_reasons.push(format!(
                    "Dumpster pad cleaning carries a ${} minimum",
                    rates.pad_cleaning_floor
                ));
            } else {
                floor_reasons.push(format!(
                    "Minimum for {} {} service is ${binding_floor}",
                    class.label(),
                    request.frequency
                ));
            }
        }
    }

    PricingOutcome {
        base_price: unit_subtotal,
        unit_cleaning,
        pad_cleaning,
        frequency_multiplier: multiplier,
        final_price,
        minimum_floor_applied,
        floor_reasons,
    }
}

/// Base price for the first unit, surcharge for each additional one. A zero
/// count is priced as a single unit.
fn first_plus_additional(table: UnitRates, requested: u32) -> Decimal {
    let units = requested.max(1);
    table.base + table.per_additional_unit * Decimal::from(units - 1)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::request::{Frequency, PropertyDetails, QuoteRequest};
    use crate::quoting::rates::RateBook;

    use super::price_request;

    fn commercial(subtype: Option<&str>, dumpsters: Option<u32>, pad: bool) -> PropertyDetails {
        PropertyDetails::Commercial {
            subtype: subtype.map(str::to_string),
            dumpster_count: dumpsters,
            pad_cleaning: pad,
        }
    }

    fn request(property: PropertyDetails, frequency: Frequency) -> QuoteRequest {
        QuoteRequest { property, frequency, special_requirements: None }
    }

    #[test]
    fn additional_units_scale_linearly() {
        let rates = RateBook::default();
        for units in 1..=6u32 {
            let generic = price_request(
                &rates,
                &request(commercial(Some("Office Building"), Some(units), false), Frequency::Monthly),
            );
            assert_eq!(generic.base_price, Decimal::from(95 + 15 * (units - 1)));

            let restaurant = price_request(
                &rates,
                &request(commercial(Some("Restaurant"), Some(units), false), Frequency::Monthly),
            );
            assert_eq!(restaurant.base_price, Decimal::from(120 + 20 * (units - 1)));
        }
    }

    #[test]
    fn absent_and_zero_counts_price_as_one_unit() {
        let rates = RateBook::default();
        let absent =
            price_request(&rates, &request(commercial(None, None, false), Frequency::Monthly));
        let zero =
            price_request(&rates, &request(commercial(None, Some(0), false), Frequency::Monthly));
        let one =
            price_request(&rates, &request(commercial(None, Some(1), false), Frequency::Monthly));
        assert_eq!(absent.final_price, one.final_price);
        assert_eq!(zero.final_price, one.final_price);
        assert_eq!(one.final_price, Decimal::from(95));
    }

    #[test]
    fn unrecognized_subtype_prices_off_generic_tables() {
        let rates = RateBook::default();
        let outcome = price_request(
            &rates,
            &request(commercial(Some("Warehouse"), Some(1), false), Frequency::Monthly),
        );
        assert_eq!(outcome.final_price, Decimal::from(95));
    }

    #[test]
    fn frequency_scales_every_component_including_pad() {
        let rates = RateBook::default();
        let outcome = price_request(
            &rates,
            &request(commercial(None, Some(2), true), Frequency::BiWeekly),
        );
        // (95 + 15 + 75) * 1.8
        assert_eq!(outcome.unit_cleaning, Decimal::new(1980, 1));
        assert_eq!(outcome.pad_cleaning, Decimal::new(1350, 1));
        assert_eq!(outcome.final_price, Decimal::from(333));
        assert!(!outcome.minimum_floor_applied);
    }

    #[test]
    fn schedule_floor_raises_price_and_records_reason() {
        let rates = RateBook::default();
        // 95 * 1.8 = 171, below the 180 bi-weekly commercial floor.
        let outcome =
            price_request(&rates, &request(commercial(None, Some(1), false), Frequency::BiWeekly));
        assert_eq!(outcome.final_price, Decimal::from(180));
        assert!(outcome.minimum_floor_applied);
        assert_eq!(outcome.floor_reasons, vec!["Minimum for Commercial Bi-weekly service is $180"]);
    }

    #[test]
    fn pad_floor_binds_when_it_exceeds_the_schedule_floor() {
        let rates = RateBook::default();
        // A zero-ish monthly pad job: (95 + 75) * 1.0 = 170 sits above 150,
        // so no raise; the documented 170 scenario.
        let above =
            price_request(&rates, &request(commercial(None, Some(1), true), Frequency::Monthly));
        assert_eq!(above.final_price, Decimal::from(170));
        assert!(!above.minimum_floor_applied);
        assert!(above.floor_reasons.is_empty());
    }

    #[test]
    fn restaurant_floors_hold_for_every_frequency() {
        let rates = RateBook::default();
        for (frequency, floor) in [
            (Frequency::Monthly, 120),
            (Frequency::BiWeekly, 250),
            (Frequency::Weekly, 350),
        ] {
            let outcome = price_request(
                &rates,
                &request(commercial(Some("Restaurant"), Some(1), false), frequency),
            );
            assert!(
                outcome.final_price >= Decimal::from(floor),
                "restaurant {frequency} quote fell below its floor"
            );
        }
    }

    #[test]
    fn hoa_is_priced_additively_and_never_raised() {
        let rates = RateBook::default();
        let outcome = price_request(
            &rates,
            &request(PropertyDetails::Hoa { housing_units: 12, bin_count: 3 }, Frequency::Monthly),
        );
        // 12 * 25 + 3 * 8
        assert_eq!(outcome.final_price, Decimal::from(324));
        assert!(!outcome.minimum_floor_applied);

        let empty = price_request(
            &rates,
            &request(PropertyDetails::Hoa { housing_units: 0, bin_count: 0 }, Frequency::Weekly),
        );
        assert_eq!(empty.final_price, Decimal::ZERO);
        assert!(!empty.minimum_floor_applied);
    }

    #[test]
    fn residential_prices_stand_without_floor_enforcement() {
        let rates = RateBook::default();
        let outcome = price_request(
            &rates,
            &request(PropertyDetails::Residential { bin_count: Some(2) }, Frequency::Monthly),
        );
        assert_eq!(outcome.base_price, Decimal::from(65));
        assert_eq!(outcome.final_price, Decimal::from(65));
        assert!(!outcome.minimum_floor_applied);
        assert!(outcome.floor_reasons.is_empty());
    }
}
