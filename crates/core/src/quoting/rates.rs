use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::request::{Frequency, PropertyDetails};

/// Which commercial rate tables apply. Anything that is not exactly
/// `"Restaurant"` on the wire is generic commercial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommercialRateClass {
    Generic,
    Restaurant,
}

impl CommercialRateClass {
    /// Rate class for a property, `None` for non-commercial categories.
    pub fn of(property: &PropertyDetails) -> Option<Self> {
        match property {
            PropertyDetails::Commercial { .. } => Some(if property.is_restaurant() {
                Self::Restaurant
            } else {
                Self::Generic
            }),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Generic => "Commercial",
            Self::Restaurant => "Restaurant",
        }
    }
}

/// One value per service frequency. Used both for multipliers and for the
/// monthly-equivalent price floors, so lookups stay total over `Frequency`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencySchedule {
    pub monthly: Decimal,
    pub bi_weekly: Decimal,
    pub weekly: Decimal,
}

impl FrequencySchedule {
    pub fn get(&self, frequency: Frequency) -> Decimal {
        match frequency {
            Frequency::Monthly => self.monthly,
            Frequency::BiWeekly => self.bi_weekly,
            Frequency::Weekly => self.weekly,
        }
    }
}

/// Base price for the first unit plus a surcharge for each additional one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRates {
    pub base: Decimal,
    pub per_additional_unit: Decimal,
}

/// HOA service is priced additively per housing unit and per bin, with no
/// base price and no floor schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoaRates {
    pub per_housing_unit: Decimal,
    pub per_bin: Decimal,
}

/// Process-wide constant rate configuration. Constructed once at startup and
/// treated as immutable; if the surrounding system ever hot-reloads rates it
/// must swap a whole book atomically, never mutate entries in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBook {
    pub multipliers: FrequencySchedule,
    pub commercial: UnitRates,
    pub restaurant: UnitRates,
    pub residential: UnitRates,
    pub hoa: HoaRates,
    /// Flat dumpster-pad add-on, applied before frequency scaling.
    pub pad_cleaning_addon: Decimal,
    /// Additional floor whenever pad cleaning is requested, regardless of
    /// rate class or frequency.
    pub pad_cleaning_floor: Decimal,
    pub commercial_floors: FrequencySchedule,
    pub restaurant_floors: FrequencySchedule,
}

impl Default for RateBook {
    fn default() -> Self {
        Self {
            multipliers: FrequencySchedule {
                monthly: Decimal::ONE,
                bi_weekly: Decimal::new(18, 1),
                weekly: Decimal::new(32, 1),
            },
            commercial: UnitRates {
                base: Decimal::new(95, 0),
                per_additional_unit: Decimal::new(15, 0),
            },
            restaurant: UnitRates {
                base: Decimal::new(120, 0),
                per_additional_unit: Decimal::new(20, 0),
            },
            residential: UnitRates {
                base: Decimal::new(55, 0),
                per_additional_unit: Decimal::new(10, 0),
            },
            hoa: HoaRates {
                per_housing_unit: Decimal::new(25, 0),
                per_bin: Decimal::new(8, 0),
            },
            pad_cleaning_addon: Decimal::new(75, 0),
            pad_cleaning_floor: Decimal::new(150, 0),
            commercial_floors: FrequencySchedule {
                monthly: Decimal::new(95, 0),
                bi_weekly: Decimal::new(180, 0),
                weekly: Decimal::new(300, 0),
            },
            restaurant_floors: FrequencySchedule {
                monthly: Decimal::new(120, 0),
                bi_weekly: Decimal::new(250, 0),
                weekly: Decimal::new(350, 0),
            },
        }
    }
}

impl RateBook {
    pub fn multiplier(&self, frequency: Frequency) -> Decimal {
        self.multipliers.get(frequency)
    }

    pub fn commercial_unit_rates(&self, class: CommercialRateClass) -> UnitRates {
        match class {
            CommercialRateClass::Generic => self.commercial,
            CommercialRateClass::Restaurant => self.restaurant,
        }
    }

    /// Monthly-equivalent floor for a commercial rate class at a frequency.
    pub fn commercial_floor(&self, class: CommercialRateClass, frequency: Frequency) -> Decimal {
        match class {
            CommercialRateClass::Generic => self.commercial_floors.get(frequency),
            CommercialRateClass::Restaurant => self.restaurant_floors.get(frequency),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::request::Frequency;

    use super::{CommercialRateClass, RateBook};

    #[test]
    fn multiplier_table_matches_published_rates() {
        let rates = RateBook::default();
        assert_eq!(rates.multiplier(Frequency::Monthly), Decimal::ONE);
        assert_eq!(rates.multiplier(Frequency::BiWeekly), Decimal::new(18, 1));
        assert_eq!(rates.multiplier(Frequency::Weekly), Decimal::new(32, 1));
    }

    #[test]
    fn restaurant_floors_sit_above_generic_floors() {
        let rates = RateBook::default();
        for frequency in [Frequency::Monthly, Frequency::BiWeekly, Frequency::Weekly] {
            assert!(
                rates.commercial_floor(CommercialRateClass::Restaurant, frequency)
                    > rates.commercial_floor(CommercialRateClass::Generic, frequency),
                "restaurant floor should exceed generic floor for {frequency}"
            );
        }
    }
}
