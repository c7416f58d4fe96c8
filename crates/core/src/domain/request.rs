use serde::{Deserialize, Serialize};

/// How often the cleaning service recurs. Every multiplier and floor table
/// downstream is total over this enum; there is no default frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Monthly,
    #[serde(rename = "Bi-weekly")]
    BiWeekly,
    Weekly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::BiWeekly => write!(f, "Bi-weekly"),
            Self::Weekly => write!(f, "Weekly"),
        }
    }
}

/// Category-specific request fields, tagged per property category so a field
/// that is only meaningful for one category cannot be supplied for another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyDetails {
    Residential {
        /// Curbside bin count. Absent or zero is priced as a single bin.
        bin_count: Option<u32>,
    },
    Commercial {
        /// Free-text subtype from the booking form. The exact value
        /// `"Restaurant"` selects the restaurant rate class; anything else
        /// falls through to the generic commercial tables.
        subtype: Option<String>,
        /// Absent or zero is priced as a single dumpster. Review rules use
        /// the raw requested count, not the defaulted one.
        dumpster_count: Option<u32>,
        pad_cleaning: bool,
    },
    Hoa {
        housing_units: u32,
        bin_count: u32,
    },
}

impl PropertyDetails {
    /// Raw requested unit count as supplied by the caller, before any
    /// single-unit defaulting. Residential bins never trigger the custom
    /// scheduling rule, so they report zero here.
    pub fn requested_unit_count(&self) -> u32 {
        match self {
            Self::Residential { .. } => 0,
            Self::Commercial { dumpster_count, .. } => dumpster_count.unwrap_or(0),
            Self::Hoa { bin_count, .. } => *bin_count,
        }
    }

    pub fn has_pad_cleaning(&self) -> bool {
        matches!(self, Self::Commercial { pad_cleaning: true, .. })
    }

    pub fn is_restaurant(&self) -> bool {
        matches!(
            self,
            Self::Commercial { subtype: Some(subtype), .. } if subtype == "Restaurant"
        )
    }
}

/// One service request as submitted for pricing. Constructed by the caller,
/// handed to the engine once, and discarded; the engine never retains it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub property: PropertyDetails,
    pub frequency: Frequency,
    pub special_requirements: Option<String>,
}

impl QuoteRequest {
    /// Whether the free-text special requirements field carries anything
    /// after trimming. Presence alone is significant, content is not.
    pub fn has_special_requirements(&self) -> bool {
        self.special_requirements
            .as_deref()
            .map(|text| !text.trim().is_empty())
            .unwrap_or(false)
    }
}
