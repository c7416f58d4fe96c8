//! Flat wire shapes for the checkout boundary.
//!
//! The booking platform submits one flat JSON object per quote attempt; this
//! module converts it into the tagged [`QuoteRequest`], dropping fields that
//! are not meaningful for the selected property category. The conversion is
//! infallible: category validity is enforced by serde at deserialization.

use serde::{Deserialize, Serialize};

use crate::domain::request::{Frequency, PropertyDetails, QuoteRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    Residential,
    Commercial,
    Hoa,
}

/// One quote attempt as the checkout handler receives it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    pub property_category: PropertyCategory,
    #[serde(default)]
    pub commercial_subtype: Option<String>,
    /// Dumpster count (commercial), bin count (residential, hoa).
    #[serde(default)]
    pub unit_count: Option<u32>,
    /// Number of HOA housing units; ignored for other categories.
    #[serde(default)]
    pub hoa_unit_count: Option<u32>,
    #[serde(default)]
    pub has_pad_cleaning: bool,
    pub frequency: Frequency,
    #[serde(default)]
    pub special_requirements: Option<String>,
}

impl From<QuoteParams> for QuoteRequest {
    fn from(params: QuoteParams) -> Self {
        let property = match params.property_category {
            PropertyCategory::Residential => {
                PropertyDetails::Residential { bin_count: params.unit_count }
            }
            PropertyCategory::Commercial => PropertyDetails::Commercial {
                subtype: params.commercial_subtype,
                dumpster_count: params.unit_count,
                pad_cleaning: params.has_pad_cleaning,
            },
            PropertyCategory::Hoa => PropertyDetails::Hoa {
                housing_units: params.hoa_unit_count.unwrap_or(0),
                bin_count: params.unit_count.unwrap_or(0),
            },
        };

        QuoteRequest {
            property,
            frequency: params.frequency,
            special_requirements: params.special_requirements,
        }
    }
}
