//! Intent categories the assistant can act on

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Customer-service topic resolved for a turn
///
/// `Unknown` is a defined outcome, not an error: it routes the caller to
/// a human agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Booking,
    FlightStatus,
    GeneralInformation,
    FrequentFlyer,
    BaggageInformation,
    Unknown,
}

impl IntentCategory {
    /// Actionable categories in declaration order (the keyword tie-break order)
    pub const ACTIONABLE: [IntentCategory; 5] = [
        IntentCategory::Booking,
        IntentCategory::FlightStatus,
        IntentCategory::GeneralInformation,
        IntentCategory::FrequentFlyer,
        IntentCategory::BaggageInformation,
    ];

    /// Snake-case identifier, as used in config files and classifier labels
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::FlightStatus => "flight_status",
            Self::GeneralInformation => "general_information",
            Self::FrequentFlyer => "frequent_flyer",
            Self::BaggageInformation => "baggage_information",
            Self::Unknown => "unknown",
        }
    }

    /// Wording used when the category is spoken back to the caller
    pub fn spoken_name(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::FlightStatus => "flight status",
            Self::GeneralInformation => "general information",
            Self::FrequentFlyer => "frequent flyer",
            Self::BaggageInformation => "baggage information",
            Self::Unknown => "something else",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no declared category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized intent category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for IntentCategory {
    type Err = UnknownCategory;

    /// Case-insensitive; accepts spaces or hyphens in place of underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "booking" => Ok(Self::Booking),
            "flight_status" => Ok(Self::FlightStatus),
            "general_information" => Ok(Self::GeneralInformation),
            "frequent_flyer" => Ok(Self::FrequentFlyer),
            "baggage_information" => Ok(Self::BaggageInformation),
            "unknown" => Ok(Self::Unknown),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
