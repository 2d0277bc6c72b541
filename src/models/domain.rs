use serde::{Deserialize, Serialize};

/// Kind of help a tourist is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    ItineraryHelp,
    GuidedExperience,
}

impl ServiceType {
    /// Parse a service type, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "itinerary_help" => Some(ServiceType::ItineraryHelp),
            "guided_experience" => Some(ServiceType::GuidedExperience),
            _ => None,
        }
    }
}

/// Coarse reliability tier, precomputed outside the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReliabilityBadge {
    Bronze,
    Silver,
    Gold,
}

impl ReliabilityBadge {
    /// Parse a badge, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "bronze" => Some(ReliabilityBadge::Bronze),
            "silver" => Some(ReliabilityBadge::Silver),
            "gold" => Some(ReliabilityBadge::Gold),
            _ => None,
        }
    }

    /// Capitalized tier name used in match reasons
    pub fn label(&self) -> &'static str {
        match self {
            ReliabilityBadge::Bronze => "Bronze",
            ReliabilityBadge::Silver => "Silver",
            ReliabilityBadge::Gold => "Gold",
        }
    }
}

/// Trip window requested by the tourist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripDates {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// A tourist's request for a local guide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouristRequest {
    pub id: String,
    pub city: String,
    #[serde(rename = "preferredNationality", default)]
    pub preferred_nationality: Option<String>,
    #[serde(rename = "preferredLanguages", default)]
    pub preferred_languages: Vec<String>,
    #[serde(rename = "serviceType")]
    pub service_type: ServiceType,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub dates: TripDates,
    #[serde(rename = "preferredTime", default)]
    pub preferred_time: String,
}

/// Price bracket a student advertises
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Student guide eligible for matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCandidate {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub institute: Option<String>,
    #[serde(rename = "tripsHosted", default)]
    pub trips_hosted: u32,
    #[serde(rename = "averageRating", default)]
    pub average_rating: Option<f64>,
    #[serde(rename = "noShowCount", default)]
    pub no_show_count: u32,
    #[serde(rename = "reliabilityBadge", default)]
    pub reliability_badge: Option<ReliabilityBadge>,
    #[serde(rename = "acceptanceRate", default)]
    pub acceptance_rate: Option<f64>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "coverLetter", default)]
    pub cover_letter: Option<String>,
    #[serde(rename = "priceRange", default)]
    pub price_range: Option<PriceRange>,
}

impl StudentCandidate {
    /// Average rating if present and finite
    pub fn rating(&self) -> Option<f64> {
        self.average_rating.filter(|r| r.is_finite())
    }

    /// Acceptance rate if present and finite
    pub fn acceptance(&self) -> Option<f64> {
        self.acceptance_rate.filter(|r| r.is_finite())
    }
}

/// Ranked, masked match result returned to the tourist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(rename = "studentId")]
    pub student_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub nationality: Option<String>,
    pub languages: Vec<String>,
    pub institute: Option<String>,
    #[serde(rename = "tripsHosted")]
    pub trips_hosted: u32,
    #[serde(rename = "averageRating")]
    pub average_rating: Option<f64>,
    #[serde(rename = "reliabilityBadge")]
    pub reliability_badge: Option<ReliabilityBadge>,
    #[serde(rename = "priceRange")]
    pub price_range: Option<PriceRange>,
    pub score: f64,
    pub reasons: Vec<String>,
    pub tags: Vec<String>,
}

/// Which fallback tier produced the candidate pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolTier {
    Nationality,
    Language,
    City,
}

/// How a suggested price is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Hourly,
    Fixed,
}

/// Suggested price bracket for a city and service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSuggestion {
    pub min: u32,
    pub max: u32,
    pub currency: String,
    #[serde(rename = "type")]
    pub price_type: PriceType,
    pub note: String,
}

/// Point values for each scoring factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub nationality: f64,
    pub language: f64,
    pub interest: f64,
    pub rating_multiplier: f64,
    pub experience_high: f64,
    pub experience_mid: f64,
    pub experience_low: f64,
    pub perfect_attendance: f64,
    pub no_show_penalty: f64,
    pub gold_badge: f64,
    pub silver_badge: f64,
    pub bronze_badge: f64,
    pub acceptance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            nationality: 50.0,
            language: 20.0,
            interest: 10.0,
            rating_multiplier: 10.0,
            experience_high: 30.0,
            experience_mid: 15.0,
            experience_low: 5.0,
            perfect_attendance: 20.0,
            no_show_penalty: 30.0,
            gold_badge: 25.0,
            silver_badge: 15.0,
            bronze_badge: 5.0,
            acceptance: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_parse() {
        assert_eq!(ServiceType::parse(" Guided_Experience "), Some(ServiceType::GuidedExperience));
        assert_eq!(ServiceType::parse("itinerary_help"), Some(ServiceType::ItineraryHelp));
        assert_eq!(ServiceType::parse("boat_tour"), None);
    }

    #[test]
    fn test_candidate_deserializes_with_missing_optionals() {
        let candidate: StudentCandidate = serde_json::from_str(r#"{"id": "s1"}"#).unwrap();

        assert_eq!(candidate.trips_hosted, 0);
        assert!(candidate.rating().is_none());
        assert!(candidate.reliability_badge.is_none());
        assert!(candidate.languages.is_empty());
    }

    #[test]
    fn test_non_finite_rating_is_absent() {
        let mut candidate: StudentCandidate = serde_json::from_str(r#"{"id": "s1"}"#).unwrap();
        candidate.average_rating = Some(f64::NAN);
        candidate.acceptance_rate = Some(f64::INFINITY);

        assert!(candidate.rating().is_none());
        assert!(candidate.acceptance().is_none());
    }

    #[test]
    fn test_price_suggestion_type_field_name() {
        let suggestion = PriceSuggestion {
            min: 10,
            max: 20,
            currency: "EUR".to_string(),
            price_type: PriceType::Hourly,
            note: String::new(),
        };
        let json = serde_json::to_value(&suggestion).unwrap();

        assert_eq!(json["type"], "hourly");
    }
}
