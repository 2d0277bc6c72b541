use crate::models::{PriceSuggestion, PriceType, ServiceType};

/// Markup applied to the base rate for in-person guiding
const GUIDED_MULTIPLIER: f64 = 1.2;

/// Base bracket for one city
#[derive(Debug, Clone, Copy)]
struct BaseRate {
    min: f64,
    max: f64,
    currency: &'static str,
}

/// Used when the city has no entry in `CITY_RATES`
const DEFAULT_RATE: BaseRate = BaseRate { min: 15.0, max: 30.0, currency: "USD" };

/// Base rates keyed by lowercase city name
const CITY_RATES: &[(&str, BaseRate)] = &[
    ("paris", BaseRate { min: 20.0, max: 40.0, currency: "EUR" }),
    ("london", BaseRate { min: 20.0, max: 40.0, currency: "GBP" }),
    ("rome", BaseRate { min: 18.0, max: 35.0, currency: "EUR" }),
    ("barcelona", BaseRate { min: 18.0, max: 35.0, currency: "EUR" }),
    ("berlin", BaseRate { min: 18.0, max: 32.0, currency: "EUR" }),
    ("amsterdam", BaseRate { min: 20.0, max: 38.0, currency: "EUR" }),
    ("new york", BaseRate { min: 25.0, max: 50.0, currency: "USD" }),
    ("tokyo", BaseRate { min: 2500.0, max: 5000.0, currency: "JPY" }),
    ("dubai", BaseRate { min: 70.0, max: 140.0, currency: "AED" }),
    ("singapore", BaseRate { min: 25.0, max: 45.0, currency: "SGD" }),
];

fn base_rate(city: &str) -> Option<BaseRate> {
    let key = city.trim().to_lowercase();
    CITY_RATES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, rate)| *rate)
}

/// Suggest a price bracket for a city and service type
///
/// City and service type are matched case-insensitively. Unknown cities
/// fall back to the default bracket and unknown service types are priced
/// as itinerary help.
pub fn suggest_price(city: &str, service_type: &str) -> PriceSuggestion {
    let (rate, known_city) = match base_rate(city) {
        Some(rate) => (rate, true),
        None => (DEFAULT_RATE, false),
    };

    let service = ServiceType::parse(service_type).unwrap_or(ServiceType::ItineraryHelp);

    let (min, max, price_type, mut note) = match service {
        ServiceType::GuidedExperience => (
            rate.min * GUIDED_MULTIPLIER,
            rate.max * GUIDED_MULTIPLIER,
            PriceType::Hourly,
            "Hourly rate for a guided experience with a local student".to_string(),
        ),
        ServiceType::ItineraryHelp => (
            rate.min,
            rate.max,
            PriceType::Fixed,
            "One-off fee for a personalised itinerary".to_string(),
        ),
    };

    if !known_city {
        note.push_str(" (default estimate, no local rates for this city yet)");
    }

    PriceSuggestion {
        min: min.round() as u32,
        max: max.round() as u32,
        currency: rate.currency.to_string(),
        price_type,
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guided_experience_applies_multiplier() {
        let suggestion = suggest_price("Paris", "guided_experience");

        assert_eq!(suggestion.min, 24);
        assert_eq!(suggestion.max, 48);
        assert_eq!(suggestion.currency, "EUR");
        assert_eq!(suggestion.price_type, PriceType::Hourly);
    }

    #[test]
    fn test_itinerary_help_uses_base_bracket() {
        let suggestion = suggest_price("rome", "itinerary_help");

        assert_eq!((suggestion.min, suggestion.max), (18, 35));
        assert_eq!(suggestion.price_type, PriceType::Fixed);
    }

    #[test]
    fn test_city_and_service_are_case_insensitive() {
        assert_eq!(
            suggest_price("  NEW YORK ", "Guided_Experience"),
            suggest_price("new york", "guided_experience")
        );
    }

    #[test]
    fn test_unknown_city_falls_back_to_default() {
        let suggestion = suggest_price("Atlantis", "itinerary_help");

        assert_eq!((suggestion.min, suggestion.max), (15, 30));
        assert_eq!(suggestion.currency, "USD");
        assert!(suggestion.note.contains("default estimate"));
    }

    #[test]
    fn test_unknown_service_priced_as_itinerary_help() {
        assert_eq!(suggest_price("Berlin", "boat tour"), suggest_price("Berlin", "itinerary_help"));
    }

    #[test]
    fn test_empty_inputs_are_total() {
        let suggestion = suggest_price("", "");

        assert_eq!(suggestion.currency, "USD");
        assert!(suggestion.min <= suggestion.max);
    }
}
