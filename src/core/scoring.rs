use crate::models::{ReliabilityBadge, ScoringWeights, StudentCandidate, TouristRequest};
use crate::core::filters::{matches_nationality, overlapping};

/// Rating at or above which a guide is called out as highly rated
const HIGH_RATING: f64 = 4.5;

/// Acceptance rate at or above which the acceptance bonus applies
const HIGH_ACCEPTANCE: f64 = 0.8;

/// Shared interests listed in the reason string
const MAX_INTERESTS_IN_REASON: usize = 3;

/// Score of one candidate with the reasons behind it
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Calculate an additive desirability score for a candidate
///
/// Every factor is evaluated independently:
/// - nationality match
/// - each preferred language spoken
/// - each shared interest
/// - average rating, scaled
/// - experience tier by trips hosted
/// - attendance record (bonus or penalty)
/// - reliability badge
/// - acceptance rate
///
/// The score has no floor and may be negative.
pub fn calculate_match_score(
    candidate: &StudentCandidate,
    request: &TouristRequest,
    weights: &ScoringWeights,
) -> MatchScore {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if matches_nationality(candidate, request) {
        score += weights.nationality;
        reasons.push("Matches your preferred nationality".to_string());
    }

    let languages = overlapping(&request.preferred_languages, &candidate.languages);
    if !languages.is_empty() {
        score += weights.language * languages.len() as f64;
        reasons.push(format!("Speaks {}", languages.join(", ")));
    }

    let interests = overlapping(&request.interests, &candidate.interests);
    if !interests.is_empty() {
        score += weights.interest * interests.len() as f64;
        let shown: Vec<&str> = interests.iter().take(MAX_INTERESTS_IN_REASON).copied().collect();
        reasons.push(format!("Shares interests: {}", shown.join(", ")));
    }

    if let Some(rating) = candidate.rating() {
        score += rating * weights.rating_multiplier;
        if rating >= HIGH_RATING {
            reasons.push("Highly rated guide".to_string());
        }
    }

    let (experience, experienced) = experience_points(candidate.trips_hosted, weights);
    score += experience;
    if experienced {
        reasons.push("Experienced guide".to_string());
    }

    if candidate.no_show_count == 0 && candidate.trips_hosted > 0 {
        score += weights.perfect_attendance;
        reasons.push("Perfect attendance record".to_string());
    } else if candidate.no_show_count > 2 {
        score -= weights.no_show_penalty;
    }

    if let Some(badge) = candidate.reliability_badge {
        score += badge_points(badge, weights);
        if matches!(badge, ReliabilityBadge::Gold | ReliabilityBadge::Silver) {
            reasons.push(format!("{} reliability badge", badge.label()));
        }
    }

    if candidate.acceptance().is_some_and(|rate| rate >= HIGH_ACCEPTANCE) {
        score += weights.acceptance;
    }

    MatchScore { score, reasons }
}

/// Experience points and whether the top tier was reached
#[inline]
fn experience_points(trips_hosted: u32, weights: &ScoringWeights) -> (f64, bool) {
    match trips_hosted {
        t if t > 10 => (weights.experience_high, true),
        t if t > 5 => (weights.experience_mid, false),
        t if t > 0 => (weights.experience_low, false),
        _ => (0.0, false),
    }
}

#[inline]
fn badge_points(badge: ReliabilityBadge, weights: &ScoringWeights) -> f64 {
    match badge {
        ReliabilityBadge::Gold => weights.gold_badge,
        ReliabilityBadge::Silver => weights.silver_badge,
        ReliabilityBadge::Bronze => weights.bronze_badge,
    }
}
