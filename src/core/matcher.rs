use crate::models::{PoolTier, ScoredCandidate, ScoringWeights, StudentCandidate, TouristRequest};
use crate::core::{
    display::mask_name,
    filters::assemble_pool,
    scoring::calculate_match_score,
    tags::extract_tags,
};

/// Default number of guides shown to a tourist
pub const DEFAULT_MAX_RESULTS: usize = 4;

/// Nationality matches needed before the nationality tier is used
pub const DEFAULT_MIN_NATIONALITY_POOL: usize = 3;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
    pub pool_size: usize,
    pub pool_tier: PoolTier,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Tiered pool assembly (nationality, language, city)
/// 2. Additive scoring with match reasons
/// 3. Stable ranking and truncation
/// 4. Tag extraction and identity masking for the survivors
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    max_results: usize,
    min_nationality_pool: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, max_results: usize, min_nationality_pool: usize) -> Self {
        Self {
            weights,
            max_results,
            min_nationality_pool,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(
            ScoringWeights::default(),
            DEFAULT_MAX_RESULTS,
            DEFAULT_MIN_NATIONALITY_POOL,
        )
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank eligible students for a tourist request
    ///
    /// # Arguments
    /// * `request` - The tourist's request
    /// * `eligible` - Students eligible in the request's city, in storage order
    ///
    /// # Returns
    /// MatchResult with at most `max_results` candidates, best first. Equal
    /// scores keep their pool order.
    pub fn find_matches(
        &self,
        request: &TouristRequest,
        eligible: Vec<StudentCandidate>,
    ) -> MatchResult {
        let total_candidates = eligible.len();

        let (pool, pool_tier) = assemble_pool(request, eligible, self.min_nationality_pool);
        let pool_size = pool.len();

        let mut scored: Vec<(f64, Vec<String>, StudentCandidate)> = pool
            .into_iter()
            .map(|candidate| {
                let result = calculate_match_score(&candidate, request, &self.weights);
                (result.score, result.reasons, candidate)
            })
            .collect();

        // sort_by is stable, ties keep pool order
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.max_results);

        let matches = scored
            .into_iter()
            .map(|(score, reasons, candidate)| {
                let tags = extract_tags(&candidate);
                ScoredCandidate {
                    display_name: mask_name(candidate.name.as_deref()),
                    student_id: candidate.id,
                    nationality: candidate.nationality,
                    languages: candidate.languages,
                    institute: candidate.institute,
                    trips_hosted: candidate.trips_hosted,
                    average_rating: candidate.average_rating,
                    reliability_badge: candidate.reliability_badge,
                    price_range: candidate.price_range,
                    score,
                    reasons,
                    tags,
                }
            })
            .collect();

        MatchResult {
            matches,
            total_candidates,
            pool_size,
            pool_tier,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
