use crate::models::{PoolTier, StudentCandidate, TouristRequest};

/// Compare two free-text values, ignoring case and surrounding whitespace
#[inline]
pub fn same_text(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Items of `wanted` that also appear in `offered`, in `wanted` order
pub fn overlapping<'a>(wanted: &'a [String], offered: &[String]) -> Vec<&'a str> {
    let mut shared: Vec<&str> = Vec::new();
    for item in wanted {
        if item.trim().is_empty() || shared.iter().any(|s| same_text(s, item)) {
            continue;
        }
        if offered.iter().any(|o| same_text(o, item)) {
            shared.push(item.as_str());
        }
    }
    shared
}

/// True when the candidate's nationality equals the tourist's preferred one
#[inline]
pub fn matches_nationality(candidate: &StudentCandidate, request: &TouristRequest) -> bool {
    match (&candidate.nationality, &request.preferred_nationality) {
        (Some(have), Some(want)) if !want.trim().is_empty() => same_text(have, want),
        _ => false,
    }
}

/// True when the candidate speaks at least one of the preferred languages
#[inline]
pub fn shares_language(candidate: &StudentCandidate, request: &TouristRequest) -> bool {
    !overlapping(&request.preferred_languages, &candidate.languages).is_empty()
}

/// Narrow the eligible students down to a candidate pool
///
/// Tiers are tried in order and the first qualifying one wins:
/// 1. Nationality match, only if it yields at least `min_nationality_pool`
/// 2. Any preferred-language overlap
/// 3. Every eligible student in the city
///
/// Input order is preserved within the pool since the scorer's tie-break
/// relies on it.
pub fn assemble_pool(
    request: &TouristRequest,
    eligible: Vec<StudentCandidate>,
    min_nationality_pool: usize,
) -> (Vec<StudentCandidate>, PoolTier) {
    if request.preferred_nationality.is_some() {
        let by_nationality = eligible
            .iter()
            .filter(|c| matches_nationality(c, request))
            .count();
        if by_nationality >= min_nationality_pool.max(1) {
            let pool = eligible
                .into_iter()
                .filter(|c| matches_nationality(c, request))
                .collect();
            return (pool, PoolTier::Nationality);
        }
    }

    if eligible.iter().any(|c| shares_language(c, request)) {
        let pool = eligible
            .into_iter()
            .filter(|c| shares_language(c, request))
            .collect();
        return (pool, PoolTier::Language);
    }

    (eligible, PoolTier::City)
}
