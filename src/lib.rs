//! WanderNest Guide Match - ranks student guides for tourist requests
//!
//! This library provides the matching core used by the WanderNest
//! marketplace: a tiered candidate pool, an additive scorer with
//! human-readable reasons, a keyword tag extractor and a price suggester.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, calculate_match_score, extract_tags, suggest_price};
pub use models::{TouristRequest, StudentCandidate, ScoredCandidate, ScoringWeights, PriceSuggestion, FindMatchesRequest, FindMatchesResponse};
