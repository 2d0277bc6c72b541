// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    TouristRequest, TripDates, ServiceType, StudentCandidate, ReliabilityBadge, PriceRange,
    ScoredCandidate, PoolTier, PriceSuggestion, PriceType, ScoringWeights,
};
pub use requests::{FindMatchesRequest, SuggestPriceRequest};
pub use responses::{FindMatchesResponse, StudentTagsResponse, HealthResponse, ErrorResponse};
