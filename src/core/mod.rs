// Core algorithm exports
pub mod display;
pub mod filters;
pub mod matcher;
pub mod pricing;
pub mod scoring;
pub mod tags;

pub use display::mask_name;
pub use filters::{assemble_pool, matches_nationality, shares_language};
pub use matcher::{Matcher, MatchResult};
pub use pricing::suggest_price;
pub use scoring::{calculate_match_score, MatchScore};
pub use tags::extract_tags;
