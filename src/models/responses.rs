use serde::{Deserialize, Serialize};
use crate::models::domain::{PoolTier, ScoredCandidate};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub matches: Vec<ScoredCandidate>,
    #[serde(rename = "poolTier")]
    pub pool_tier: PoolTier,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the student tags endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentTagsResponse {
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub tags: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cache_entries: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_shape() {
        let health = HealthResponse {
            status: "degraded".to_string(),
            version: "0.1.0".to_string(),
            cache_entries: 7,
            timestamp: chrono::Utc::now(),
        };

        let json = serde_json::to_value(&health).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(keys, vec!["cache_entries", "status", "timestamp", "version"]);
        assert_eq!(json["cache_entries"], 7);
    }
}
