use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank guides for a stored tourist request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "request_id", rename = "requestId")]
    pub request_id: String,
}

/// Request for a price suggestion
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestPriceRequest {
    #[validate(length(min = 1))]
    pub city: String,
    #[serde(alias = "service_type", rename = "serviceType", default)]
    pub service_type: String,
}
