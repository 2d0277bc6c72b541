use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::suggest_price;
use crate::models::{ErrorResponse, SuggestPriceRequest};

/// Configure pricing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/pricing/suggest", web::post().to(suggest));
}

/// Price suggestion endpoint
///
/// POST /api/v1/pricing/suggest
///
/// Request body:
/// ```json
/// {
///   "city": "Paris",
///   "serviceType": "guided_experience"
/// }
/// ```
async fn suggest(req: web::Json<SuggestPriceRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let suggestion = suggest_price(&req.city, &req.service_type);
    tracing::debug!(
        "Suggested {}-{} {} for {} / {}",
        suggestion.min,
        suggestion.max,
        suggestion.currency,
        req.city,
        req.service_type
    );

    HttpResponse::Ok().json(suggestion)
}
