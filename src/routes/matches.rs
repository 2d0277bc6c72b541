use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{extract_tags, Matcher};
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, StudentTagsResponse};
use crate::services::{CacheKey, CacheManager, PostgresClient, PostgresError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/students/{student_id}/tags", web::get().to(student_tags));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cache_entries: state.cache.stats().entries,
        timestamp: chrono::Utc::now(),
    })
}

fn storage_error(context: &str, err: &PostgresError) -> HttpResponse {
    match err {
        PostgresError::NotFound(what) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: format!("No {} exists", what),
            status_code: 404,
        }),
        _ => HttpResponse::InternalServerError().json(ErrorResponse {
            error: context.to_string(),
            message: err.to_string(),
            status_code: 500,
        }),
    }
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "requestId": "string"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = req.request_id.trim();
    let cache_key = CacheKey::matches(request_id);

    if let Ok(cached) = state.cache.get::<FindMatchesResponse>(&cache_key).await {
        tracing::debug!("Serving cached matches for request {}", request_id);
        return HttpResponse::Ok().json(cached);
    }

    let tourist_request = match state.postgres.get_tourist_request(request_id).await {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Failed to load tourist request {}: {}", request_id, e);
            return storage_error("Failed to load tourist request", &e);
        }
    };

    let eligible = match state.postgres.get_eligible_students(&tourist_request.city).await {
        Ok(students) => students,
        Err(e) => {
            tracing::error!("Failed to load students in {}: {}", tourist_request.city, e);
            return storage_error("Failed to load candidates", &e);
        }
    };

    let result = state.matcher.find_matches(&tourist_request, eligible);

    tracing::info!(
        "Returning {} matches for request {} ({} eligible, {} in {:?} pool)",
        result.matches.len(),
        request_id,
        result.total_candidates,
        result.pool_size,
        result.pool_tier
    );

    let response = FindMatchesResponse {
        request_id: tourist_request.id,
        matches: result.matches,
        pool_tier: result.pool_tier,
        total_candidates: result.total_candidates,
    };

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Failed to cache matches for {}: {}", request_id, e);
    }

    HttpResponse::Ok().json(response)
}

/// Student tags endpoint
///
/// GET /api/v1/students/{student_id}/tags
async fn student_tags(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let student_id = path.into_inner();
    let cache_key = CacheKey::tags(&student_id);

    if let Ok(tags) = state.cache.get::<Vec<String>>(&cache_key).await {
        return HttpResponse::Ok().json(StudentTagsResponse { student_id, tags });
    }

    let student = match state.postgres.get_student(&student_id).await {
        Ok(student) => student,
        Err(e) => {
            tracing::warn!("Failed to load student {}: {}", student_id, e);
            return storage_error("Failed to load student", &e);
        }
    };

    let tags = extract_tags(&student);
    if let Err(e) = state.cache.set(&cache_key, &tags).await {
        tracing::warn!("Failed to cache tags for {}: {}", student_id, e);
    }

    HttpResponse::Ok().json(StudentTagsResponse { student_id, tags })
}
