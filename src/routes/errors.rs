use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use std::collections::HashMap;

    async fn count_param(query: web::Query<HashMap<String, u32>>) -> HttpResponse {
        HttpResponse::Ok().json(query.into_inner())
    }

    #[actix_web::test]
    async fn test_malformed_json_gets_json_error_body() {
        let app = test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .service(web::scope("/api/v1").configure(crate::routes::pricing::configure)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/pricing/suggest")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"city\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_json");
        assert_eq!(body["status_code"], 400);
    }

    #[actix_web::test]
    async fn test_malformed_query_gets_json_error_body() {
        let app = test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
                .route("/count", web::get().to(count_param)),
        )
        .await;

        let req = test::TestRequest::get().uri("/count?n=many").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_query");
    }
}
