use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
/// Nothing is consumed from the request; the handler only reads the system
/// clock and cannot fail.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Content-Type: `application/json`
///   - Body: [`HealthResponse`] containing:
///     - `status`: String indicating service status ("UP")
///     - `timestamp`: ISO 8601 timestamp of the check
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up())
}

/// Registers the health check endpoint with the Actix-web service
/// configuration.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}
