use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("UP") and `timestamp` in ISO 8601 format
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
pub mod health;

/// # Root Greeting Endpoint
///
/// Serves a fixed plaintext greeting confirming the pipeline demo
/// service is live.
///
/// ## Request
/// - Method: GET
/// - Path: `/`
///
/// ## Response
/// - **200 OK**: Plaintext body `CI/CD Pipeline LIVE 🚀`
pub mod root;

/// # Route Configuration
///
/// Registers all endpoints with the Actix-web service configuration.
/// Both the server binary and the test harness feed this to
/// `App::new().configure(...)`, so the full request-handling object can
/// be driven in-process without binding a network socket.
///
/// ## Configured Routes
///
/// ```text
/// GET /health - Service health status
/// GET /       - Fixed plaintext greeting
/// ```
///
/// The wire contract fixes these exact paths, so routes are mounted at
/// the root scope rather than under a version prefix. Requests matching
/// neither route fall through to Actix-web's default 404 handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(root::configure_routes);
}
