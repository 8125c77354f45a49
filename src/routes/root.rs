use actix_web::{Responder, get};

/// Fixed greeting served at the root path.
pub const GREETING: &str = "CI/CD Pipeline LIVE 🚀";

/// # Root Greeting Endpoint
///
/// Serves the fixed plaintext greeting. Nothing is consumed from the
/// request and the handler cannot fail.
///
/// ## Response
///
/// - **200 OK**: Greeting returned
///   - Content-Type: `text/plain`
///   - Body: `CI/CD Pipeline LIVE 🚀`
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = String, content_type = "text/plain")
    ),
    tag = "Root"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    GREETING
}

/// Registers the root greeting endpoint with the Actix-web service
/// configuration.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(root);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_root_endpoint() {
        // Arrange
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        // Verify the greeting is served as plaintext
        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present")
            .to_str()
            .expect("Content-Type should be valid ASCII");
        assert!(
            content_type.starts_with("text/plain"),
            "Content-Type should be text/plain, got {content_type}"
        );

        // Verify the body matches the greeting exactly
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).expect("Body should be valid UTF-8");
        assert_eq!(body_str, GREETING, "Body should be the exact greeting");
    }
}
