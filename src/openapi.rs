use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural macros.
/// This documentation serves as the source of truth for both API consumers and
/// automated documentation generators.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Root Greeting: `GET /`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any changes
/// to the API surface should be reflected here first to maintain documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health::health, crate::routes::root::root),
    components(schemas(crate::models::health::HealthResponse)),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Root", description = "Service greeting endpoint")
    ),
    info(
        description = "Placeholder API for a CI/CD pipeline demonstration",
        title = "CI/CD Pipeline Demo API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_both_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("Spec should serialize");

        assert!(doc["paths"]["/health"]["get"].is_object());
        assert!(doc["paths"]["/"]["get"].is_object());
        assert!(doc["components"]["schemas"]["HealthResponse"].is_object());
    }
}
