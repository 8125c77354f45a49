use actix_web::{App, HttpServer};
use cicd_pipeline_api::config::ServerConfig;
use cicd_pipeline_api::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// CI/CD Pipeline Demo API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Health check and root greeting endpoints
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Health check: `GET /health`
/// - Greeting: `GET /`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0` on the port given by the `PORT`
///   environment variable (default 3000)
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env();
    tracing::info!("Server running on port {}", config.port);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .configure(cicd_pipeline_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
