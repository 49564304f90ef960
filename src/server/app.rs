use anyhow::{anyhow, Result};
use axum::{http::HeaderValue, routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{grafikons, health, tabelas};
use super::header_util;
use crate::database::entities::{Grafikon, Tabela};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub application_name: Arc<str>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        grafikons::create_grafikon,
        grafikons::update_grafikon,
        grafikons::partial_update_grafikon,
        grafikons::list_grafikons,
        grafikons::get_grafikon,
        grafikons::delete_grafikon,
        tabelas::create_tabela,
        tabelas::update_tabela,
        tabelas::partial_update_tabela,
        tabelas::list_tabelas,
        tabelas::get_tabela,
        tabelas::delete_tabela,
    ),
    components(schemas(Grafikon, Tabela))
)]
pub struct ApiDoc;

pub async fn create_app(
    db: DatabaseConnection,
    application_name: &str,
    cors_origin: Option<&str>,
) -> Result<Router> {
    if !header_util::is_valid_application_name(application_name) {
        return Err(anyhow!(
            "Invalid application name '{}': must be usable in a header name",
            application_name
        ));
    }

    let state = AppState {
        db,
        application_name: Arc::from(application_name),
    };

    let cors = match cors_origin {
        Some(origin) if origin != "*" => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers(Any),
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers(Any),
    };

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/grafikons",
            get(grafikons::list_grafikons).post(grafikons::create_grafikon),
        )
        .route(
            "/grafikons/:id",
            get(grafikons::get_grafikon)
                .put(grafikons::update_grafikon)
                .patch(grafikons::partial_update_grafikon)
                .delete(grafikons::delete_grafikon),
        )
        .route(
            "/tabelas",
            get(tabelas::list_tabelas).post(tabelas::create_tabela),
        )
        .route(
            "/tabelas/:id",
            get(tabelas::get_tabela)
                .put(tabelas::update_tabela)
                .patch(tabelas::partial_update_tabela)
                .delete(tabelas::delete_tabela),
        )
}
