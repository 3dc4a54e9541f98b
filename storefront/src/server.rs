use axum::{Json, Router, routing::get};
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use crate::entities;
use crate::error::StartupError;

#[derive(OpenApi)]
#[openapi(info(
    title = "Storefront API",
    description = "Paginated CRUD over authors, books, categories, customers, products and orders"
))]
struct ApiDoc;

/// The full HTTP application: entity routes under `/api`, interactive docs
/// at `/docs` and the OpenAPI document at `/openapi.json`.
pub fn app(db: &DatabaseConnection) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(entities::router(db))
        .split_for_parts();

    let document = api.clone();
    router
        .route(
            "/openapi.json",
            get(move || {
                let document = document.clone();
                async move { Json(document) }
            }),
        )
        .merge(Scalar::with_url("/docs", api))
        .layer(TraceLayer::new_for_http())
}

/// Serve until Ctrl-C.
///
/// # Errors
///
/// Returns an I/O error when the address cannot be bound.
pub async fn serve(db: &DatabaseConnection, bind_addr: &str) -> Result<(), StartupError> {
    let listener = TcpListener::bind(bind_addr).await?;
    let address = listener.local_addr()?;
    tracing::info!(%address, "listening, docs at /docs");

    axum::serve(listener, app(db))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
