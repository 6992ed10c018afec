#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod error;
mod product_routes;
mod validation;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{
    Extension, Json,
    http::{Method, header},
};
use catalog_core::ports::Application;
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::{AxumConfig, InvalidOrigin};

pub use error::ApiError;
pub use validation::FieldError;

/// Response for the API index endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct IndexResponse {
    msg: String,
}

/// Fixed greeting, doubling as a liveness probe
async fn api_index() -> Json<IndexResponse> {
    Json(IndexResponse {
        msg: "Desde API".to_string(),
    })
}

/// Failure modes of serving the API.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configured origin cannot be used in a CORS header
    #[error(transparent)]
    InvalidOrigin(#[from] InvalidOrigin),
    /// The listener could not be set up or connection handling failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Construct a full API router with the given state and config.
///
/// Fails if `allowed_origin` is not a legal origin value, so a bad config
/// surfaces as an error before the server starts rather than a panic.
pub fn router<T: Application>(state: T, config: AxumConfig) -> Result<axum::Router, InvalidOrigin> {
    // CORS admits exactly the one configured origin; with none configured,
    // no cross-origin access is granted at all
    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);
    if let Some(origin) = config.allowed_origin_value()? {
        cors = cors.allow_origin(origin);
    }

    let mut api = OpenApi::default();
    Ok(ApiRouter::new()
        .api_route("/api", get(api_index))
        .nest("/api/products", product_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api))) // Arc is very important here or you will face massive memory and performance issues
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: Application>(config: AxumConfig, app: T) -> Result<(), ServerError> {
    let bind_address = config.bind_address;
    let service = router(app, config)?;

    let listener = tokio::net::TcpListener::bind(bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    axum::serve(listener, service).await?;

    Ok(())
}
