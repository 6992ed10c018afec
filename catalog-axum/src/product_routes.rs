//! REST API endpoints for product CRUD.
//!
//! Every handler validates first, then talks to the repository through the
//! `Application` state. Store failures are logged and answered with a 500;
//! id-addressed operations on a missing record answer 404 before anything
//! is written.

use crate::{
    ApiError,
    validation::{self, ProductPayload},
};
use aide::axum::{ApiRouter, routing::get};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use catalog_core::{
    models::Product,
    ports::{Application, ProductRepository as _},
};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{Level, event};

/// Envelope for successful responses
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct DataResponse<T> {
    /// The operation's result
    data: T,
}

/// Creates a router with the product CRUD endpoints.
pub fn router<T: Application>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route("/", get(list_products::<T>).post(create_product::<T>))
        .api_route(
            "/{id}",
            get(get_product::<T>)
                .put(update_product::<T>)
                .patch(toggle_availability::<T>)
                .delete(delete_product::<T>),
        )
}

/// The repository, or a logged 500 when serving in degraded mode.
fn database<T: Application>(app: &T) -> Result<&T::Repository, ApiError> {
    app.database().ok_or_else(|| {
        event!(Level::ERROR, "no hay conexión a la base de datos");
        ApiError::Internal
    })
}

/// List every product, most expensive first.
///
/// # Returns
///
/// - `200 OK`: `{"data": [...]}` sorted by price descending
/// - `500 Internal Server Error`: database query failed
async fn list_products<T: Application>(
    State(app): State<T>,
) -> Result<Json<DataResponse<Vec<Product>>>, ApiError> {
    let db = database(&app)?;

    let products = db.list_products().await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        ApiError::Internal
    })?;

    Ok(Json(DataResponse { data: products }))
}

/// Retrieve a single product by id.
///
/// # Returns
///
/// - `200 OK`: `{"data": product}`
/// - `400 Bad Request`: the id is not an integer
/// - `404 Not Found`: no product with that id
/// - `500 Internal Server Error`: database query failed
async fn get_product<T: Application>(
    State(app): State<T>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Product>>, ApiError> {
    let id = validation::validate_id(&id)?;
    let db = database(&app)?;

    let product = db
        .find_product(id)
        .await
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            ApiError::Internal
        })?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(DataResponse { data: product }))
}

/// Create a product.
///
/// The body must carry a non-empty `name` and a strictly positive numeric
/// `price`; availability defaults to `true`. Every validation failure is
/// reported, not just the first.
///
/// # Returns
///
/// - `201 Created`: `{"data": product}` with the store-assigned id
/// - `400 Bad Request`: `{"errors": [...]}` listing every failure
/// - `500 Internal Server Error`: database operation failed
async fn create_product<T: Application>(
    State(app): State<T>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<DataResponse<Product>>), ApiError> {
    let errors = validation::validate_create(&payload);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let db = database(&app)?;
    let product = db
        .create_product(payload.into_new_product())
        .await
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            ApiError::Internal
        })?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// Replace every field of an existing product.
///
/// `name`, `price` and `availability` are all required; the record is
/// replaced wholesale in one atomic write. Path and body failures
/// accumulate into a single 400 response.
///
/// # Returns
///
/// - `200 OK`: `{"data": product}` after the update
/// - `400 Bad Request`: `{"errors": [...]}` listing every failure
/// - `404 Not Found`: no product with that id (nothing was written)
/// - `500 Internal Server Error`: database operation failed
async fn update_product<T: Application>(
    State(app): State<T>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<DataResponse<Product>>, ApiError> {
    let mut errors = Vec::new();
    let id = match validation::validate_id(&id) {
        Ok(id) => Some(id),
        Err(err) => {
            errors.push(err);
            None
        }
    };
    errors.extend(validation::validate_update(&payload));

    let Some(id) = id.filter(|_| errors.is_empty()) else {
        return Err(ApiError::Validation(errors));
    };

    let db = database(&app)?;
    let product = db
        .update_product(id, payload.into_update())
        .await
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            ApiError::Internal
        })?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(DataResponse { data: product }))
}

/// Negate a product's availability flag.
///
/// No body is read; toggling twice returns the record to its original
/// state.
///
/// # Returns
///
/// - `200 OK`: `{"data": product}` with the flag negated
/// - `400 Bad Request`: the id is not an integer
/// - `404 Not Found`: no product with that id
/// - `500 Internal Server Error`: database operation failed
async fn toggle_availability<T: Application>(
    State(app): State<T>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Product>>, ApiError> {
    let id = validation::validate_id(&id)?;
    let db = database(&app)?;

    let product = db
        .toggle_availability(id)
        .await
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            ApiError::Internal
        })?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(DataResponse { data: product }))
}

/// Hard-delete a product.
///
/// # Returns
///
/// - `200 OK`: `{"data": "Producto Eliminado"}`
/// - `400 Bad Request`: the id is not an integer
/// - `404 Not Found`: no product with that id
/// - `500 Internal Server Error`: database operation failed
async fn delete_product<T: Application>(
    State(app): State<T>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<String>>, ApiError> {
    let id = validation::validate_id(&id)?;
    let db = database(&app)?;

    let deleted = db.delete_product(id).await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        ApiError::Internal
    })?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok(Json(DataResponse {
        data: "Producto Eliminado".to_string(),
    }))
}
