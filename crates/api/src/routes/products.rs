//! Catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::{Product, ProductId};
use domain::AddProduct;
use queries::ProductListing;
use serde::Deserialize;
use store::Store;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AddProductRequest {
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// POST /products/add — add a product to the catalog.
#[tracing::instrument(skip(state, req))]
pub async fn add<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(req): ApiJson<AddProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state
        .repository
        .create_product(AddProduct::new(req.name, req.price, req.category))
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products — list the catalog without ids.
#[tracing::instrument(skip(state))]
pub async fn list<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<ProductListing>>, ApiError> {
    Ok(Json(state.queries.list_products().await?))
}

/// GET /products/:id — load one product.
#[tracing::instrument(skip(state))]
pub async fn get<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.queries.get_product(ProductId::new(id)).await?))
}
