//! API Handlers
//!
//! HTTP request handlers exposing the category cache facade.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{CacheError, Result};
use crate::manager::{BatchResult, CacheHandle};
use crate::models::{
    DeleteResponse, GetMultiRequest, GetResponse, HealthResponse, SetMultiRequest, SetResponse,
    SetValueRequest,
};
use crate::namespace::validate_category;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Connected facade, or the disabled marker
    pub cache: CacheHandle,
}

impl AppState {
    /// Creates a new AppState around the given cache handle.
    pub fn new(cache: CacheHandle) -> Self {
        Self { cache }
    }
}

/// Handler for GET /cache/:category/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path((category, key)): Path<(String, String)>,
) -> Result<Json<GetResponse>> {
    let cache = state.cache.manager()?;
    validate_category(&category)?;

    match cache.get(&category, &key).await {
        Some(value) => Ok(Json(GetResponse::new(category, key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for PUT /cache/:category/:key
pub async fn set_handler(
    State(state): State<AppState>,
    Path((category, key)): Path<(String, String)>,
    Json(req): Json<SetValueRequest>,
) -> Result<Json<SetResponse>> {
    let cache = state.cache.manager()?;
    validate_category(&category)?;

    let stored = cache.set(&category, &key, &req.value, req.expiration).await;

    Ok(Json(SetResponse::new(category, 1, stored)))
}

/// Handler for DELETE /cache/:category/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path((category, key)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    let cache = state.cache.manager()?;
    validate_category(&category)?;

    let deleted = cache.del(&category, &key).await;

    Ok(Json(DeleteResponse::new(category, key, deleted)))
}

/// Handler for PUT /batch/:category
pub async fn set_multi_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(req): Json<SetMultiRequest>,
) -> Result<Json<SetResponse>> {
    let cache = state.cache.manager()?;
    validate_category(&category)?;
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let stored = cache
        .set_multi(&category, &req.values, req.expiration)
        .await;

    Ok(Json(SetResponse::new(category, req.values.len(), stored)))
}

/// Handler for POST /batch/:category
pub async fn get_multi_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(req): Json<GetMultiRequest>,
) -> Result<Json<BatchResult>> {
    let cache = state.cache.manager()?;
    validate_category(&category)?;
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    Ok(Json(cache.get_multi(&category, &req.keys).await))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.cache.is_enabled()))
}
