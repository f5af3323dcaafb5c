//! Catalog info endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::CatalogInfo;
use crate::AppState;

/// GET /api/catalog - Catalog summary for populating selector controls.
pub async fn get_catalog_info(State(state): State<AppState>) -> ApiResult<CatalogInfo> {
    success(state.catalog.info())
}
