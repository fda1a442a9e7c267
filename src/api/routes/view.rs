//! View Routes
//!
//! JSON access to the same data the page renders.
//!
//! - GET /api/v1/brands - Selector options and the initial brand
//! - GET /api/v1/view?brand=X - Chart spec and summary for a brand
//! - GET /api/v1/records?brand=X - Filtered table rows (all rows without `brand`)

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{BrandQuery, BrandsResponse, RecordsResponse, ViewResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/brands
pub async fn list_brands(State(state): State<Arc<AppState>>) -> Json<BrandsResponse> {
    Json(BrandsResponse {
        brands: state.controller.brands().to_vec(),
        default: state.controller.initial_brand().map(str::to_string),
    })
}

/// GET /api/v1/view
///
/// Unknown brands yield an empty chart and zero totals, not an error.
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    query: Result<Query<BrandQuery>, QueryRejection>,
) -> ApiResult<Json<ViewResponse>> {
    let Query(query) = query?;
    let view = state.controller.view_for(query.brand.as_deref());
    Ok(Json(view.into()))
}

/// GET /api/v1/records
pub async fn list_records(
    State(state): State<Arc<AppState>>,
    query: Result<Query<BrandQuery>, QueryRejection>,
) -> ApiResult<Json<RecordsResponse>> {
    let Query(query) = query?;

    let records: Vec<_> = match query.brand.as_deref() {
        Some(brand) => state.dataset().filter_by_brand(brand).cloned().collect(),
        None => state.dataset().records().to_vec(),
    };

    Ok(Json(RecordsResponse {
        brand: query.brand,
        total: records.len(),
        records,
    }))
}
