//! Dashboard Route
//!
//! - GET /?brand=X - The rendered dashboard page
//!
//! The dropdown submits back to this route, so each selector change is one
//! request and one call to the view controller.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::dto::BrandQuery;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::render::render_page;

/// GET /
pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    query: Result<Query<BrandQuery>, QueryRejection>,
) -> ApiResult<Html<String>> {
    let Query(query) = query?;

    let view = state.controller.view_for(query.brand.as_deref());
    let html = render_page(&state.page, state.controller.brands(), &view);

    Ok(Html(html))
}
