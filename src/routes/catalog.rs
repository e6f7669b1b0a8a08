use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};

use crate::{
    error::AppResult,
    middleware::RequestId,
    query::{run_query, CatalogQuery},
    state::AppState,
};

/// Handler shared by every filter-and-sample endpoint
///
/// `Q` decides which dataset is searched and how its parameters filter it.
pub async fn suggest<Q: CatalogQuery>(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<Q>, QueryRejection>,
) -> AppResult<Json<Vec<Q::Record>>> {
    let Query(params) = query?;

    tracing::info!(
        request_id = %request_id,
        items = Q::ITEMS,
        params = ?params,
        "Processing catalog query"
    );

    let records = run_query(&state.catalog, &params, &mut rand::thread_rng())?;

    Ok(Json(records))
}
