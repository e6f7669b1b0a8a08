use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};

use crate::{
    error::AppResult, middleware::RequestId, models::CelebrityNewsQuery, services::celebrity_news,
    state::AppState,
};

/// Handler for celebrity headlines
pub async fn get_celebrity_news(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<CelebrityNewsQuery>, QueryRejection>,
) -> AppResult<Json<Vec<String>>> {
    let Query(params) = query?;

    tracing::info!(
        request_id = %request_id,
        celebrity = params.name.as_deref().unwrap_or("random selection"),
        "Fetching celebrity news"
    );

    let news = celebrity_news::headlines(
        &state.catalog.celebrities,
        params.name.as_deref(),
        &mut rand::thread_rng(),
    )?;

    Ok(Json(news))
}
