use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{TriviaItem, TriviaQuery},
    services::trivia,
    state::AppState,
};

/// Handler for a random trivia question
pub async fn get_trivia(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<TriviaQuery>, QueryRejection>,
) -> AppResult<Json<TriviaItem>> {
    let Query(params) = query?;

    tracing::info!(
        request_id = %request_id,
        category = params.category.as_deref().unwrap_or(trivia::DEFAULT_CATEGORY),
        "Fetching trivia"
    );

    let item = trivia::random_question(
        &state.catalog.trivia,
        params.category.as_deref(),
        &mut rand::thread_rng(),
    )?;

    Ok(Json(item))
}
