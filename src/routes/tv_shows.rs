use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Extension, Json,
};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{NextEpisodeQuery, NextEpisodeResponse, TrackRequest, WatchedResponse},
    state::AppState,
};

/// Handler for recording a watched episode
pub async fn track_episode(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<TrackRequest>, JsonRejection>,
) -> AppResult<Json<WatchedResponse>> {
    let Json(request) = body?;

    tracing::info!(
        request_id = %request_id,
        username = %request.username,
        show_name = %request.show_name,
        episode = request.episode_watched,
        "Tracking episode"
    );

    state
        .tracker
        .track(
            &request.username,
            &request.show_name,
            request.episode_watched,
        )
        .await?;

    Ok(Json(WatchedResponse {
        message: "Episode tracked successfully.".to_string(),
    }))
}

/// Handler for the next episode a user should watch
pub async fn next_episode(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<NextEpisodeQuery>, QueryRejection>,
) -> AppResult<Json<NextEpisodeResponse>> {
    let Query(params) = query?;

    tracing::info!(
        request_id = %request_id,
        username = %params.username,
        show_name = %params.show_name,
        "Fetching next episode"
    );

    let next = state
        .tracker
        .next_episode(&params.username, &params.show_name)
        .await?;

    Ok(Json(next))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::{
        config::ServiceKind, error::AppError, models::Catalog, routes::create_router,
        services::progress::MockProgressStore, state::AppState,
    };

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let mut store = MockProgressStore::new();
        store
            .expect_record_watched()
            .returning(|_, _, _| Err(AppError::Internal("store offline".into())));

        let state = AppState::with_store(Catalog::load(), Arc::new(store));
        let server = TestServer::new(create_router(state, ServiceKind::TvShows)).unwrap();

        let response = server
            .post("/track-episode")
            .json(&json!({
                "username": "alice",
                "show_name": "The Office",
                "episode_watched": 2
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["detail"], "Internal server error.");
    }
}
