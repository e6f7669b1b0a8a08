use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::ServiceKind,
    middleware::{make_span_with_request_id, request_id_middleware},
    models::{
        BookQuery, EventQuery, GameQuery, HealthStatus, MovieQuery, PlaylistQuery, PodcastQuery,
    },
    state::AppState,
};

pub mod catalog;
pub mod celebrity_news;
pub mod trivia;
pub mod tv_shows;

/// Creates the application router for the configured service
///
/// A single service is mounted at `/`. [`ServiceKind::All`] nests every
/// service under its own prefix and adds a top-level health check.
pub fn create_router(state: AppState, service: ServiceKind) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(make_span_with_request_id);

    service_routes(service)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn service_routes(service: ServiceKind) -> Router<AppState> {
    let router = match service {
        ServiceKind::All => ServiceKind::SERVICES
            .iter()
            .fold(Router::new(), |router, kind| {
                router.nest(kind.mount_path(), service_routes(*kind))
            }),
        ServiceKind::Books => {
            Router::new().route("/suggest-books", get(catalog::suggest::<BookQuery>))
        }
        ServiceKind::Movies => {
            Router::new().route("/recommend", get(catalog::suggest::<MovieQuery>))
        }
        ServiceKind::Games => {
            Router::new().route("/suggest-games", get(catalog::suggest::<GameQuery>))
        }
        ServiceKind::Music => {
            Router::new().route("/curate-playlist", get(catalog::suggest::<PlaylistQuery>))
        }
        ServiceKind::Podcasts => {
            Router::new().route("/suggest-podcasts", get(catalog::suggest::<PodcastQuery>))
        }
        ServiceKind::Events => {
            Router::new().route("/find-events", get(catalog::suggest::<EventQuery>))
        }
        ServiceKind::Trivia => Router::new().route("/trivia", get(trivia::get_trivia)),
        ServiceKind::CelebrityNews => {
            Router::new().route("/celebrity-news", get(celebrity_news::get_celebrity_news))
        }
        ServiceKind::TvShows => Router::new()
            .route("/track-episode", post(tv_shows::track_episode))
            .route("/next-episode", get(tv_shows::next_episode)),
    };

    router.route("/", health_route(service.health_message()))
}

/// Health check endpoint answering with a fixed message
fn health_route(message: &'static str) -> MethodRouter<AppState> {
    get(move || async move { Json(HealthStatus::ok(message)) })
}
