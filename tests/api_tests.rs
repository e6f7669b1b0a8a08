use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use catalog_api::{create_router, AppState, ServiceKind};

fn create_test_server(service: ServiceKind) -> TestServer {
    let state = AppState::new();
    let app = create_router(state, service);
    TestServer::new(app).unwrap()
}

fn titles(records: &[Value]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(ServiceKind::Books);
    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "status": "ok", "message": "Book Suggestor API is online." })
    );
}

#[tokio::test]
async fn test_books_fantasy_is_the_hobbit() {
    let server = create_test_server(ServiceKind::Books);

    let response = server.get("/suggest-books?genre=fantasy&limit=5").await;
    response.assert_status_ok();

    let books: Vec<Value> = response.json();
    assert_eq!(titles(&books), vec!["The Hobbit"]);
    assert_eq!(
        books[0],
        json!({
            "title": "The Hobbit",
            "author": "J.R.R. Tolkien",
            "genre": "fantasy",
            "decade": 1930
        })
    );
}

#[tokio::test]
async fn test_books_unknown_genre_is_not_found() {
    let server = create_test_server(ServiceKind::Books);

    let response = server.get("/suggest-books?genre=jazz").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["detail"], "No books found for given filters.");
}

#[tokio::test]
async fn test_default_limit_is_five() {
    let server = create_test_server(ServiceKind::Books);

    let response = server.get("/suggest-books").await;
    response.assert_status_ok();

    let books: Vec<Value> = response.json();
    assert_eq!(books.len(), 5);
}

#[tokio::test]
async fn test_limit_truncates_without_duplicates() {
    let server = create_test_server(ServiceKind::Music);

    let response = server.get("/curate-playlist?genre=pop&limit=3").await;
    response.assert_status_ok();

    let tracks: Vec<Value> = response.json();
    assert_eq!(tracks.len(), 3);
    assert!(tracks.iter().all(|t| t["genre"] == "pop"));

    let mut names = titles(&tracks);
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 3);
}

#[tokio::test]
async fn test_out_of_range_parameters_are_rejected() {
    let server = create_test_server(ServiceKind::Books);

    for path in [
        "/suggest-books?limit=0",
        "/suggest-books?limit=21",
        "/suggest-books?decade=1790",
        "/suggest-books?decade=2030",
        "/suggest-books?limit=many",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert!(body["detail"].is_string(), "missing detail for {}", path);
    }
}

#[tokio::test]
async fn test_movies_filter_by_year() {
    let server = create_test_server(ServiceKind::Movies);

    let response = server.get("/recommend?year=2016&limit=20").await;
    response.assert_status_ok();

    let movies: Vec<Value> = response.json();
    let mut names = titles(&movies);
    names.sort();
    assert_eq!(names, vec!["Dangal", "Your Name"]);

    server
        .get("/recommend?year=1899")
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = server.get("/recommend?genre=western").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["detail"], "No matching movies found.");
}

#[tokio::test]
async fn test_games_platform_substring() {
    let server = create_test_server(ServiceKind::Games);

    let response = server
        .get("/suggest-games?platform=play&genre=ACTION")
        .await;
    response.assert_status_ok();

    let games: Vec<Value> = response.json();
    assert_eq!(titles(&games), vec!["God of War"]);
}

#[tokio::test]
async fn test_podcasts_and_events() {
    let podcasts = create_test_server(ServiceKind::Podcasts);
    let response = podcasts.get("/suggest-podcasts?genre=history").await;
    response.assert_status_ok();
    let found: Vec<Value> = response.json();
    assert_eq!(titles(&found), vec!["Hardcore History"]);

    let response = podcasts.get("/suggest-podcasts?genre=sports").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["detail"], "No podcasts found for the given genre.");

    let events = create_test_server(ServiceKind::Events);
    let response = events.get("/find-events?location=mum").await;
    response.assert_status_ok();
    let found: Vec<Value> = response.json();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Comic Con");
}

#[tokio::test]
async fn test_trivia_categories() {
    let server = create_test_server(ServiceKind::Trivia);

    let response = server.get("/trivia").await;
    response.assert_status_ok();
    let item: Value = response.json();
    assert!(item["question"].is_string());
    assert!(item["answer"].is_string());

    let response = server.get("/trivia?category=Sports").await;
    response.assert_status_ok();

    let response = server.get("/trivia?category=cooking").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["detail"], "Category 'cooking' not found.");
}

#[tokio::test]
async fn test_celebrity_news() {
    let server = create_test_server(ServiceKind::CelebrityNews);

    let response = server.get("/celebrity-news?name=billie%20eilish").await;
    response.assert_status_ok();
    let news: Vec<String> = response.json();
    assert_eq!(news.len(), 2);
    assert!(news.iter().all(|h| h.starts_with("Billie Eilish")));

    let response = server.get("/celebrity-news").await;
    response.assert_status_ok();
    let news: Vec<String> = response.json();
    assert_eq!(news.len(), 3);

    let response = server.get("/celebrity-news?name=nobody").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["detail"], "Celebrity not found.");
}

#[tokio::test]
async fn test_empty_celebrity_name_returns_random_mix() {
    let server = create_test_server(ServiceKind::CelebrityNews);

    let response = server.get("/celebrity-news?name=").await;
    response.assert_status_ok();
    let news: Vec<String> = response.json();
    assert_eq!(news.len(), 3);
}

#[tokio::test]
async fn test_empty_trivia_category_is_not_found() {
    let server = create_test_server(ServiceKind::Trivia);

    let response = server.get("/trivia?category=").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["detail"], "Category '' not found.");
}

#[tokio::test]
async fn test_tv_tracking_flow() {
    let server = create_test_server(ServiceKind::TvShows);

    let response = server
        .post("/track-episode")
        .json(&json!({
            "username": "alice",
            "show_name": "Breaking Bad",
            "episode_watched": 5
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Episode tracked successfully.");

    server
        .post("/track-episode")
        .json(&json!({
            "username": "alice",
            "show_name": "Breaking Bad",
            "episode_watched": 3
        }))
        .await
        .assert_status_ok();

    let response = server
        .get("/next-episode?username=alice&show_name=Breaking%20Bad")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "next_episode": 6,
            "total_episodes": 13,
            "show_name": "Breaking Bad"
        })
    );
}

#[tokio::test]
async fn test_tv_finished_show_has_null_next_episode() {
    let server = create_test_server(ServiceKind::TvShows);

    server
        .post("/track-episode")
        .json(&json!({
            "username": "bob",
            "show_name": "Stranger Things",
            "episode_watched": 8
        }))
        .await
        .assert_status_ok();

    let response = server
        .get("/next-episode?username=bob&show_name=Stranger%20Things")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["next_episode"].is_null());
    assert_eq!(body["total_episodes"], 8);
}

#[tokio::test]
async fn test_tv_errors() {
    let server = create_test_server(ServiceKind::TvShows);

    let response = server
        .post("/track-episode")
        .json(&json!({
            "username": "alice",
            "show_name": "Friends",
            "episode_watched": 1
        }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["detail"], "TV show not found.");

    let response = server
        .post("/track-episode")
        .json(&json!({
            "username": "alice",
            "show_name": "Game of Thrones",
            "episode_watched": 11
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["detail"], "Invalid episode. Must be between 1 and 10.");

    server
        .post("/track-episode")
        .json(&json!({ "username": "alice" }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    server
        .get("/next-episode?username=alice")
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    server
        .get("/next-episode?username=alice&show_name=Friends")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_episode_number_is_coerced_from_float_and_string() {
    let server = create_test_server(ServiceKind::TvShows);

    for (username, episode) in [("ana", json!(5.0)), ("ben", json!("5"))] {
        server
            .post("/track-episode")
            .json(&json!({
                "username": username,
                "show_name": "The Office",
                "episode_watched": episode
            }))
            .await
            .assert_status_ok();

        let path = format!("/next-episode?username={}&show_name=The%20Office", username);
        let response = server.get(&path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["next_episode"], 6);
    }

    server
        .post("/track-episode")
        .json(&json!({
            "username": "cat",
            "show_name": "The Office",
            "episode_watched": 5.5
        }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_all_services_are_nested() {
    let server = create_test_server(ServiceKind::All);

    let response = server.get("/").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Catalog API is online.");

    let response = server.get("/movies").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Movie Recommender API is running.");

    let response = server.get("/books/suggest-books?genre=fantasy").await;
    response.assert_status_ok();
    let books: Vec<Value> = response.json();
    assert_eq!(titles(&books), vec!["The Hobbit"]);

    server
        .get("/trivia/trivia?category=tech")
        .await
        .assert_status_ok();

    let response = server
        .get("/tv-shows/next-episode?username=zoe&show_name=The%20Office")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["next_episode"], 1);

    server
        .get("/suggest-books")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server(ServiceKind::Games);
    let request_id = "6f1c2a4e-9a53-4c1e-8d0a-3b7c5e2f9d10";

    let response = server
        .get("/")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(request_id),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), request_id);

    let response = server.get("/").await;
    let generated = response.header("x-request-id");
    assert!(uuid_like(generated.to_str().unwrap()));
}

fn uuid_like(value: &str) -> bool {
    value.len() == 36 && value.chars().filter(|c| *c == '-').count() == 4
}
