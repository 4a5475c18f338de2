use axum::body::Body;
use axum::http::{Request, StatusCode};
use cinema_booking::api::handlers::AppState;
use cinema_booking::api::router::create_router;
use cinema_booking::api::types::*;
use cinema_booking::application::reservation::ReservationCoordinator;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

// ============================================================================
// APIテスト用のヘルパー関数
// ============================================================================

/// サンプルデータ入りのインメモリ構成でルーターを作成
fn setup_app() -> axum::Router {
    let ctx = common::setup();
    let coordinator = Arc::try_unwrap(ctx.coordinator)
        .unwrap_or_else(|_| panic!("coordinator should not be shared yet"));
    build_app(coordinator)
}

fn build_app(coordinator: ReservationCoordinator) -> axum::Router {
    create_router(Arc::new(AppState { coordinator }))
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn post_reservation(app: &axum::Router, payload: serde_json::Value) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reservations")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

// ============================================================================
// クエリ
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_list_movies_and_theaters() {
    let app = setup_app();

    let (status, body) = get(&app, "/movies").await;
    assert_eq!(status, StatusCode::OK);
    let movies: Vec<MovieResponse> = parse(&body);
    assert_eq!(movies.len(), 4);
    assert_eq!(movies[1].title, "Dune: Part Two");
    assert_eq!(movies[1].duration_minutes, 166);

    let (status, body) = get(&app, "/movies/2/theaters").await;
    assert_eq!(status, StatusCode::OK);
    let theaters: Vec<TheaterResponse> = parse(&body);
    assert_eq!(theaters.len(), 3);
    assert!(theaters.iter().all(|t| t.capacity == 20));
}

#[tokio::test]
async fn test_available_seats_for_unknown_show_is_empty_list() {
    let app = setup_app();
    let (status, body) = get(&app, "/theaters/99/movies/1/seats").await;
    assert_eq!(status, StatusCode::OK);
    let seats: Vec<SeatResponse> = parse(&body);
    assert!(seats.is_empty());
}

#[tokio::test]
async fn test_list_bookings_requires_customer_id() {
    let app = setup_app();
    let (status, body) = get(&app, "/bookings").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "bad_request");
}

// ============================================================================
// 予約フロー
// ============================================================================

#[tokio::test]
async fn test_full_reservation_flow() {
    let app = setup_app();

    // Step 1: 予約作成
    let (status, body) = post_reservation(
        &app,
        json!({
            "theater_id": 1,
            "movie_id": 1,
            "seat_ids": ["A1", "A2", "A3"],
            "customer_id": "Carol",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let booking: BookingResponse = parse(&body);
    assert_eq!(booking.booking_id, 1);
    assert_eq!(booking.seat_ids, vec!["A1", "A2", "A3"]);

    // Step 2: 残席が減っている
    let (_, body) = get(&app, "/theaters/1/movies/1/seats").await;
    let seats: Vec<SeatResponse> = parse(&body);
    assert_eq!(seats.len(), 17);
    assert!(seats.iter().all(|s| s.status == "available"));

    // Step 3: 顧客の予約一覧に含まれる
    let (status, body) = get(&app, "/bookings?customer_id=Carol").await;
    assert_eq!(status, StatusCode::OK);
    let bookings: Vec<BookingResponse> = parse(&body);
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].booking_id, 1);
    assert_eq!(bookings[0].customer_id, "Carol");
}

#[tokio::test]
async fn test_reserving_taken_seat_returns_conflict() {
    let app = setup_app();
    let payload = json!({
        "theater_id": 1,
        "movie_id": 1,
        "seat_ids": ["A1"],
        "customer_id": "Alice",
    });

    let (status, _) = post_reservation(&app, payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_reservation(&app, payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "SEAT_UNAVAILABLE");
    assert_eq!(error.message, "Seat A1 is not available");
}

#[tokio::test]
async fn test_reservation_error_status_codes() {
    let app = setup_app();

    let cases = [
        (
            json!({"theater_id": 1, "movie_id": 1, "seat_ids": [], "customer_id": "X"}),
            StatusCode::BAD_REQUEST,
            "INVALID_REQUEST",
        ),
        (
            json!({"theater_id": 9, "movie_id": 1, "seat_ids": ["A1"], "customer_id": "X"}),
            StatusCode::NOT_FOUND,
            "THEATER_NOT_FOUND",
        ),
        (
            json!({"theater_id": 1, "movie_id": 9, "seat_ids": ["A1"], "customer_id": "X"}),
            StatusCode::NOT_FOUND,
            "SHOW_NOT_FOUND",
        ),
        (
            json!({"theater_id": 1, "movie_id": 1, "seat_ids": ["Z9"], "customer_id": "X"}),
            StatusCode::NOT_FOUND,
            "SEAT_NOT_FOUND",
        ),
    ];

    for (payload, expected_status, expected_error) in cases {
        let (status, body) = post_reservation(&app, payload).await;
        assert_eq!(status, expected_status);
        let error: ErrorResponse = parse(&body);
        assert_eq!(error.error, expected_error);
    }

    // いずれの失敗でも座席は変わらない
    let (_, body) = get(&app, "/theaters/1/movies/1/seats").await;
    let seats: Vec<SeatResponse> = parse(&body);
    assert_eq!(seats.len(), 20);
}
