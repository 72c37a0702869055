#![allow(dead_code)]

//! Test infrastructure for pm-server API tests

use pm_core::{Board, Column, Iteration, IterationStatus, WorkItem};
use pm_db::{BoardRepository, ColumnRepository, IterationRepository, WorkItemRepository};
use pm_metrics::{MetricsService, MetricsSettings};
use pm_server::AppState;

use axum::{Router, body::Body, http::Request, response::Response};
use chrono::{DateTime, Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

pub fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    pm_db::connect_in_memory()
        .await
        .expect("Failed to create test database")
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let metrics = MetricsService::sqlite(pool.clone(), MetricsSettings::default());
    AppState::new(pool, metrics)
}

/// Board with a To Do and a Done column
pub struct TestBoard {
    pub board: Board,
    pub todo: Column,
    pub done: Column,
}

pub async fn create_test_board(pool: &SqlitePool) -> TestBoard {
    let board = Board::new("API".to_string(), None);
    BoardRepository::new(pool.clone())
        .create(&board)
        .await
        .expect("Failed to create board");

    let columns = ColumnRepository::new(pool.clone());
    let todo = Column::new(board.id, "To Do".to_string(), 0);
    let done = Column::new_done(board.id, "Done".to_string(), 1);
    columns.create(&todo).await.expect("Failed to create column");
    columns.create(&done).await.expect("Failed to create column");

    TestBoard { board, todo, done }
}

pub async fn create_test_iteration(
    pool: &SqlitePool,
    board_id: Uuid,
    status: IterationStatus,
    start: DateTime<Utc>,
    days: i64,
) -> Iteration {
    let end = start + Duration::days(days - 1);
    let mut iteration = Iteration::new(board_id, "Sprint".to_string(), Some(start), Some(end));
    iteration.status = status;
    if status == IterationStatus::Closed {
        iteration.closed_at = Some(end);
    }
    IterationRepository::new(pool.clone())
        .create(&iteration)
        .await
        .expect("Failed to create iteration");
    iteration
}

pub async fn create_test_work_item(
    pool: &SqlitePool,
    board_id: Uuid,
    column_id: Uuid,
    iteration_id: Uuid,
    story_points: Option<i32>,
) -> WorkItem {
    let mut item = WorkItem::new(board_id, column_id, "Card".to_string());
    item.iteration_id = Some(iteration_id);
    item.story_points = story_points;
    WorkItemRepository::new(pool.clone())
        .create(&item)
        .await
        .expect("Failed to create work item");
    item
}

pub async fn send(app: Router, method: &str, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
