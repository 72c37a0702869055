use pm_core::{Board, Column};
use pm_db::{BoardRepository, ColumnRepository};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    pm_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a board so foreign keys on columns, iterations and items hold
pub async fn create_test_board(pool: &SqlitePool) -> Board {
    let board = Board::new("Test Board".to_string(), None);
    BoardRepository::new(pool.clone())
        .create(&board)
        .await
        .expect("Failed to create test board");
    board
}

pub async fn create_test_column(pool: &SqlitePool, column: &Column) {
    ColumnRepository::new(pool.clone())
        .create(column)
        .await
        .expect("Failed to create test column");
}
