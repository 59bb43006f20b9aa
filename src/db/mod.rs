//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 서비스 계층(services/)이 트랜잭션을 열고, 이 모듈의 함수에
//! 그 트랜잭션의 연결(`&mut SqliteConnection`)을 넘겨 쿼리를 실행합니다.
//! 그래서 여러 쿼리가 하나의 원자적 단위로 묶입니다.
//!
//! 각 하위 모듈:
//! - `contents`: 콘텐츠 CRUD 쿼리
//! - `history`: 버전 기록 쿼리
//! - `tags`: 태그 및 콘텐츠-태그 관계 쿼리

pub mod contents;
pub mod history;
pub mod tags;

pub use contents::*;
pub use history::*;
pub use tags::*;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{Sqlite, SqlitePool, SqlitePoolOptions};
use sqlx::Transaction;

/// `./migrations` 폴더의 SQL 파일들을 컴파일 타임에 바이너리에 포함시킵니다.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// SQLite 연결 풀을 만들고 마이그레이션을 실행합니다.
///
/// sqlx의 SQLite 연결은 기본적으로 `foreign_keys = ON`이므로
/// `ON DELETE CASCADE`가 그대로 동작합니다.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!("Running database migrations...");
    MIGRATOR.run(&pool).await?;

    Ok(pool)
}

/// 쓰기 트랜잭션을 시작합니다.
///
/// `BEGIN IMMEDIATE`로 시작 시점에 쓰기 잠금을 잡습니다.
/// 기본 `BEGIN`(DEFERRED)은 읽기 잠금을 쓰기 잠금으로 올리는 중에 다른 연결과 부딪히면
/// busy timeout 없이 바로 `database is locked`를 돌려줍니다.
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

/// 테스트용 인메모리 DB.
///
/// `sqlite::memory:`는 연결마다 별개의 DB가 되므로 연결을 하나로 고정하고,
/// 유휴 타임아웃으로 연결이 닫혀 데이터가 사라지지 않게 합니다.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<std::time::Duration>)
        .max_lifetime(None::<std::time::Duration>)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}
