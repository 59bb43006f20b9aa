//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `contents`: 콘텐츠 CRUD 핸들러와 `AppState`
//! - `history`: 버전 기록 조회와 롤백
//! - `tags`: 태그 조회/삭제
//! - `health`: 서버 상태 확인

pub mod contents;
pub mod health;
pub mod history;
pub mod tags;

pub use contents::*;
pub use health::*;
pub use history::*;
pub use tags::*;

use axum::{
    routing::{get, post},
    Router,
};

/// `/api` 아래에 붙는 모든 라우트.
///
/// Axum 0.8부터 경로 파라미터는 `{id}` 문법을 씁니다.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // 콘텐츠 CRUD
        .route("/contents", get(list_contents).post(create_content))
        .route(
            "/contents/{id}",
            get(get_content).put(update_content).delete(delete_content),
        )
        // 버전 기록과 롤백
        .route("/contents/{id}/history", get(list_content_history))
        .route("/contents/{id}/rollback/{version}", post(rollback_content))
        // 태그
        .route("/tags", get(list_tags).delete(delete_all_tags))
        .route("/tags/{id}/contents", get(list_tag_contents))
        .route("/health", get(health_check))
        .with_state(state)
}
