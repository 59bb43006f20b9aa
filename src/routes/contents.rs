//! # 콘텐츠(Content) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /api/contents`      → 콘텐츠 목록 조회
//! - `POST   /api/contents`      → 새 콘텐츠 생성 (201)
//! - `GET    /api/contents/{id}` → 단일 콘텐츠 조회 (조회수 +1)
//! - `PUT    /api/contents/{id}` → 콘텐츠 수정 (새 버전 기록)
//! - `DELETE /api/contents/{id}` → 콘텐츠 삭제 (204)
//!
//! ## Axum 핸들러 패턴
//! - `State(state)`: 앱 전역 상태 (서비스들)
//! - `Path(id)`: URL 경로 파라미터. 숫자가 아니면 Axum이 400으로 거절합니다
//! - `Json(body)`: 요청 본문을 구조체로 파싱. 필수 필드가 없으면 422로 거절합니다

use crate::{
    error::AppError,
    models::*,
    services::{ContentService, TagService},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 서비스들은 시작 시 만든 연결 풀 하나를 주입받아 생성됩니다.
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
#[derive(Clone)]
pub struct AppState {
    pub contents: ContentService,
    pub tags: TagService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            contents: ContentService::new(pool.clone()),
            tags: TagService::new(pool),
        }
    }
}

/// 제목은 빈 문자열일 수 없습니다.
fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }
    Ok(())
}

/// 태그 이름도 공백뿐일 수 없습니다. 앞뒤 공백은 저장할 때 잘립니다.
fn validate_tags(tags: Option<&[String]>) -> Result<(), AppError> {
    if tags.is_some_and(|names| names.iter().any(|name| name.trim().is_empty())) {
        return Err(AppError::BadRequest("tag names must not be empty".to_string()));
    }
    Ok(())
}

/// `GET /contents` — 전체 콘텐츠 목록 (각 항목에 `tags` 포함)
pub async fn list_contents(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContentWithTags>>, AppError> {
    let contents = state.contents.list().await?;
    Ok(Json(contents))
}

/// `POST /contents` — 콘텐츠를 만들고 버전 1을 기록합니다.
///
/// 반환 타입 `(StatusCode, Json<T>)`: Axum이 튜플을 "상태 코드 + JSON 본문" 응답으로 바꿉니다.
pub async fn create_content(
    State(state): State<AppState>,
    Json(req): Json<CreateContentRequest>,
) -> Result<(StatusCode, Json<ContentWithTags>), AppError> {
    validate_title(&req.title)?;
    validate_tags(req.tags.as_deref())?;

    let content = state
        .contents
        .create(&req.title, req.body.as_deref(), req.tags.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(content)))
}

/// `GET /contents/{id}` — 조회할 때마다 `views`가 1 증가합니다.
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContentWithTags>, AppError> {
    let content = state.contents.get_by_id(id).await?;
    Ok(Json(content))
}

/// `PUT /contents/{id}` — 보낸 필드만 수정하고 새 버전을 기록합니다.
///
/// `tags`를 빼면 태그 연결은 그대로, `[]`를 보내면 모두 해제됩니다.
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateContentRequest>,
) -> Result<Json<ContentWithTags>, AppError> {
    if let Some(title) = &req.title {
        validate_title(title)?;
    }
    validate_tags(req.tags.as_deref())?;

    let content = state
        .contents
        .update(
            id,
            req.title.as_deref(),
            req.body.as_deref(),
            req.tags.as_deref(),
        )
        .await?;
    Ok(Json(content))
}

/// `DELETE /contents/{id}` — 성공 시 HTTP 204 No Content (본문 없음)
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.contents.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
