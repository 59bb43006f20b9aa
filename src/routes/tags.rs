//! # 태그 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/tags | `list_tags` | 전체 태그 목록 |
//! | GET | /api/tags/{id}/contents | `list_tag_contents` | 태그가 붙은 콘텐츠 목록 |
//! | DELETE | /api/tags | `delete_all_tags` | 모든 태그와 연결 삭제 |
//!
//! 태그는 콘텐츠 생성/수정 요청의 `tags` 필드로 만들어지므로 별도의 생성 API는 없습니다.

use crate::{error::AppError, models::*, routes::contents::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// 전체 태그 목록을 조회합니다.
///
/// `GET /api/tags` → `[{ "id": 1, "name": "..." }, ...]`
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, AppError> {
    let tags = state.tags.list().await?;
    Ok(Json(tags))
}

/// 태그가 붙은 콘텐츠 목록을 조회합니다. 각 항목에 `tagId`가 붙습니다.
///
/// 존재하지 않는 태그 id면 빈 배열을 돌려줍니다.
pub async fn list_tag_contents(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<TaggedContent>>, AppError> {
    let contents = state.tags.contents_by_tag(id).await?;
    Ok(Json(contents))
}

/// 모든 태그를 삭제합니다 (관리용).
///
/// `DELETE /api/tags` → `204 No Content`
/// `content_tags`의 `ON DELETE CASCADE`로 모든 연결도 함께 사라집니다.
pub async fn delete_all_tags(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.tags.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}
