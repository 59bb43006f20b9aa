use crate::{error::AppError, models::*};
use axum::{
    extract::{Path, State},
    Json,
};

use super::contents::AppState;

/// `GET /contents/{id}/history` — 최신 버전이 먼저 옵니다.
pub async fn list_content_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ContentHistory>>, AppError> {
    let history = state.contents.list_history(id).await?;
    Ok(Json(history))
}

/// `POST /contents/{id}/rollback/{version}` — 해당 버전의 내용으로 되돌립니다.
/// 되돌린 결과도 새 버전으로 기록되므로 기록은 줄어들지 않습니다.
pub async fn rollback_content(
    State(state): State<AppState>,
    Path((id, version)): Path<(i64, i64)>,
) -> Result<Json<ContentWithTags>, AppError> {
    let content = state.contents.rollback(id, version).await?;
    Ok(Json(content))
}
