//! # 태그 조정(Reconciliation) 서비스
//!
//! 콘텐츠의 태그 연결을 "원하는 이름 목록"과 정확히 일치하도록 맞춥니다.
//!
//! ## 처리 흐름
//! 1. `resolve_or_create`: 이름마다 기존 태그를 찾거나 새로 만듭니다
//! 2. `reconcile`: 콘텐츠의 기존 연결을 모두 지우고, 해석된 태그들로 다시 연결합니다
//!
//! 두 함수 모두 `&mut SqliteConnection`을 받으므로, 콘텐츠 생성/수정과
//! 같은 트랜잭션 안에서 실행됩니다. 연결이 끊긴 태그는 삭제하지 않습니다.

use std::collections::BTreeSet;

use sqlx::{SqliteConnection, SqlitePool};

use crate::{db, error::AppError, models::*};

/// 태그 이름들을 태그 엔티티로 해석합니다. 없는 이름은 새로 만듭니다.
///
/// 이름은 앞뒤 공백을 잘라 저장하고, 잘라낸 뒤 같은 이름은 하나로 합쳐집니다.
///
/// 존재 여부를 먼저 확인하지 않고 바로 INSERT를 시도합니다.
/// `name UNIQUE` 위반은 "이미 있다(혹은 다른 요청이 방금 만들었다)"는 뜻이므로
/// 에러로 올리지 않고 이름으로 다시 조회합니다.
pub async fn resolve_or_create(
    conn: &mut SqliteConnection,
    names: &[String],
) -> Result<Vec<Tag>, AppError> {
    let distinct: BTreeSet<&str> = names.iter().map(|name| name.trim()).collect();
    let mut tags = Vec::with_capacity(distinct.len());

    for name in distinct {
        let tag = match db::insert_tag(conn, name).await {
            Ok(tag) => {
                tracing::debug!(tag_id = tag.id, name, "created tag");
                tag
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                db::find_tag_by_name(conn, name).await?.ok_or_else(|| {
                    AppError::Internal(format!("tag '{name}' vanished after unique conflict"))
                })?
            }
            Err(e) => return Err(e.into()),
        };
        tags.push(tag);
    }

    Ok(tags)
}

/// 콘텐츠의 태그 연결을 `names`와 정확히 일치하도록 교체합니다.
///
/// 빈 목록이면 모든 연결이 해제됩니다. "변경 없음"은 호출하지 않는 것으로 표현합니다.
/// 실제로 연결된 태그 목록을 반환합니다.
pub async fn reconcile(
    conn: &mut SqliteConnection,
    content_id: i64,
    names: &[String],
) -> Result<Vec<Tag>, AppError> {
    let tags = resolve_or_create(conn, names).await?;

    db::clear_content_tags(conn, content_id).await?;
    for tag in &tags {
        db::add_tag_to_content(conn, content_id, tag.id).await?;
    }

    Ok(tags)
}

/// 태그 어휘 전체를 다루는 읽기/관리 작업.
#[derive(Clone)]
pub struct TagService {
    pool: SqlitePool,
}

impl TagService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Tag>, AppError> {
        let mut conn = self.pool.acquire().await?;
        db::list_tags(&mut conn).await
    }

    /// 태그가 붙은 콘텐츠 목록. 없는 태그 id면 빈 목록입니다.
    pub async fn contents_by_tag(&self, tag_id: i64) -> Result<Vec<TaggedContent>, AppError> {
        let mut conn = self.pool.acquire().await?;
        db::list_contents_by_tag(&mut conn, tag_id).await
    }

    /// 관리용: 모든 태그와 모든 연결을 삭제합니다.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let mut tx = db::begin_write(&self.pool).await?;
        let deleted = db::delete_all_tags(&mut tx).await?;
        tx.commit().await?;

        tracing::info!(deleted, "deleted all tags");
        Ok(deleted)
    }
}
