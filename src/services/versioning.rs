//! # 콘텐츠 버전 관리 서비스
//!
//! 콘텐츠의 모든 변경(생성/수정/롤백)은 `content_history`에 새 버전을 하나씩 추가합니다.
//!
//! ## 규칙
//! - 버전 번호는 콘텐츠마다 1부터 시작해 성공한 변경마다 정확히 1씩 증가합니다
//! - 기록은 추가만 됩니다. 수정되거나 지워지는 경우는 콘텐츠 삭제 시 CASCADE뿐입니다
//! - 롤백은 과거 스냅샷을 "새 버전"으로 다시 기록합니다. 기록을 되감지 않습니다
//!
//! 여러 쿼리로 이루어진 작업은 모두 하나의 트랜잭션 안에서 실행됩니다.
//! `tx.commit()` 전에 `?`로 빠져나가면 트랜잭션이 drop되면서 자동으로 롤백됩니다.

use std::collections::HashMap;

use sqlx::{SqliteConnection, SqlitePool};

use crate::{db, error::AppError, models::*, services::tagging};

/// 콘텐츠와 그 버전 기록을 다루는 서비스.
///
/// 연결 풀을 생성 시점에 주입받습니다. `SqlitePool`은 내부적으로 `Arc`라서
/// clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct ContentService {
    pool: SqlitePool,
}

impl ContentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 전체 콘텐츠와 각 콘텐츠의 태그 이름들.
    pub async fn list(&self) -> Result<Vec<ContentWithTags>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let contents = db::list_contents(&mut conn).await?;
        let mut tag_names: HashMap<i64, Vec<String>> = HashMap::new();
        for (content_id, name) in db::list_content_tag_names(&mut conn).await? {
            tag_names.entry(content_id).or_default().push(name);
        }

        Ok(contents
            .into_iter()
            .map(|content| {
                let tags = tag_names.remove(&content.id).unwrap_or_default();
                ContentWithTags { content, tags }
            })
            .collect())
    }

    /// 콘텐츠를 만들고 버전 1을 기록합니다. `tags`가 있으면 같은 트랜잭션에서 연결합니다.
    pub async fn create(
        &self,
        title: &str,
        body: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<ContentWithTags, AppError> {
        let mut tx = db::begin_write(&self.pool).await?;

        let id = db::insert_content(&mut tx, title, body).await?;
        let version = db::append_version(&mut tx, id, title, body).await?;
        if let Some(names) = tags {
            tagging::reconcile(&mut tx, id, names).await?;
        }
        let content = load_with_tags(&mut tx, id).await?;

        tx.commit().await?;

        tracing::info!(content_id = id, version, "created content");
        Ok(content)
    }

    /// 콘텐츠를 조회하면서 조회수를 1 올립니다. 증가 후의 값을 반환합니다.
    pub async fn get_by_id(&self, id: i64) -> Result<ContentWithTags, AppError> {
        let mut tx = db::begin_write(&self.pool).await?;

        if !db::increment_views(&mut tx, id).await? {
            return Err(AppError::NotFound);
        }
        let content = load_with_tags(&mut tx, id).await?;

        tx.commit().await?;
        Ok(content)
    }

    /// 지정한 필드만 수정하고 수정 결과 전체를 새 버전으로 기록합니다.
    ///
    /// 필드가 하나도 없어도 버전은 하나 늘어납니다.
    /// `tags`: `None`이면 연결 유지, `Some(&[])`이면 전부 해제, 그 외에는 교체.
    pub async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        body: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<ContentWithTags, AppError> {
        let mut tx = db::begin_write(&self.pool).await?;

        if db::get_content(&mut tx, id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        db::update_content(&mut tx, id, title, body).await?;
        let current = db::get_content(&mut tx, id)
            .await?
            .ok_or(AppError::Internal("content disappeared during update".to_string()))?;
        let version =
            db::append_version(&mut tx, id, &current.title, current.body.as_deref()).await?;

        if let Some(names) = tags {
            tagging::reconcile(&mut tx, id, names).await?;
        }
        let content = load_with_tags(&mut tx, id).await?;

        tx.commit().await?;

        tracing::info!(content_id = id, version, "updated content");
        Ok(content)
    }

    /// `target_version`의 제목/본문으로 되돌리고, 그 스냅샷을 최신 버전 + 1로 기록합니다.
    pub async fn rollback(&self, id: i64, target_version: i64) -> Result<ContentWithTags, AppError> {
        let mut tx = db::begin_write(&self.pool).await?;

        let snapshot = db::get_version(&mut tx, id, target_version)
            .await?
            .ok_or(AppError::NotFound)?;

        if !db::restore_content(&mut tx, id, &snapshot.title, snapshot.body.as_deref()).await? {
            return Err(AppError::NotFound);
        }
        let version =
            db::append_version(&mut tx, id, &snapshot.title, snapshot.body.as_deref()).await?;
        let content = load_with_tags(&mut tx, id).await?;

        tx.commit().await?;

        tracing::info!(content_id = id, target_version, version, "rolled back content");
        Ok(content)
    }

    /// 콘텐츠를 삭제합니다. 기록과 태그 연결은 CASCADE로 지워지고 태그는 남습니다.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;

        if !db::delete_content(&mut conn, id).await? {
            return Err(AppError::NotFound);
        }

        tracing::info!(content_id = id, "deleted content");
        Ok(())
    }

    /// 버전 내림차순 기록. 기록이 하나도 없으면 `NotFound`.
    pub async fn list_history(&self, id: i64) -> Result<Vec<ContentHistory>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let history = db::list_history(&mut conn, id).await?;
        if history.is_empty() {
            return Err(AppError::NotFound);
        }
        Ok(history)
    }
}

/// 현재 콘텐츠 행과 태그 이름들을 함께 읽습니다.
async fn load_with_tags(conn: &mut SqliteConnection, id: i64) -> Result<ContentWithTags, AppError> {
    let content = db::get_content(conn, id).await?.ok_or(AppError::NotFound)?;
    let tags = db::get_content_tags(conn, id)
        .await?
        .into_iter()
        .map(|tag| tag.name)
        .collect();

    Ok(ContentWithTags { content, tags })
}
