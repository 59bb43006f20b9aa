//! # 태그 데이터베이스 쿼리 모듈
//!
//! 태그 및 콘텐츠-태그 관계를 관리하는 SQL 쿼리 함수들입니다.
//!
//! ## 테이블 구조
//! - `tags`: 태그 엔티티 (id, name UNIQUE)
//! - `content_tags`: 콘텐츠와 태그의 다대다(N:M) 관계 테이블

use crate::error::AppError;
use crate::models::*;
use sqlx::SqliteConnection;

/// 모든 태그를 id 순으로 조회합니다.
pub async fn list_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>, AppError> {
    let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;

    Ok(tags)
}

/// 이름이 정확히 일치하는 태그를 찾습니다.
pub async fn find_tag_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Tag>, AppError> {
    let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(tag)
}

/// 새 태그를 삽입합니다.
///
/// 같은 이름이 이미 있으면 `name UNIQUE` 제약 위반으로 실패합니다.
/// 이 경우를 구분할 수 있도록 `sqlx::Error`를 그대로 돌려줍니다.
pub async fn insert_tag(conn: &mut SqliteConnection, name: &str) -> Result<Tag, sqlx::Error> {
    let result = sqlx::query("INSERT INTO tags (name) VALUES (?)")
        .bind(name)
        .execute(&mut *conn)
        .await?;

    Ok(Tag {
        id: result.last_insert_rowid(),
        name: name.to_string(),
    })
}

/// 모든 태그를 삭제합니다. `content_tags`는 CASCADE로 함께 비워집니다.
///
/// 삭제된 태그 수를 반환합니다.
pub async fn delete_all_tags(conn: &mut SqliteConnection) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM tags").execute(&mut *conn).await?;

    Ok(result.rows_affected())
}

/// 콘텐츠에 태그를 연결합니다.
///
/// `INSERT OR IGNORE`: 이미 같은 (content_id, tag_id) 조합이 있으면 무시합니다.
/// 복합 기본키 덕분에 중복 연결은 생기지 않습니다.
pub async fn add_tag_to_content(
    conn: &mut SqliteConnection,
    content_id: i64,
    tag_id: i64,
) -> Result<(), AppError> {
    sqlx::query("INSERT OR IGNORE INTO content_tags (content_id, tag_id) VALUES (?, ?)")
        .bind(content_id)
        .bind(tag_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// 콘텐츠의 모든 태그 연결을 해제합니다. 태그 자체는 남습니다.
pub async fn clear_content_tags(
    conn: &mut SqliteConnection,
    content_id: i64,
) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM content_tags WHERE content_id = ?")
        .bind(content_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

/// 특정 콘텐츠에 연결된 모든 태그를 조회합니다.
pub async fn get_content_tags(
    conn: &mut SqliteConnection,
    content_id: i64,
) -> Result<Vec<Tag>, AppError> {
    let tags = sqlx::query_as::<_, Tag>(
        r#"
        SELECT t.id, t.name
        FROM tags t
        JOIN content_tags ct ON ct.tag_id = t.id
        WHERE ct.content_id = ?
        ORDER BY t.id
        "#,
    )
    .bind(content_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(tags)
}

/// 전체 (content_id, 태그 이름) 쌍. 목록 응답에서 콘텐츠별로 묶는 데 씁니다.
pub async fn list_content_tag_names(
    conn: &mut SqliteConnection,
) -> Result<Vec<(i64, String)>, AppError> {
    let rows: Vec<(i64, String)> = sqlx::query_as(
        r#"
        SELECT ct.content_id, t.name
        FROM content_tags ct
        JOIN tags t ON t.id = ct.tag_id
        ORDER BY ct.content_id, t.id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}
