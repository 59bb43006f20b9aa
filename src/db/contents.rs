//! # 콘텐츠 데이터베이스 쿼리 모듈
//!
//! `contents` 테이블에 대한 CRUD 쿼리 함수들입니다.
//!
//! 모든 함수는 `&mut SqliteConnection`을 받습니다. 풀에서 빌린 연결이든
//! 트랜잭션이든 `&mut *conn` 형태로 넘길 수 있어서, 호출하는 쪽(services/)이
//! 원자성 범위를 결정합니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqliteConnection;

/// 모든 콘텐츠를 id 순으로 조회합니다.
pub async fn list_contents(conn: &mut SqliteConnection) -> Result<Vec<Content>, AppError> {
    // r#"..."#: Raw 문자열 리터럴. SQL을 그대로 쓸 수 있습니다.
    let contents = sqlx::query_as::<_, Content>(
        r#"
        SELECT id, title, body, views
        FROM contents
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(contents)
}

/// ID로 단일 콘텐츠를 조회합니다.
///
/// # 반환값
/// - `Ok(Some(Content))`: 콘텐츠를 찾은 경우
/// - `Ok(None)`: 해당 ID의 콘텐츠가 없는 경우
pub async fn get_content(conn: &mut SqliteConnection, id: i64) -> Result<Option<Content>, AppError> {
    let content = sqlx::query_as::<_, Content>(
        "SELECT id, title, body, views FROM contents WHERE id = ?",
    )
    .bind(id)
    // .fetch_optional(): 결과가 0행이면 None, 1행이면 Some(Content)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(content)
}

/// 새 콘텐츠를 삽입하고 생성된 id를 반환합니다. `views`는 DEFAULT 0입니다.
pub async fn insert_content(
    conn: &mut SqliteConnection,
    title: &str,
    body: Option<&str>,
) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO contents (title, body) VALUES (?, ?)")
        .bind(title)
        .bind(body) // Option도 bind 가능 — None이면 SQL NULL
        .execute(&mut *conn)
        .await?;

    // .last_insert_rowid(): AUTOINCREMENT로 부여된 id
    Ok(result.last_insert_rowid())
}

/// 조회수를 1 증가시킵니다.
///
/// `views = views + 1`을 한 문장으로 실행하므로 동시 조회에서도 증가분이 유실되지 않습니다.
/// 해당 id가 없으면 `false`를 반환합니다.
pub async fn increment_views(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("UPDATE contents SET views = views + 1 WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// 콘텐츠를 부분 수정합니다.
///
/// `Some`인 필드만 SQL에 포함합니다. 둘 다 `None`이면 아무 쿼리도 실행하지 않습니다.
pub async fn update_content(
    conn: &mut SqliteConnection,
    id: i64,
    title: Option<&str>,
    body: Option<&str>,
) -> Result<(), AppError> {
    // ── 동적 쿼리 구성 ──
    let mut assignments = Vec::new();
    let mut bindings = Vec::new();

    if let Some(title) = title {
        assignments.push("title = ?");
        bindings.push(title);
    }

    if let Some(body) = body {
        assignments.push("body = ?");
        bindings.push(body);
    }

    if assignments.is_empty() {
        return Ok(());
    }

    let query = format!("UPDATE contents SET {} WHERE id = ?", assignments.join(", "));

    let mut query_builder = sqlx::query(&query);
    for binding in bindings {
        query_builder = query_builder.bind(binding);
    }

    query_builder.bind(id).execute(&mut *conn).await?;

    Ok(())
}

/// 제목과 본문을 스냅샷 값으로 통째로 덮어씁니다 (롤백용).
///
/// `update_content`와 달리 `body`가 `None`이면 NULL로 덮어씁니다.
pub async fn restore_content(
    conn: &mut SqliteConnection,
    id: i64,
    title: &str,
    body: Option<&str>,
) -> Result<bool, AppError> {
    let result = sqlx::query("UPDATE contents SET title = ?, body = ? WHERE id = ?")
        .bind(title)
        .bind(body)
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// 콘텐츠를 삭제합니다.
///
/// 스키마의 `ON DELETE CASCADE`로 `content_history`와 `content_tags`의
/// 관련 행도 함께 삭제됩니다. `tags` 행은 남습니다.
///
/// # 반환값
/// - `Ok(true)`: 삭제 성공
/// - `Ok(false)`: 해당 ID의 콘텐츠가 없음
pub async fn delete_content(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM contents WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// 특정 태그가 연결된 콘텐츠들을 조회합니다.
///
/// ```sql
/// contents ←── content_tags ──→ tags
/// ```
pub async fn list_contents_by_tag(
    conn: &mut SqliteConnection,
    tag_id: i64,
) -> Result<Vec<TaggedContent>, AppError> {
    let contents = sqlx::query_as::<_, TaggedContent>(
        r#"
        SELECT c.id, c.title, c.body, c.views, ct.tag_id
        FROM contents c
        JOIN content_tags ct ON ct.content_id = c.id
        WHERE ct.tag_id = ?
        ORDER BY c.id
        "#,
    )
    .bind(tag_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(contents)
}
