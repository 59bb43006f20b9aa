use crate::models::ContentHistory;
use chrono::{SecondsFormat, Utc};
use sqlx::SqliteConnection;

/// 콘텐츠의 현재 최신 버전 번호. 기록이 없으면 0.
pub async fn latest_version(
    conn: &mut SqliteConnection,
    content_id: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COALESCE(MAX(version), 0) FROM content_history WHERE content_id = ?",
    )
    .bind(content_id)
    .fetch_one(&mut *conn)
    .await
}

/// 새 버전 기록을 추가하고 부여된 버전 번호를 반환합니다.
///
/// 버전 번호는 `latest_version + 1`. 호출하는 쪽이 같은 트랜잭션 안에서
/// 콘텐츠 수정과 함께 실행해야 번호가 중복되지 않습니다.
/// `UNIQUE(content_id, version)` 제약이 마지막 방어선입니다.
pub async fn append_version(
    conn: &mut SqliteConnection,
    content_id: i64,
    title: &str,
    body: Option<&str>,
) -> Result<i64, sqlx::Error> {
    let next_version = latest_version(conn, content_id).await? + 1;
    let updated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    sqlx::query(
        r#"
        INSERT INTO content_history (content_id, title, body, version, updated_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(content_id)
    .bind(title)
    .bind(body)
    .bind(next_version)
    .bind(&updated_at)
    .execute(&mut *conn)
    .await?;

    Ok(next_version)
}

pub async fn get_version(
    conn: &mut SqliteConnection,
    content_id: i64,
    version: i64,
) -> Result<Option<ContentHistory>, sqlx::Error> {
    sqlx::query_as::<_, ContentHistory>(
        r#"
        SELECT id, content_id, title, body, version, updated_at
        FROM content_history
        WHERE content_id = ? AND version = ?
        "#,
    )
    .bind(content_id)
    .bind(version)
    .fetch_optional(&mut *conn)
    .await
}

/// 최신 버전이 먼저 오도록 정렬된 전체 기록.
pub async fn list_history(
    conn: &mut SqliteConnection,
    content_id: i64,
) -> Result<Vec<ContentHistory>, sqlx::Error> {
    sqlx::query_as::<_, ContentHistory>(
        r#"
        SELECT id, content_id, title, body, version, updated_at
        FROM content_history
        WHERE content_id = ?
        ORDER BY version DESC
        "#,
    )
    .bind(content_id)
    .fetch_all(&mut *conn)
    .await
}
