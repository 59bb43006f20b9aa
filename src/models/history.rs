use serde::{Deserialize, Serialize};

/// `content_history` 한 행. 수정 직후의 제목/본문 스냅샷입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContentHistory {
    pub id: i64,
    pub content_id: i64,
    pub title: String,
    pub body: Option<String>,
    pub version: i64,
    pub updated_at: String,
}
