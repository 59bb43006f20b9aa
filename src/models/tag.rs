//! # 태그 모델 정의
//!
//! 태그는 여러 콘텐츠가 공유하는 어휘(vocabulary)입니다.
//! 어떤 콘텐츠에서도 쓰이지 않게 되어도 자동으로 삭제되지 않습니다.

use serde::{Deserialize, Serialize};

/// 태그 엔티티 — DB의 `tags` 테이블 한 행(row)에 대응합니다.
///
/// - `Serialize`: API 응답 시 JSON으로 변환
/// - `sqlx::FromRow`: SQL 쿼리 결과(행)를 이 구조체로 자동 매핑
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    /// 태그 고유 식별자 (AUTOINCREMENT 정수)
    pub id: i64,
    /// 태그 이름 (UNIQUE)
    pub name: String,
}
