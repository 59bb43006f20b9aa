//! # 콘텐츠 모델 정의
//!
//! `contents` 테이블 한 행과, API가 주고받는 요청/응답 구조체들입니다.
//!
//! ## 구조체 역할
//! - `Content`: DB에 저장된 콘텐츠 (id, 제목, 본문, 조회수)
//! - `ContentWithTags`: 콘텐츠 + 연결된 태그 이름 목록 (대부분의 응답 형태)
//! - `TaggedContent`: 특정 태그로 조회한 콘텐츠 (`GET /tags/{id}/contents`)
//! - `CreateContentRequest` / `UpdateContentRequest`: 요청 본문

use serde::{Deserialize, Serialize};

/// 콘텐츠 엔티티 — DB의 `contents` 테이블 한 행에 대응합니다.
///
/// `views`는 `GET /contents/{id}`로 조회할 때마다 1씩 증가합니다.
/// 수정(update)이나 롤백(rollback)은 `views`를 건드리지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Content {
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub views: i64,
}

/// 콘텐츠와 그 콘텐츠에 연결된 태그 이름들.
///
/// `#[serde(flatten)]`: 내부 `Content`의 필드를 같은 JSON 객체 레벨로 펼칩니다.
/// 결과: `{ "id": 1, "title": "...", "body": "...", "views": 0, "tags": ["a"] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentWithTags {
    #[serde(flatten)]
    pub content: Content,
    pub tags: Vec<String>,
}

/// 태그 기준으로 조회한 콘텐츠. 어떤 태그로 찾았는지 `tagId`를 함께 돌려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TaggedContent {
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub views: i64,
    pub tag_id: i64,
}

/// 콘텐츠 생성 요청 — `POST /api/contents`
#[derive(Debug, Deserialize)]
pub struct CreateContentRequest {
    pub title: String,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// 콘텐츠 수정 요청 — `PUT /api/contents/{id}`
///
/// 빠진 필드는 변경하지 않습니다. `tags`는 세 가지 의미를 가집니다:
/// - 필드 없음(`None`): 태그 연결을 그대로 둠
/// - 빈 배열(`Some(vec![])`): 모든 태그 연결 해제
/// - 이름 목록: 정확히 그 태그들로 교체
#[derive(Debug, Default, Deserialize)]
pub struct UpdateContentRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}
