//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `content`: 콘텐츠(Content)와 요청/응답 구조체
//! - `history`: 콘텐츠 버전 기록(ContentHistory)
//! - `tag`: 태그(Tag)
//!
//! `pub use X::*;`로 하위 모듈의 공개 항목을 재공개하여
//! `crate::models::Content`처럼 짧게 접근할 수 있게 합니다.

pub mod content;
pub mod history;
pub mod tag;

pub use content::*;
pub use history::*;
pub use tag::*;
