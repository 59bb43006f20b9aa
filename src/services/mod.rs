//! # 비즈니스 로직 모듈
//!
//! 라우트 핸들러와 DB 쿼리 사이에서 트랜잭션 범위를 정하고 규칙을 지키는 계층입니다.
//! - `versioning`: 콘텐츠 생성/수정/롤백과 버전 기록
//! - `tagging`: 태그 이름 해석과 콘텐츠-태그 연결 조정

pub mod tagging;
pub mod versioning;

pub use tagging::TagService;
pub use versioning::ContentService;
