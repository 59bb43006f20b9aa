//! # content-history
//!
//! 버전 기록과 태그를 지원하는 콘텐츠 CRUD 서버의 라이브러리 부분입니다.
//! `main.rs`와 통합 테스트(`tests/`)가 같은 라우터를 조립할 수 있도록 모듈을 공개합니다.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use routes::AppState;

/// 전체 애플리케이션 라우터.
///
/// - `/api/*`: REST API
/// - 그 외 경로: `public_path`의 정적 파일 (디렉토리가 없으면 API만 서빙)
pub fn app(state: AppState, public_path: &str) -> Router {
    // 개발 편의를 위해 모든 출처/메서드/헤더를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().nest("/api", routes::api_router(state));

    let router = if std::path::Path::new(public_path).exists() {
        tracing::info!("Serving static files from {}", public_path);
        router.fallback_service(ServeDir::new(public_path))
    } else {
        tracing::warn!("Static directory {} not found, serving API only", public_path);
        router
    };

    router.layer(cors).layer(TraceLayer::new_for_http())
}
