//! # content-history 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 연결 풀 생성 + 마이그레이션
//! 4. 서비스/상태 생성 (연결 풀 주입)
//! 5. 라우터 조립과 HTTP 서버 시작

use anyhow::Result; // 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use content_history::{config::Config, db, routes::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .ok(): .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "content_history=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env();
    tracing::info!("Starting content-history server on {}", config.bind_addr());

    // ── 4단계: SQLite 연결 풀 생성 + 마이그레이션 ──
    // 프로세스 전역 변수 대신, 여기서 만든 풀을 상태(AppState)에 넣어 서비스에 주입합니다.
    let pool = db::connect(&config.database_url, config.max_connections).await?;
    let state = AppState::new(pool);

    // ── 5단계: 라우터 조립 + 서버 시작 ──
    let app = content_history::app(state, &config.public_path);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
