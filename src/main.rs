//! 계정 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 저장소와 서비스를 초기화합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use account_service::config::{DatabaseConfig, RateLimitConfig, ServerConfig, UserStoreKind};
use account_service::core::errors::AppResult;
use account_service::db::Database;
use account_service::repositories::users::{InMemoryUserStore, MongoUserRepository, UserStore};
use account_service::routes::configure_all_routes;
use account_service::services::auth::BcryptPasswordHasher;
use account_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 계정 관리 서비스 시작중...");

    let store = initialize_user_store().await.map_err(|e| {
        error!("사용자 저장소 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let hasher = BcryptPasswordHasher::from_config();
    info!("🔐 bcrypt cost: {}", hasher.cost());

    let user_service = web::Data::new(UserService::new(store, Arc::new(hasher)));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/users", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 에러로 출력
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패 (환경 변수만 사용): {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=account_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `USER_STORE` 설정에 따라 사용자 저장소를 초기화합니다
///
/// MongoDB를 사용하면 연결 확인 후 유니크 인덱스를 생성합니다.
/// 인메모리 저장소는 재시작 시 데이터가 사라집니다.
async fn initialize_user_store() -> AppResult<Arc<dyn UserStore>> {
    match DatabaseConfig::user_store() {
        UserStoreKind::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await?);
            let repository = MongoUserRepository::new(database);
            repository.create_indexes().await?;

            Ok(Arc::new(repository))
        }
        UserStoreKind::Memory => {
            info!("🧪 인메모리 사용자 저장소 사용 (데이터는 재시작 시 소실됩니다)");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
