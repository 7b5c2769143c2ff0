//! 사용자 등록 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정에 따라 사용자 저장소를 선택하고 서비스에 명시적으로 주입합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service::config::{
    CorsOrigins, MongoConfig, PasswordConfig, RateLimitConfig, ServerConfig, StoreBackend,
};
use user_service::db::Database;
use user_service::repositories::users::{InMemoryUserStore, UserRepository, UserStore};
use user_service::routes::configure_all_routes;
use user_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env 로드가 먼저 (RUST_LOG 반영)
    load_env_file();
    init_logging();

    info!("🚀 사용자 등록 서비스 시작중...");

    let store = initialize_user_store().await?;
    let service = web::Data::new(UserService::new(store, PasswordConfig::bcrypt_cost()));

    info!("✅ 사용자 서비스 초기화 완료 (저장소: {})", service.store_backend());

    start_http_server(service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let cors_origins = CorsOrigins::from_env();
    info!("🔓 CORS 허용 Origin: {:?}", cors_origins);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 설정된 백엔드로 사용자 저장소를 초기화합니다
///
/// MongoDB 백엔드는 연결 확인과 `email_unique` 인덱스 생성까지 마친 뒤 반환합니다.
/// 실패하면 서버를 띄우지 않고 종료합니다.
async fn initialize_user_store() -> std::io::Result<Arc<dyn UserStore>> {
    let backend = StoreBackend::current();
    info!("🗄️ 사용자 저장소 백엔드: {}", backend.as_str());

    match backend {
        StoreBackend::Memory => {
            info!("🧠 인메모리 저장소 사용 (재시작 시 데이터 소멸)");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&MongoConfig::from_env())
                .await
                .map_err(|e| {
                    error!("❌ 데이터베이스 연결 실패: {}", e);
                    std::io::Error::other(e.to_string())
                })?;

            let repository = UserRepository::new(&database);
            repository.ensure_indexes().await.map_err(|e| {
                error!("❌ 인덱스 생성 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(repository))
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 기본값은 모든 Origin 허용이며, `CORS_ALLOWED_ORIGINS`로 목록을 제한할 수 있습니다.
/// Preflight 캐시 시간은 3600초입니다.
fn configure_cors(origins: &CorsOrigins) -> Cors {
    let cors = match origins {
        CorsOrigins::Any => Cors::default().allow_any_origin(),
        CorsOrigins::List(list) => list
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(CorsOrigins::MAX_AGE_SECS)
}
