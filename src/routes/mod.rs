//! API 라우트 설정 모듈
//!
//! 사용자 등록 라우트와 헬스체크 엔드포인트를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;
use crate::services::users::UserService;

/// 요청 본문 최대 크기 (바이트)
const JSON_PAYLOAD_LIMIT: usize = 16 * 1024;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `POST /users` - 사용자 등록 (인증 불필요)
///
/// JSON 파싱 실패도 `AppError::ValidationError`로 변환되어
/// 다른 에러와 같은 형식의 400 응답이 됩니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .app_data(json_config())
            .service(handlers::users::create_user),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
        })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "store": "mongo"
/// }
/// ```
#[get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": service.store_backend(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::repositories::users::InMemoryUserStore;

    #[actix_web::test]
    async fn test_health_check_reports_store_backend() {
        let service = web::Data::new(UserService::new(Arc::new(InMemoryUserStore::new()), 4));
        let app = test::init_service(
            App::new()
                .app_data(service)
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "memory");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
