//! # User Registration HTTP Handlers
//!
//! 사용자 등록 엔드포인트를 처리하는 핸들러입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 등록 | 201 Created |
//!
//! ## 처리 순서
//!
//! 1. JSON 본문 파싱 (실패 시 400, 저장소 접근 없음)
//! 2. 구조 검증 `validate()` (실패 시 400 + 필드 목록, 저장소 접근 없음)
//! 3. [`UserService::create_user`] 호출 (중복 시 409)

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::services::users::UserService;

/// 사용자 등록 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Ana",
///   "email": "ana@example.com",
///   "password": "x"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "507f1f77bcf86cd799439011",
///   "name": "Ana",
///   "email": "ana@example.com",
///   "created_at": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 중복 이메일 (409 Conflict, text/plain)
/// ```text
/// Conflict: this email is already in use!
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "error": "Validation error: invalid fields [email, name, password]",
///   "fields": {
///     "email": ["유효한 이메일 주소를 입력해주세요"],
///     "name": ["이름은 필수입니다"],
///     "password": ["비밀번호는 필수입니다"]
///   }
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ana","email":"ana@example.com","password":"x"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();

    // 유효성 검사
    request.validate()?;

    let response = service.create_user(request).await?;

    Ok(HttpResponse::Created().json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::domain::entities::users::user::UserRecord;
    use crate::repositories::users::{InMemoryUserStore, UserStore};
    use crate::routes::configure_all_routes;
    use crate::services::users::UserService;

    use super::*;

    #[derive(Default)]
    struct CountingStore {
        inner: InMemoryUserStore,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl UserStore for CountingStore {
        async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.exists_by_email(email).await
        }

        async fn save(&self, record: UserRecord) -> Result<UserRecord, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.save(record).await
        }

        fn backend_name(&self) -> &'static str {
            "counting"
        }
    }

    fn service_with(store: Arc<CountingStore>) -> web::Data<UserService> {
        web::Data::new(UserService::new(store, 4))
    }

    async fn post_json(
        service: web::Data<UserService>,
        body: Value,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(service)
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(&body)
            .to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status();
        let body: Value = test::read_body_json(response).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_create_user_returns_created_without_password() {
        let store = Arc::new(CountingStore::default());

        let (status, body) = post_json(
            service_with(store.clone()),
            json!({ "name": "Ana", "email": "ana@example.com", "password": "x" }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["email"], "ana@example.com");
        assert_eq!(body["name"], "Ana");
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(body.get("password").is_none());
        assert!(body.get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_repeated_request_is_conflict() {
        let store = Arc::new(CountingStore::default());
        let service = service_with(store.clone());
        let app = test::init_service(
            App::new()
                .app_data(service)
                .configure(configure_all_routes),
        )
        .await;
        let body = json!({ "name": "Ana", "email": "ana@example.com", "password": "x" });

        let first = test::TestRequest::post().uri("/users").set_json(&body).to_request();
        let first = test::call_service(&app, first).await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = test::TestRequest::post().uri("/users").set_json(&body).to_request();
        let second = test::call_service(&app, second).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);

        let body = test::read_body(second).await;
        assert_eq!(&body[..], b"Conflict: this email is already in use!");
        assert_eq!(store.inner.len().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_invalid_request_never_reaches_store() {
        let store = Arc::new(CountingStore::default());

        let (status, body) = post_json(
            service_with(store.clone()),
            json!({ "name": "", "email": "not-an-email", "password": "" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["fields"]["name"].is_array());
        assert!(body["fields"]["email"].is_array());
        assert!(body["fields"]["password"].is_array());
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_missing_field_is_reported_by_name() {
        let store = Arc::new(CountingStore::default());

        let (status, body) = post_json(
            service_with(store.clone()),
            json!({ "name": "Ana", "email": "ana@example.com" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["fields"]["password"][0], "비밀번호는 필수입니다");
        assert!(body["fields"].get("email").is_none());
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_null_fields_are_reported_by_name() {
        let store = Arc::new(CountingStore::default());

        let (status, body) = post_json(
            service_with(store.clone()),
            json!({ "name": "Ana", "email": null, "password": null }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["fields"]["email"][0], "유효한 이메일 주소를 입력해주세요");
        assert_eq!(body["fields"]["password"][0], "비밀번호는 필수입니다");
        assert!(body["fields"].get("name").is_none());
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let store = Arc::new(CountingStore::default());
        let app = test::init_service(
            App::new()
                .app_data(service_with(store.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert!(body["error"].as_str().is_some_and(|e| e.starts_with("Validation error")));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }
}
