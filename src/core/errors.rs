//! # Application Error Handling System
//!
//! 사용자 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 HTTP 응답으로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidFields` | 400 Bad Request | 필드 단위 입력값 검증 실패 |
//! | `ValidationError` | 400 Bad Request | 요청 본문 파싱 실패 등 |
//! | `ConflictError` | 409 Conflict | 이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "Validation error: invalid fields [email, name]",
//!   "fields": {
//!     "email": ["유효한 이메일 주소를 입력해주세요"],
//!     "name": ["이름은 필수입니다"]
//!   }
//! }
//! ```
//!
//! 예외적으로 409 Conflict는 JSON이 아닌 메시지 문자열을 그대로 본문으로 보냅니다.
//! (`Conflict: this email is already in use!`)
//!
//! 500 계열 에러는 내부 정보를 노출하지 않습니다. 상세 내용은 서버 로그에만 남고
//! 클라이언트는 `{"error": "Internal server error"}`만 받습니다.

use std::collections::BTreeMap;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// 필드별 검증 실패 메시지 목록
///
/// 필드 이름 순으로 정렬되어 응답이 항상 같은 순서를 유지합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// 특정 필드에 검증 실패 메시지를 추가합니다.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = FieldErrors::default();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                fields.push(field.to_string(), message);
            }
        }
        fields
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 에러를 포괄하는 열거형입니다.
/// 모든 에러는 요청 단위로 처리되며 다른 요청에 영향을 주지 않습니다.
///
/// ## 에러 카테고리
///
/// ### 1. 클라이언트 에러
/// - `InvalidFields`: 필드 단위 구조 검증 실패 (어떤 필드가 왜 실패했는지 포함)
/// - `ValidationError`: 본문 파싱 실패 등 필드 단위로 표현할 수 없는 입력 오류
/// - `ConflictError`: 이미 사용 중인 이메일
///
/// ### 2. 서버 에러
/// - `DatabaseError`: 저장소 연결 끊김, 타임아웃, 쿼리 실패
/// - `InternalError`: 비밀번호 해싱 실패 등 예상하지 못한 오류
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// collection.insert_one(&user).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// request.validate()?; // ValidationErrors → AppError::InvalidFields
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 필드 단위 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: invalid fields [{}]", .0.field_names().join(", "))]
    InvalidFields(FieldErrors),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 표시 문자열이 그대로 응답 본문에 사용됩니다.
    /// 예: `Conflict: this email is already in use!`
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidFields(FieldErrors::from(&errors))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidFields(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 서버 에러는 로그에 상세 내용을 남기고 클라이언트에는 불투명한 메시지만 반환합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            // 본문은 JSON이 아닌 메시지 문자열 그대로
            AppError::ConflictError(_) => {
                return HttpResponse::build(status)
                    .content_type(ContentType::plaintext())
                    .body(self.to_string());
            }
            AppError::InvalidFields(fields) => json!({
                "error": self.to_string(),
                "fields": fields,
            }),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("❌ 요청 처리 실패: {}", self);
                json!({ "error": "Internal server error" })
            }
            _ => json!({ "error": self.to_string() }),
        };

        HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(&password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
