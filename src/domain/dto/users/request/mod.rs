//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`web::JsonConfig` 에러 핸들러)
//! 2. **형식 검증**: 이메일 형식, 필수 필드 (`validator` 크레이트)
//! 3. **비즈니스 검증**: 이메일 중복 확인 (서비스 계층)
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! `AppError::InvalidFields`로 변환되어 400 Bad Request 응답이 됩니다.

pub mod create_user;

pub use create_user::CreateUserRequest;
