//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 전달하는 응답 타입입니다.
//!
//! - **데이터 은닉**: 비밀번호 해시는 응답에서 제외
//! - **식별자 문자열화**: `ObjectId`는 24자리 16진수 문자열로 변환
//!
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "name": "Ana",
//!   "email": "ana@example.com",
//!   "created_at": "2024-06-01T10:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
