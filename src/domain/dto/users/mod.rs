//! # 사용자 DTO 모듈
//!
//! 사용자 등록 API의 요청/응답 계약을 정의합니다.
//! 영속화 모델인 [`UserRecord`](crate::domain::entities::users::user::UserRecord)와
//! 분리되어 있어 저장 형태가 바뀌어도 API 계약은 유지됩니다.
//!
//! ```text
//! CreateUserRequest ──(UserRecord::from_request)──▶ UserRecord ──(From)──▶ UserResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
