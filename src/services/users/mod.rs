//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록과 관련된 비즈니스 로직을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지 (서비스 사전 확인 + 저장소 유일성 검사)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(store, PasswordConfig::bcrypt_cost());
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
