//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 사용자 등록에 필요한 타입들을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속화되는 사용자 레코드
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 비밀번호 흐름
//!
//! 요청 DTO의 원문 비밀번호는 서비스 계층에서 bcrypt로 해시된 뒤
//! [`UserRecord::from_request`](entities::users::user::UserRecord::from_request)로만
//! 엔티티에 전달됩니다. 응답 DTO는 해시조차 포함하지 않습니다.

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
