//! 사용자 등록 서비스
//!
//! Rust 기반의 사용자 등록 REST 서비스입니다.
//! 요청 검증, 이메일 중복 확인, bcrypt 해싱 후 저장을 수행합니다.
//!
//! # Features
//!
//! - **사용자 등록**: `POST /users` (201 / 400 / 409)
//! - **이메일 유일성**: 사전 확인 + 저장소 수준 유일성 검사
//! - **교체 가능한 저장소**: MongoDB 또는 인메모리 (`USER_STORE`)
//! - **명시적 DI**: `main.rs`에서 조립 후 `web::Data`로 공유
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 파싱 및 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← dyn UserStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/Memory  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service::repositories::users::InMemoryUserStore;
//! use user_service::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()), 4);
//! let user = service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
