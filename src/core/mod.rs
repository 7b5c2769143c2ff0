//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 타입을 모아둔 모듈입니다.
//!
//! - [`errors`] - `AppError`, `AppResult`, `ErrorContext`
//!
//! 서비스와 리포지토리는 전역 레지스트리 없이 생성 시점에 명시적으로 주입됩니다.
//! 조립은 `main.rs`에서 한 번만 수행됩니다.
//!
//! ```rust,ignore
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let service = web::Data::new(UserService::new(store, PasswordConfig::bcrypt_cost()));
//!
//! App::new().app_data(service.clone()).configure(configure_all_routes)
//! ```

pub mod errors;

pub use errors::*;
