//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입이 아닌 [`UserStore`] trait에만 의존합니다.
//! 구현체는 `main.rs`에서 설정(`USER_STORE`)에 따라 하나를 골라
//! `Arc<dyn UserStore>`로 주입합니다.
//!
//! | 구현체 | 용도 | 이메일 유일성 보장 |
//! |--------|------|--------------------|
//! | [`UserRepository`](user_repo::UserRepository) | 운영 (MongoDB) | `email_unique` 인덱스 |
//! | [`InMemoryUserStore`](memory_store::InMemoryUserStore) | 로컬 개발, 테스트 | 쓰기 락 안에서 검사 |
//!
//! # 동시성
//!
//! 서비스의 "존재 확인 후 저장" 순서는 요청 간에 원자적이지 않습니다.
//! 같은 이메일로 동시에 들어온 두 요청이 모두 존재 확인을 통과할 수 있으므로,
//! 두 구현체 모두 `save` 시점에 한 번 더 유일성을 강제하고 중복이면
//! `AppError::ConflictError`를 반환합니다.

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::entities::users::user::UserRecord;

pub mod memory_store;
pub mod user_repo;

pub use memory_store::InMemoryUserStore;
pub use user_repo::UserRepository;

/// 이메일 중복 시 사용하는 메시지
pub const EMAIL_IN_USE: &str = "this email is already in use!";

/// 사용자 저장소 추상화
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 주어진 이메일을 가진 레코드가 존재하는지 확인합니다.
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// 레코드를 저장하고 ID가 할당된 레코드를 반환합니다.
    ///
    /// 같은 이메일이 이미 저장되어 있으면 `AppError::ConflictError`를 반환합니다.
    async fn save(&self, record: UserRecord) -> Result<UserRecord, AppError>;

    /// 로그와 헬스체크에 표시할 백엔드 이름
    fn backend_name(&self) -> &'static str;
}
