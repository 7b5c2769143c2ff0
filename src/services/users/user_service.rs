//! # 사용자 등록 서비스 구현
//!
//! 사용자 등록의 핵심 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  1. exists_by_email ──▶ 이미 존재하면 Conflict 반환 (쓰기 없음)   │
//! │  2. bcrypt 해싱     ──▶ UserRecord::from_request (명시적 매핑)   │
//! │  3. save            ──▶ 저장소가 ID 할당                         │
//! │  4. UserResponse    ──▶ 비밀번호 해시 제외                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Arc<dyn UserStore> (생성 시 주입)                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost로 저장 전에 반드시 해시
//! - **솔트 자동 생성**: bcrypt가 레코드마다 고유 솔트 생성
//! - **민감 정보 제거**: 응답과 로그 어디에도 비밀번호가 남지 않음
//!
//! ## 동시성
//!
//! 존재 확인과 저장 사이에는 다른 요청이 끼어들 수 있습니다.
//! 이 구간을 이 계층에서 잠그지 않으며, 저장소의 쓰기 시점 유일성 검사가
//! 최종 판정을 내립니다. 경쟁에서 진 요청도 같은 Conflict 응답을 받습니다.

use std::sync::Arc;
use std::time::Instant;

use bcrypt::hash;
use log::{debug, info, warn};

use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::UserRecord;
use crate::repositories::users::{UserStore, EMAIL_IN_USE};
use crate::utils::string_utils::mask_email;

/// 사용자 등록 비즈니스 로직 서비스
///
/// 저장소와 bcrypt cost를 생성자로 받습니다. 전역 레지스트리는 없으며
/// `main.rs`에서 한 번 조립되어 `web::Data`로 핸들러에 공유됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
/// let service = UserService::new(store, PasswordConfig::bcrypt_cost());
///
/// let created = service.create_user(request).await?;
/// println!("사용자 생성: {}", created.id);
/// ```
pub struct UserService {
    /// 사용자 저장소
    store: Arc<dyn UserStore>,
    /// bcrypt 해싱 cost (4-15)
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend_name()
    }

    /// 새 사용자 등록
    ///
    /// 호출 전에 요청의 구조 검증이 끝나 있어야 합니다 (핸들러에서 수행).
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 저장된 사용자 (새로 할당된 ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일이 이미 사용 중
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    ///
    /// # 부수 효과
    ///
    /// 호출당 저장소 읽기 정확히 1회, 그리고 중복이 아닐 때만 쓰기 정확히 1회.
    ///
    /// # 로깅
    ///
    /// ```text
    /// [WARN] ⚠️ 이미 사용 중인 이메일로 가입 시도: a***@example.com
    /// [INFO] ✅ 사용자 생성 완료: id=665f1c..., took=4.2ms
    /// ```
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        let start_time = Instant::now();

        if self.store.exists_by_email(&request.email).await? {
            warn!("⚠️ 이미 사용 중인 이메일로 가입 시도: {}", mask_email(&request.email));
            return Err(AppError::ConflictError(EMAIL_IN_USE.to_string()));
        }

        let hash_start = Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let record = UserRecord::from_request(request, password_hash);
        let saved = self.store.save(record).await?;

        info!(
            "✅ 사용자 생성 완료: id={}, took={:?}",
            saved.id_string().unwrap_or_default(),
            start_time.elapsed()
        );

        Ok(UserResponse::from(saved))
    }
}
