//! 인메모리 사용자 저장소
//!
//! 프로세스 메모리에 레코드를 보관하는 [`UserStore`] 구현체입니다.
//! `USER_STORE=memory`로 MongoDB 없이 서비스를 띄우거나 테스트에서 사용합니다.
//! 재시작하면 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;
use crate::domain::entities::users::user::UserRecord;
use crate::repositories::users::{UserStore, EMAIL_IN_USE};

/// 이메일을 키로 레코드를 보관하는 저장소
///
/// 존재 확인과 삽입을 같은 쓰기 락 안에서 수행하므로 같은 이메일로
/// 동시에 `save`가 호출되어도 하나만 성공합니다.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 레코드 수
    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read()?.is_empty())
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.read()?.get(email).cloned())
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, UserRecord>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 락이 오염되었습니다".to_string()))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.read()?.contains_key(email))
    }

    async fn save(&self, mut record: UserRecord) -> Result<UserRecord, AppError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 락이 오염되었습니다".to_string()))?;

        if users.contains_key(&record.email) {
            return Err(AppError::ConflictError(EMAIL_IN_USE.to_string()));
        }

        record.id = Some(ObjectId::new());
        users.insert(record.email.clone(), record.clone());

        Ok(record)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
