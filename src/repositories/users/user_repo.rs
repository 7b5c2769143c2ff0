//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 사용하는 [`UserStore`] 구현체입니다.
//!
//! ## 특징
//!
//! - **명시적 의존성**: 생성 시 [`Database`]를 받아 컬렉션 핸들을 보관
//! - **데이터 무결성**: `email` 유니크 인덱스로 동시 가입 경쟁 조건 차단
//! - **에러 매핑**: 중복 키(11000)는 Conflict, 나머지는 DatabaseError

use async_trait::async_trait;
use log::{debug, warn};
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::users::user::UserRecord;
use crate::repositories::users::{UserStore, EMAIL_IN_USE};
use crate::utils::string_utils::mask_email;

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: `email_unique` (email, unique)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::connect(&MongoConfig::from_env()).await?;
/// let repo = UserRepository::new(&database);
/// repo.ensure_indexes().await?;
///
/// if !repo.exists_by_email("john@example.com").await? {
///     let saved = repo.save(record).await?;
///     println!("새 사용자 ID: {}", saved.id_string().unwrap_or_default());
/// }
/// ```
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<UserRecord>,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database
                .get_database()
                .collection::<UserRecord>(USERS_COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다. 이미 같은 정의의 인덱스가
    /// 있으면 MongoDB가 아무 작업도 하지 않습니다.
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 이메일이 있는 경우 유니크 인덱스 생성 실패
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(format!("인덱스 생성 실패: {}", e)))?;

        debug!("users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let count = self
            .collection
            .count_documents(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, mut record: UserRecord) -> Result<UserRecord, AppError> {
        let result = self
            .collection
            .insert_one(&record)
            .await
            .map_err(|e| map_insert_error(&e, &record.email))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!(
                "예상하지 못한 inserted_id 타입: {}",
                result.inserted_id
            ))
        })?;

        record.id = Some(id);
        Ok(record)
    }

    fn backend_name(&self) -> &'static str {
        "mongo"
    }
}

/// 삽입 에러 변환. 중복 키는 Conflict, 나머지는 DatabaseError
fn map_insert_error(error: &MongoError, email: &str) -> AppError {
    if is_duplicate_key(error) {
        warn!("⚠️ 저장 시점 이메일 중복 감지: {}", mask_email(email));
        AppError::ConflictError(EMAIL_IN_USE.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Document};
    use mongodb::error::WriteError;

    fn write_error(code: i32) -> MongoError {
        let raw: Document = doc! {
            "code": code,
            "codeName": "DuplicateKey",
            "errmsg": "E11000 duplicate key error collection: users index: email_unique",
        };
        let write_error: WriteError = bson::from_document(raw).unwrap();
        MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    #[test]
    fn test_duplicate_key_maps_to_conflict() {
        let error = map_insert_error(&write_error(DUPLICATE_KEY_CODE), "ana@example.com");

        match error {
            AppError::ConflictError(msg) => assert_eq!(msg, EMAIL_IN_USE),
            other => panic!("Expected ConflictError, got {other:?}"),
        }
    }

    #[test]
    fn test_other_write_error_maps_to_database_error() {
        let error = map_insert_error(&write_error(121), "ana@example.com");

        assert!(matches!(error, AppError::DatabaseError(_)));
    }
}
