//! User Entity Implementation
//!
//! 사용자 저장소에 영속화되는 사용자 레코드입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::CreateUserRequest;
use crate::utils::string_utils::trim_string;

/// 사용자 레코드 엔티티
///
/// `users` 컬렉션의 문서와 1:1로 대응합니다.
/// `id`는 저장소가 저장 시점에 할당하며, 그 전까지는 `None`입니다.
/// 이메일은 모든 레코드에 걸쳐 유일해야 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름 (앞뒤 공백 제거됨)
    pub name: String,
    /// 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호. 원문 비밀번호는 어디에도 저장되지 않습니다.
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl UserRecord {
    /// 생성 요청을 저장 전 레코드로 변환합니다.
    ///
    /// 리플렉션 기반 복사 대신 필드를 하나씩 명시적으로 옮깁니다.
    /// 비밀번호는 호출자가 미리 해시한 값만 받으므로 요청의 원문 비밀번호는
    /// 이 함수에서 버려집니다.
    pub fn from_request(request: CreateUserRequest, password_hash: String) -> Self {
        let CreateUserRequest { name, email, .. } = request;

        Self {
            id: None,
            name: trim_string(&name),
            email,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_copies_fields_and_drops_raw_password() {
        let request = CreateUserRequest {
            name: "  Ana  ".to_string(),
            email: "ana@example.com".to_string(),
            password: "plain-secret".to_string(),
        };

        let record = UserRecord::from_request(request, "$2b$04$hash".to_string());

        assert_eq!(record.id, None);
        assert_eq!(record.name, "Ana");
        assert_eq!(record.email, "ana@example.com");
        assert_eq!(record.password_hash, "$2b$04$hash");
        assert_ne!(record.password_hash, "plain-secret");
    }

    #[test]
    fn test_id_string_is_hex() {
        let id = ObjectId::new();
        let record = UserRecord {
            id: Some(id),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "hash".to_string(),
            created_at: DateTime::now(),
        };

        assert_eq!(record.id_string(), Some(id.to_hex()));
    }
}
