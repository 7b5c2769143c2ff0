use serde::Serialize;

use crate::domain::entities::users::user::UserRecord;

/// 사용자 응답 DTO
///
/// 저장된 레코드의 공개 표현입니다. 비밀번호와 그 해시는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    /// RFC 3339 형식의 생성 시간
    pub created_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        let UserRecord {
            id,
            name,
            email,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, DateTime};

    #[test]
    fn test_response_omits_password_hash() {
        let id = ObjectId::new();
        let record = UserRecord {
            id: Some(id),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$2b$04$secret-hash".to_string(),
            created_at: DateTime::from_millis(0),
        };

        let response = UserResponse::from(record);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], id.to_hex());
        assert_eq!(json["email"], "ana@example.com");
        assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("secret-hash"));
    }
}
