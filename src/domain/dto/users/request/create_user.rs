//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 등록을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 필드가 누락되거나 `null`인 경우에도 역직렬화는 성공하고 빈 문자열이 들어가며,
//! 이후 `validate()`에서 해당 필드가 실패 목록에 포함됩니다.
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::utils::string_utils::is_blank;

/// 사용자 등록 요청 DTO
///
/// 요청 단위로 한 번 생성되고 [`UserRecord`](crate::domain::entities::users::user::UserRecord)로
/// 변환된 뒤 버려집니다. 비밀번호가 로그에 남지 않도록 `Debug`는 직접 구현합니다.
#[derive(Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 이름 (공백만으로 구성될 수 없음)
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    /// 이메일 주소
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 비밀번호 (정책은 비어있지 않음만 요구)
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// `null`을 빈 문자열로 취급합니다
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("blank")
            .with_message("이름은 필수입니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{AppError, FieldErrors};

    fn request(name: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("Ana", "ana@example.com", "x").validate().is_ok());
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let errors = request("", "not-an-email", "").validate().unwrap_err();
        let fields = FieldErrors::from(&errors);

        assert_eq!(fields.field_names(), vec!["email", "name", "password"]);
        assert_eq!(
            fields.messages("email"),
            Some(&["유효한 이메일 주소를 입력해주세요".to_string()][..])
        );
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let errors = request("   ", "ana@example.com", "x").validate().unwrap_err();
        let fields = FieldErrors::from(&errors);

        assert_eq!(fields.field_names(), vec!["name"]);
        assert_eq!(fields.messages("name"), Some(&["이름은 필수입니다".to_string()][..]));
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty_and_fail_validation() {
        let parsed: CreateUserRequest =
            serde_json::from_str(r#"{"email": "ana@example.com"}"#).unwrap();

        let error = AppError::from(parsed.validate().unwrap_err());
        match error {
            AppError::InvalidFields(fields) => {
                assert_eq!(fields.field_names(), vec!["name", "password"]);
            }
            other => panic!("Expected InvalidFields, got {other:?}"),
        }
    }

    #[test]
    fn test_null_fields_deserialize_as_empty() {
        let parsed: CreateUserRequest =
            serde_json::from_str(r#"{"name": null, "email": "ana@example.com", "password": "x"}"#)
                .unwrap();

        assert_eq!(parsed.name, "");
        let fields = FieldErrors::from(&parsed.validate().unwrap_err());
        assert_eq!(fields.field_names(), vec!["name"]);
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", request("Ana", "ana@example.com", "hunter2"));

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
