//! # 문자열 유틸리티
//!
//! 요청 필드 검증과 정리에 사용하는 공통 문자열 함수들입니다.

/// 빈 문자열이거나 공백 문자만 있는지 확인
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\n"));
/// assert!(!is_blank(" Ana "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 문자열 정리 (trim 후 반환)
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 로그 출력용 이메일 마스킹
///
/// 로컬 파트의 첫 글자와 도메인만 남깁니다. `@`가 없으면 전부 가립니다.
///
/// ```rust,ignore
/// assert_eq!(mask_email("ana@example.com"), "a***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        },
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n  "));
        assert!(!is_blank("a"));
        assert!(!is_blank("  안녕하세요  "));
    }

    #[test]
    fn test_trim_string() {
        assert_eq!(trim_string("  Hello  "), "Hello");
        assert_eq!(trim_string("  Line1\nLine2  "), "Line1\nLine2");
        assert_eq!(trim_string("   "), "");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ana@example.com"), "a***@example.com");
        assert_eq!(mask_email("지수@example.com"), "지***@example.com");
        assert_eq!(mask_email("@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
