//! # 회원가입 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 사용자명 (`username`)
//! - 길이: 3-30자
//! - 허용 문자: 영문, 숫자, 언더스코어(_)
//! - 대소문자 구분 없이 유일성 보장 (서비스 계층에서 처리)
//!
//! ### 이메일 (`email`)
//! - RFC 5322 표준 이메일 형식 준수
//! - 대소문자 구분 없이 유일성 보장 (서비스 계층에서 처리)
//!
//! ### 비밀번호 (`password`)
//! - 길이: 6-128자
//! - 평문은 해싱 후 폐기되며 어디에도 저장되지 않음
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "username": "john_doe",
//!   "email": "user@example.com",
//!   "password": "secret1"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자명 (로그인 ID)
    #[validate(length(
        min = 3,
        max = 30,
        message = "사용자명은 3-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (평문)
    #[validate(length(
        min = 6,
        max = 128,
        message = "비밀번호는 6-128자 사이여야 합니다"
    ))]
    pub password: String,
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("bob", "bob@x.com", "secret1").validate().is_ok());
        assert!(request("john_doe_42", "john@example.com", "longer-password").validate().is_ok());
    }

    #[test]
    fn test_invalid_username() {
        let errors = request("b", "bob@x.com", "secret1").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));

        let errors = request("bob smith", "bob@x.com", "secret1").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_invalid_email_and_password() {
        let errors = request("bob", "not-an-email", "123").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", request("bob", "bob@x.com", "secret1"));
        assert!(!rendered.contains("secret1"));
    }
}
