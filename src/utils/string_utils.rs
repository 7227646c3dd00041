//! # 문자열 유틸리티
//!
//! 입력값 정리와 대소문자 무시 비교 키 생성에 사용하는 공통 함수들입니다.

use crate::core::errors::AppError;

/// 필수 문자열 필드를 검증하고 앞뒤 공백을 제거합니다.
///
/// 공백만 있는 값은 비어 있는 것으로 간주합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택 문자열을 정리합니다. 빈 값은 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 대소문자를 무시하는 유일성 비교에 쓰는 정규화 키
///
/// 사용자명과 이메일은 이 키 기준으로 중복을 판단합니다.
/// 공백 제거는 입력 경계(`validate_required_string`)에서만 하고 여기서는 소문자화만 합니다.
pub fn normalize_key(value: &str) -> String {
    value.to_lowercase()
}
