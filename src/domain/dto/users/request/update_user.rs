//! # 사용자 정보 수정 요청 DTO
//!
//! 갱신 요청은 변경 가능한 필드만 받습니다.
//! 식별자, 생성 시각, 비밀번호, 이메일 인증 상태는 이 요청으로 바꿀 수 없으며
//! 알 수 없는 필드가 들어오면 역직렬화 단계에서 거부됩니다.
//!
//! 모든 필드는 선택 사항이고 생략된 필드는 기존 값을 유지합니다.
//! 이름 필드에 빈 문자열을 보내면 값이 삭제됩니다.
//!
//! ```json
//! {
//!   "email": "new@example.com",
//!   "last_name": "",
//!   "is_active": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::create_user::validate_username;
use crate::domain::entities::users::UserChanges;

/// 사용자 정보 수정 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[validate(length(
        min = 3,
        max = 30,
        message = "사용자명은 3-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[validate(length(max = 50, message = "이름은 50자 이하여야 합니다"))]
    pub first_name: Option<String>,

    #[validate(length(max = 50, message = "성은 50자 이하여야 합니다"))]
    pub last_name: Option<String>,

    pub is_active: Option<bool>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        let UpdateUserRequest {
            username,
            email,
            first_name,
            last_name,
            is_active,
        } = request;

        Self {
            username,
            email,
            first_name,
            last_name,
            is_active,
        }
    }
}
