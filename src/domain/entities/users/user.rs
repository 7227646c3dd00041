//! User Entity Implementation
//!
//! 계정 서비스의 유일한 엔티티인 사용자와 그 식별자, 생명주기 전이를 정의합니다.
//!
//! 저장 전 등록 데이터는 [`NewUser`], 저장소가 식별자를 부여한 뒤에는 [`User`]입니다.
//! 식별자가 없는 사용자는 타입 수준에서 존재할 수 없으므로
//! "식별자는 생성 시 단 한 번 부여된다"는 규칙이 자연스럽게 지켜집니다.
//!
//! 상태 전이(`activated`, `deactivated`, `email_verified`, `with_changes`)는
//! 기존 값을 소비하고 전이된 새 값을 돌려줍니다.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::utils::string_utils::clean_optional_string;

/// 사용자 식별자 (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// 새 식별자를 생성합니다. 저장소 구현에서만 호출합니다.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| AppError::ValidationError(format!("유효하지 않은 사용자 ID 형식입니다: {}", s)))
    }
}

/// 현재 시각 (밀리초 정밀도)
///
/// MongoDB `DateTime`이 밀리초 단위이므로 저장 전후 값이 동일하도록 맞춥니다.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// 수정 시각 갱신값을 계산합니다.
///
/// 항상 `previous`보다 큰 값을 반환합니다.
/// 시계가 전진하지 않았다면 1ms 뒤로 밀어 단조 증가를 보장합니다.
pub fn next_update_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous + TimeDelta::milliseconds(1)
    }
}

/// 저장 전의 신규 사용자
///
/// 등록 시 서비스가 만들고 저장소가 [`User`]로 변환합니다.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    /// 새 로컬 계정 등록
    ///
    /// 활성 상태, 이메일 미인증 상태로 시작하며 생성/수정 시각은 동일합니다.
    pub fn register(username: String, email: String, password_hash: String) -> Self {
        let created_at = now();

        Self {
            username,
            email,
            password_hash,
            first_name: None,
            last_name: None,
            is_active: true,
            is_email_verified: false,
            created_at,
            updated_at: created_at,
        }
    }

    /// 저장소가 부여한 식별자로 영속 사용자를 만듭니다.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            is_active: self.is_active,
            is_email_verified: self.is_email_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("is_active", &self.is_active)
            .field("is_email_verified", &self.is_email_verified)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// 사용자 필드 변경 요청 (도메인 표현)
///
/// 변경 가능한 필드만 담습니다. 식별자, 생성 시각, 비밀번호는 여기에 없으므로
/// 갱신 요청으로는 절대 바뀌지 않습니다.
///
/// - `None`: 기존 값 유지
/// - 이름 필드의 `Some("")`: 값 삭제
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
}

/// 사용자 엔티티
///
/// 저장소에 존재하는 사용자입니다. `Serialize`를 구현하지 않으므로
/// 외부로 나가는 표현은 항상 비밀번호가 빠진 `UserResponse`를 거칩니다.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// 사용자명 (대소문자 무시 unique)
    pub username: String,
    /// 이메일 (대소문자 무시 unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 이메일 인증 여부 (단방향: 미인증 → 인증)
    pub is_email_verified: bool,
    /// 생성 시간 (불변)
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 계정 활성화
    pub fn activated(self) -> Self {
        Self { is_active: true, ..self }.touched()
    }

    /// 계정 비활성화
    pub fn deactivated(self) -> Self {
        Self { is_active: false, ..self }.touched()
    }

    /// 이메일 인증 완료 처리
    pub fn email_verified(self) -> Self {
        Self { is_email_verified: true, ..self }.touched()
    }

    /// 변경 요청을 적용한 새 값을 돌려줍니다.
    ///
    /// 식별자, 생성 시각, 비밀번호, 이메일 인증 상태는 항상 기존 값을 유지합니다.
    pub fn with_changes(self, changes: UserChanges) -> Self {
        let UserChanges {
            username,
            email,
            first_name,
            last_name,
            is_active,
        } = changes;

        Self {
            username: username.unwrap_or(self.username),
            email: email.unwrap_or(self.email),
            first_name: merge_name(self.first_name, first_name),
            last_name: merge_name(self.last_name, last_name),
            is_active: is_active.unwrap_or(self.is_active),
            ..self
        }
        .touched()
    }

    fn touched(self) -> Self {
        let updated_at = next_update_timestamp(self.updated_at);
        Self { updated_at, ..self }
    }
}

/// 생략은 유지, 빈 문자열은 삭제
fn merge_name(current: Option<String>, requested: Option<String>) -> Option<String> {
    match requested {
        None => current,
        requested => clean_optional_string(requested),
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("is_active", &self.is_active)
            .field("is_email_verified", &self.is_email_verified)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        NewUser::register("bob".to_string(), "bob@x.com".to_string(), "hashed".to_string())
            .into_user(UserId::generate())
    }

    #[test]
    fn test_register_defaults() {
        let new_user = NewUser::register("bob".to_string(), "bob@x.com".to_string(), "hashed".to_string());

        assert!(new_user.is_active);
        assert!(!new_user.is_email_verified);
        assert_eq!(new_user.created_at, new_user.updated_at);
        assert_eq!(new_user.first_name, None);
    }

    #[test]
    fn test_user_id_parse() {
        let id = UserId::generate();
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        let invalid = "not-a-uuid".parse::<UserId>();
        assert!(matches!(invalid, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_transitions_advance_updated_at() {
        let user = sample_user();
        let created_at = user.created_at;

        let deactivated = user.deactivated();
        assert!(!deactivated.is_active);
        assert!(deactivated.updated_at > created_at);

        let previous = deactivated.updated_at;
        let activated = deactivated.activated();
        assert!(activated.is_active);
        assert!(activated.updated_at > previous);
        assert_eq!(activated.created_at, created_at);
    }

    #[test]
    fn test_email_verified_is_idempotent() {
        let once = sample_user().email_verified();
        let twice = once.clone().email_verified();

        assert!(once.is_email_verified);
        assert!(twice.is_email_verified);
        assert!(twice.updated_at > once.updated_at);
    }

    #[test]
    fn test_with_changes_keeps_identity_fields() {
        let user = sample_user();
        let id = user.id;
        let created_at = user.created_at;

        let changed = user.with_changes(UserChanges {
            username: Some("robert".to_string()),
            first_name: Some(" Robert ".to_string()),
            is_active: Some(false),
            ..UserChanges::default()
        });

        assert_eq!(changed.id, id);
        assert_eq!(changed.created_at, created_at);
        assert_eq!(changed.password_hash, "hashed");
        assert_eq!(changed.username, "robert");
        assert_eq!(changed.email, "bob@x.com");
        assert_eq!(changed.first_name.as_deref(), Some("Robert"));
        assert!(!changed.is_active);
        assert!(!changed.is_email_verified);
    }

    #[test]
    fn test_with_changes_clears_name_on_blank() {
        let user = sample_user().with_changes(UserChanges {
            last_name: Some("Kim".to_string()),
            ..UserChanges::default()
        });
        assert_eq!(user.last_name.as_deref(), Some("Kim"));

        let cleared = user.with_changes(UserChanges {
            last_name: Some("  ".to_string()),
            ..UserChanges::default()
        });
        assert_eq!(cleared.last_name, None);
    }

    #[test]
    fn test_next_update_timestamp_is_strictly_greater() {
        let future = now() + TimeDelta::seconds(60);
        let next = next_update_timestamp(future);
        assert_eq!(next, future + TimeDelta::milliseconds(1));
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", sample_user());
        assert!(!rendered.contains("hashed"));
        assert!(rendered.contains("<redacted>"));
    }
}
