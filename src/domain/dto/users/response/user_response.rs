use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;
use crate::services::users::UserStats;

/// 사용자 응답 DTO (비밀번호 해시 제외)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            first_name,
            last_name,
            is_active,
            is_email_verified,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.to_string(),
            username,
            email,
            first_name,
            last_name,
            is_active,
            is_email_verified,
            created_at,
            updated_at,
        }
    }
}

/// 사용자 통계 응답 DTO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatsResponse {
    pub total_users: u64,
    pub active_users: u64,
    pub verified_users: u64,
}

impl From<UserStats> for UserStatsResponse {
    fn from(stats: UserStats) -> Self {
        Self {
            total_users: stats.total_users,
            active_users: stats.active_users,
            verified_users: stats.verified_users,
        }
    }
}

/// 사용자명/이메일 존재 여부 응답 DTO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::{NewUser, UserId};

    #[test]
    fn test_response_omits_password_hash() {
        let user = NewUser::register(
            "bob".to_string(),
            "bob@x.com".to_string(),
            "$2b$04$abcdefghijklmnopqrstuv".to_string(),
        )
        .into_user(UserId::generate());
        let id = user.id.to_string();

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], id);
        assert_eq!(json["username"], "bob");
        assert_eq!(json["is_active"], true);
        assert_eq!(json["is_email_verified"], false);
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("$2b$04$"));
    }
}
