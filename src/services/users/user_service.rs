//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │  Registration   │  │    Lifecycle    │  │   User Query    │  │
//! │  │ • Input Check   │  │ • Activate      │  │ • By ID/Name    │  │
//! │  │ • Uniqueness    │  │ • Deactivate    │  │ • By Email      │  │
//! │  │ • Hashing       │  │ • Verify Email  │  │ • Lists/Counts  │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! ├─────────────────────────────────────────────────────────────────┤
//! │        UserStore (trait)          PasswordHasher (trait)        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 유일성 보장 (2단계)
//!
//! 1. **사전 확인**: 등록/수정 전 대소문자 무시 존재 여부를 조회해 친절한 에러를 반환합니다.
//! 2. **저장소 제약**: 사전 확인과 쓰기 사이의 경합은 저장소의 유니크 제약이 막고,
//!    그 위반도 같은 `DuplicateUsername` / `DuplicateEmail`로 보고됩니다.
//!
//! ## 생명주기
//!
//! - 활성 축: `Active ⇄ Inactive` (`activate` / `deactivate`, 멱등)
//! - 인증 축: `Unverified → Verified` (`verify_email`, 멱등, 되돌릴 수 없음)
//!
//! 모든 실패는 `AppError`로 호출자에게 즉시 반환되며 내부 재시도는 없습니다.

use std::sync::Arc;

use log::{info, warn};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{NewUser, User, UserChanges, UserId};
use crate::repositories::users::UserStore;
use crate::services::auth::PasswordHasher;
use crate::utils::string_utils::{normalize_key, validate_required_string};

/// 사용자 집계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub total_users: u64,
    pub active_users: u64,
    pub verified_users: u64,
}

/// 계정 관리 서비스
///
/// 엔티티를 한 연산 범위 이상 보관하지 않습니다.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// 새 사용자 등록
    ///
    /// # 처리 순서
    ///
    /// 1. 사용자명, 이메일, 비밀번호 공백 여부 확인
    /// 2. 사용자명 중복 확인 (대소문자 무시) → `DuplicateUsername`
    /// 3. 이메일 중복 확인 (대소문자 무시) → `DuplicateEmail`
    /// 4. 비밀번호 해싱
    /// 5. 활성/미인증 상태로 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필수 값 누락
    /// * `AppError::DuplicateUsername` / `AppError::DuplicateEmail` - 중복
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        let username = validate_required_string(username, "사용자명")?;
        let email = validate_required_string(email, "이메일")?;
        if password.trim().is_empty() {
            return Err(AppError::ValidationError("비밀번호는 필수입니다".to_string()));
        }

        if self.store.exists_by_username_ci(&username).await? {
            warn!("회원가입 거부 - 사용자명 중복: {}", username);
            return Err(AppError::DuplicateUsername(username));
        }

        if self.store.exists_by_email_ci(&email).await? {
            warn!("회원가입 거부 - 이메일 중복: {}", email);
            return Err(AppError::DuplicateEmail(email));
        }

        let password_hash = self.hasher.hash(password)?;

        let created = self
            .store
            .insert(NewUser::register(username, email, password_hash))
            .await
            .inspect_err(|e| warn!("회원가입 저장 실패: {}", e))?;

        info!(
            "사용자 등록 완료: {} ({}) - {:?}",
            created.username,
            created.id,
            start_time.elapsed()
        );
        Ok(created)
    }

    pub async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        self.store.find_by_id(id).await
    }

    /// 사용자명으로 조회 (대소문자 무시)
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.store.find_by_username_ci(username).await
    }

    /// 이메일로 조회 (대소문자 무시)
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.store.find_by_email_ci(email).await
    }

    pub async fn list_all(&self) -> AppResult<Vec<User>> {
        self.store.find_all().await
    }

    pub async fn list_active(&self) -> AppResult<Vec<User>> {
        self.store.find_active().await
    }

    pub async fn list_verified(&self) -> AppResult<Vec<User>> {
        self.store.find_verified().await
    }

    /// 사용자 정보 수정
    ///
    /// 저장된 레코드를 기준으로 변경 요청을 적용합니다.
    /// 식별자, 생성 시각, 비밀번호는 항상 저장된 값을 유지합니다.
    /// 존재하지 않는 사용자면 저장소를 건드리지 않고 `NotFound`를 반환합니다.
    pub async fn update(&self, id: &UserId, changes: UserChanges) -> AppResult<User> {
        let existing = self.require(id).await?;
        let changes = self.check_changes(&existing, changes).await?;

        let saved = self.store.save(existing.with_changes(changes)).await?;

        info!("사용자 정보 수정: {}", saved.id);
        Ok(saved)
    }

    /// 계정 활성화 (멱등)
    pub async fn activate(&self, id: &UserId) -> AppResult<User> {
        let user = self.transition(id, User::activated).await?;
        info!("사용자 활성화: {}", user.id);
        Ok(user)
    }

    /// 계정 비활성화 (멱등)
    pub async fn deactivate(&self, id: &UserId) -> AppResult<User> {
        let user = self.transition(id, User::deactivated).await?;
        info!("사용자 비활성화: {}", user.id);
        Ok(user)
    }

    /// 이메일 인증 완료 처리 (멱등)
    pub async fn verify_email(&self, id: &UserId) -> AppResult<User> {
        let user = self.transition(id, User::email_verified).await?;
        info!("이메일 인증 완료: {}", user.id);
        Ok(user)
    }

    /// 사용자 영구 삭제
    pub async fn delete(&self, id: &UserId) -> AppResult<()> {
        if !self.store.delete_by_id(id).await? {
            return Err(not_found(id));
        }

        info!("사용자 삭제: {}", id);
        Ok(())
    }

    pub async fn username_exists(&self, username: &str) -> AppResult<bool> {
        self.store.exists_by_username_ci(username).await
    }

    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        self.store.exists_by_email_ci(email).await
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.store.count().await
    }

    pub async fn active_count(&self) -> AppResult<u64> {
        self.store.count_active().await
    }

    pub async fn verified_count(&self) -> AppResult<u64> {
        self.store.count_verified().await
    }

    pub async fn stats(&self) -> AppResult<UserStats> {
        Ok(UserStats {
            total_users: self.count().await?,
            active_users: self.active_count().await?,
            verified_users: self.verified_count().await?,
        })
    }

    async fn require(&self, id: &UserId) -> AppResult<User> {
        self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn transition<F>(&self, id: &UserId, apply: F) -> AppResult<User>
    where
        F: FnOnce(User) -> User + Send,
    {
        let user = self.require(id).await?;
        self.store.save(apply(user)).await
    }

    /// 변경 요청의 사용자명/이메일을 정리하고 다른 사용자와의 중복을 확인합니다.
    ///
    /// 자기 자신의 값을 대소문자만 바꾸는 경우는 허용합니다.
    async fn check_changes(&self, existing: &User, changes: UserChanges) -> AppResult<UserChanges> {
        let username = match changes.username {
            Some(requested) => {
                let requested = validate_required_string(&requested, "사용자명")?;
                if normalize_key(&requested) != normalize_key(&existing.username)
                    && self.store.exists_by_username_ci(&requested).await?
                {
                    return Err(AppError::DuplicateUsername(requested));
                }
                Some(requested)
            }
            None => None,
        };

        let email = match changes.email {
            Some(requested) => {
                let requested = validate_required_string(&requested, "이메일")?;
                if normalize_key(&requested) != normalize_key(&existing.email)
                    && self.store.exists_by_email_ci(&requested).await?
                {
                    return Err(AppError::DuplicateEmail(requested));
                }
                Some(requested)
            }
            None => None,
        };

        Ok(UserChanges {
            username,
            email,
            ..changes
        })
    }
}

fn not_found(id: &UserId) -> AppError {
    AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
}
