//! 사용자 저장소 계약과 구현체
//!
//! [`UserStore`]는 계정 서비스가 소비하는 영속성 인터페이스입니다.
//! 단일 행 연산에 대해 ACID를 만족한다고 가정하며,
//! **사용자명/이메일 유일성을 저장소 수준에서 강제해야 합니다.**
//! 서비스의 사전 중복 확인은 친절한 에러 메시지를 위한 빠른 경로일 뿐이고,
//! 동시 등록 경합에서의 정합성은 저장소 제약이 보장합니다.
//!
//! 제약 위반은 `AppError::DuplicateUsername` / `AppError::DuplicateEmail`로 보고하고,
//! 그 외 저장소 장애는 `AppError::DatabaseError`로 전파합니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::{NewUser, User, UserId};

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserStore;
pub use user_repo::MongoUserRepository;

/// 사용자 영속성 포트
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 저장소가 부여한 식별자를 가진 사용자를 반환합니다.
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// 기존 사용자를 전체 덮어씁니다. 존재하지 않으면 `NotFound`.
    async fn save(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// 사용자명으로 조회 (대소문자 무시)
    async fn find_by_username_ci(&self, username: &str) -> AppResult<Option<User>>;

    /// 이메일로 조회 (대소문자 무시)
    async fn find_by_email_ci(&self, email: &str) -> AppResult<Option<User>>;

    async fn exists_by_username_ci(&self, username: &str) -> AppResult<bool>;

    async fn exists_by_email_ci(&self, email: &str) -> AppResult<bool>;

    async fn exists_by_id(&self, id: &UserId) -> AppResult<bool>;

    /// 전체 사용자 (생성 순)
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 활성 사용자 (생성 순)
    async fn find_active(&self) -> AppResult<Vec<User>>;

    /// 이메일 인증 완료 사용자 (생성 순)
    async fn find_verified(&self) -> AppResult<Vec<User>>;

    /// 사용자를 영구 삭제합니다. 실제로 삭제된 행이 있으면 `true`.
    async fn delete_by_id(&self, id: &UserId) -> AppResult<bool>;

    async fn count(&self) -> AppResult<u64>;

    async fn count_active(&self) -> AppResult<u64>;

    async fn count_verified(&self) -> AppResult<u64>;
}
