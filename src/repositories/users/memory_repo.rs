//! # 메모리 사용자 저장소
//!
//! `RwLock`으로 보호되는 벡터에 사용자를 보관하는 [`UserStore`] 구현입니다.
//! 테스트와 `USER_STORE=memory` 로컬 실행에 사용합니다.
//!
//! 유일성 검사와 쓰기는 같은 쓰기 락 안에서 수행되므로
//! MongoDB 유니크 인덱스와 동일하게 동시 등록 경합에서도 중복이 생기지 않습니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::UserStore;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{NewUser, User, UserId};
use crate::utils::string_utils::normalize_key;

/// 메모리 기반 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 락이 손상되었습니다".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 락이 손상되었습니다".to_string()))
    }

    fn filtered<F>(&self, predicate: F) -> AppResult<Vec<User>>
    where
        F: Fn(&User) -> bool,
    {
        Ok(self.read()?.iter().filter(|user| predicate(user)).cloned().collect())
    }

    fn counted<F>(&self, predicate: F) -> AppResult<u64>
    where
        F: Fn(&User) -> bool,
    {
        Ok(self.read()?.iter().filter(|user| predicate(user)).count() as u64)
    }
}

/// 저장소 수준 유일성 제약
///
/// `except`로 지정한 사용자(자기 자신)는 비교에서 제외합니다.
/// 서비스의 사전 확인과 같은 순서로, 사용자명 충돌을 이메일 충돌보다 먼저 보고합니다.
fn ensure_unique(users: &[User], username: &str, email: &str, except: Option<&UserId>) -> AppResult<()> {
    let username_key = normalize_key(username);
    let email_key = normalize_key(email);
    let is_other = |user: &&User| Some(&user.id) != except;

    if users.iter().filter(is_other).any(|user| normalize_key(&user.username) == username_key) {
        return Err(AppError::DuplicateUsername(username.to_string()));
    }

    if users.iter().filter(is_other).any(|user| normalize_key(&user.email) == email_key) {
        return Err(AppError::DuplicateEmail(email.to_string()));
    }

    Ok(())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let mut users = self.write()?;
        ensure_unique(&users, &user.username, &user.email, None)?;

        let stored = user.into_user(UserId::generate());
        users.push(stored.clone());

        Ok(stored)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut users = self.write()?;
        ensure_unique(&users, &user.username, &user.email, Some(&user.id))?;

        let slot = users
            .iter_mut()
            .find(|existing| existing.id == user.id)
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", user.id)))?;
        *slot = user.clone();

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.read()?.iter().find(|user| &user.id == id).cloned())
    }

    async fn find_by_username_ci(&self, username: &str) -> AppResult<Option<User>> {
        let key = normalize_key(username);
        Ok(self.read()?.iter().find(|user| normalize_key(&user.username) == key).cloned())
    }

    async fn find_by_email_ci(&self, email: &str) -> AppResult<Option<User>> {
        let key = normalize_key(email);
        Ok(self.read()?.iter().find(|user| normalize_key(&user.email) == key).cloned())
    }

    async fn exists_by_username_ci(&self, username: &str) -> AppResult<bool> {
        Ok(self.find_by_username_ci(username).await?.is_some())
    }

    async fn exists_by_email_ci(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email_ci(email).await?.is_some())
    }

    async fn exists_by_id(&self, id: &UserId) -> AppResult<bool> {
        Ok(self.read()?.iter().any(|user| &user.id == id))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.clone())
    }

    async fn find_active(&self) -> AppResult<Vec<User>> {
        self.filtered(|user| user.is_active)
    }

    async fn find_verified(&self) -> AppResult<Vec<User>> {
        self.filtered(|user| user.is_email_verified)
    }

    async fn delete_by_id(&self, id: &UserId) -> AppResult<bool> {
        let mut users = self.write()?;
        let before = users.len();
        users.retain(|user| &user.id != id);

        Ok(users.len() < before)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.read()?.len() as u64)
    }

    async fn count_active(&self) -> AppResult<u64> {
        self.counted(|user| user.is_active)
    }

    async fn count_verified(&self) -> AppResult<u64> {
        self.counted(|user| user.is_email_verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser::register(username.to_string(), email.to_string(), "hash".to_string())
    }

    #[actix_web::test]
    async fn test_username_conflict_reported_before_email_conflict() {
        let store = InMemoryUserStore::new();
        store.insert(new_user("x", "bob@x.com")).await.unwrap();
        store.insert(new_user("bob", "y@x.com")).await.unwrap();

        let result = store.insert(new_user("BOB", "BOB@x.com")).await;
        assert_eq!(result, Err(AppError::DuplicateUsername("BOB".to_string())));
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_insert_assigns_id_and_is_retrievable() {
        let store = InMemoryUserStore::new();
        let user = store.insert(new_user("alice", "alice@x.com")).await.unwrap();

        let found = store.find_by_id(&user.id).await.unwrap();
        assert_eq!(found, Some(user.clone()));
        assert!(store.exists_by_id(&user.id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_lookups_ignore_case() {
        let store = InMemoryUserStore::new();
        store.insert(new_user("Alice", "Alice@X.com")).await.unwrap();

        assert!(store.find_by_username_ci("alice").await.unwrap().is_some());
        assert!(store.find_by_email_ci("ALICE@x.COM").await.unwrap().is_some());
        assert!(store.exists_by_username_ci("ALICE").await.unwrap());
        assert!(!store.exists_by_email_ci("bob@x.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_lookups_do_not_trim_padding() {
        let store = InMemoryUserStore::new();
        store.insert(new_user("bob", "bob@x.com")).await.unwrap();

        assert!(store.find_by_username_ci("  bob ").await.unwrap().is_none());
        assert!(!store.exists_by_email_ci(" bob@x.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_insert_enforces_uniqueness() {
        let store = InMemoryUserStore::new();
        store.insert(new_user("alice", "alice@x.com")).await.unwrap();

        let by_username = store.insert(new_user("ALICE", "other@x.com")).await;
        assert!(matches!(by_username, Err(AppError::DuplicateUsername(_))));

        let by_email = store.insert(new_user("other", "Alice@X.com")).await;
        assert!(matches!(by_email, Err(AppError::DuplicateEmail(_))));

        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_save_overwrites_and_enforces_uniqueness() {
        let store = InMemoryUserStore::new();
        let alice = store.insert(new_user("alice", "alice@x.com")).await.unwrap();
        let bob = store.insert(new_user("bob", "bob@x.com")).await.unwrap();

        // 자기 자신과의 비교는 제외
        let renamed = User { username: "ALICE".to_string(), ..alice.clone() };
        store.save(renamed).await.unwrap();
        let stored = store.find_by_id(&alice.id).await.unwrap().unwrap();
        assert_eq!(stored.username, "ALICE");

        let clash = User { email: "ALICE@x.com".to_string(), ..bob };
        assert!(matches!(store.save(clash).await, Err(AppError::DuplicateEmail(_))));
    }

    #[actix_web::test]
    async fn test_save_missing_user_is_not_found() {
        let store = InMemoryUserStore::new();
        let ghost = new_user("ghost", "ghost@x.com").into_user(UserId::generate());

        assert!(matches!(store.save(ghost).await, Err(AppError::NotFound(_))));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_filters_counts_and_delete() {
        let store = InMemoryUserStore::new();
        let alice = store.insert(new_user("alice", "alice@x.com")).await.unwrap();
        let bob = store.insert(new_user("bob", "bob@x.com")).await.unwrap();
        store.save(bob.clone().deactivated()).await.unwrap();
        store.save(alice.clone().email_verified()).await.unwrap();

        let active = store.find_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, alice.id);
        assert_eq!(store.count_active().await.unwrap(), 1);
        assert_eq!(store.count_verified().await.unwrap(), 1);
        assert_eq!(store.find_verified().await.unwrap()[0].id, alice.id);

        let all: Vec<_> = store.find_all().await.unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(all, vec![alice.id, bob.id]);

        assert!(store.delete_by_id(&alice.id).await.unwrap());
        assert!(!store.delete_by_id(&alice.id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
