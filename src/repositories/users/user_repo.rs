//! # MongoDB 사용자 리포지토리
//!
//! [`UserStore`]의 MongoDB 구현입니다.
//!
//! ## 컬렉션 구조
//!
//! - **컬렉션명**: `users`
//! - **식별자**: `_id`에 UUID 문자열 저장
//! - **정규화 키**: `username_key`, `email_key` (소문자)
//! - **인덱스**: `username_key`(unique), `email_key`(unique), `created_at`(desc)
//!
//! 대소문자 무시 조회와 유일성은 모두 정규화 키 기준입니다.
//! 유니크 인덱스 위반(코드 11000)은 인덱스 이름으로 구분해
//! `DuplicateUsername` / `DuplicateEmail`로 변환합니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{self, doc, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserStore;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{NewUser, User, UserId};
use crate::utils::string_utils::normalize_key;

const COLLECTION_NAME: &str = "users";
const USERNAME_INDEX: &str = "username_unique";
const EMAIL_INDEX: &str = "email_unique";
const CREATED_AT_INDEX: &str = "created_at_desc";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `users` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    username: String,
    username_key: String,
    email: String,
    email_key: String,
    password_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    is_active: bool,
    is_email_verified: bool,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            username_key: normalize_key(&user.username),
            email: user.email.clone(),
            email_key: normalize_key(&user.email),
            password_hash: user.password_hash.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_active: user.is_active,
            is_email_verified: user.is_email_verified,
            created_at: to_bson_datetime(user.created_at),
            updated_at: to_bson_datetime(user.updated_at),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = AppError;

    fn try_from(document: UserDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&document.id)
            .map_err(|e| AppError::DatabaseError(format!("잘못된 사용자 ID 문서 {}: {}", document.id, e)))?;

        Ok(Self {
            id: UserId::from(id),
            username: document.username,
            email: document.email,
            password_hash: document.password_hash,
            first_name: document.first_name,
            last_name: document.last_name,
            is_active: document.is_active,
            is_email_verified: document.is_email_verified,
            created_at: from_bson_datetime(document.created_at)?,
            updated_at: from_bson_datetime(document.updated_at)?,
        })
    }
}

fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

fn from_bson_datetime(value: bson::DateTime) -> AppResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
        .ok_or_else(|| AppError::DatabaseError(format!("표현할 수 없는 시각입니다: {}", value)))
}

fn database_error(error: MongoError) -> AppError {
    AppError::DatabaseError(error.to_string())
}

/// 쓰기 에러를 도메인 에러로 변환합니다.
///
/// 유니크 인덱스 위반이면 어떤 인덱스인지에 따라 중복 에러로,
/// 그 외에는 분류되지 않은 `DatabaseError`로 변환합니다.
fn map_write_error(error: MongoError, username: &str, email: &str) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = error.kind.as_ref() {
        if write_error.code == DUPLICATE_KEY_CODE {
            if write_error.message.contains(USERNAME_INDEX) {
                return AppError::DuplicateUsername(username.to_string());
            }
            if write_error.message.contains(EMAIL_INDEX) {
                return AppError::DuplicateEmail(email.to_string());
            }
        }
    }

    database_error(error)
}

/// MongoDB 사용자 리포지토리
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db.get_database().collection::<UserDocument>(COLLECTION_NAME)
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<User>> {
        self.collection()
            .find_one(filter)
            .await
            .map_err(database_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<User>> {
        let documents: Vec<UserDocument> = self
            .collection()
            .find(filter)
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)?;

        documents.into_iter().map(User::try_from).collect()
    }

    async fn count_matching(&self, filter: Document) -> AppResult<u64> {
        self.collection()
            .count_documents(filter)
            .await
            .map_err(database_error)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 실행합니다.
    ///
    /// 1. `username_key` 유니크 인덱스 - 대소문자 무시 사용자명 유일성
    /// 2. `email_key` 유니크 인덱스 - 대소문자 무시 이메일 유일성
    /// 3. `created_at` 내림차순 인덱스 - 목록 정렬
    ///
    /// 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username_key": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(USERNAME_INDEX.to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email_key": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(EMAIL_INDEX.to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name(CREATED_AT_INDEX.to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([username_index, email_index, created_at_index])
            .await
            .map_err(database_error)?;

        info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let user = user.into_user(UserId::generate());
        let document = UserDocument::from(&user);

        self.collection()
            .insert_one(&document)
            .await
            .map_err(|e| map_write_error(e, &user.username, &user.email))?;

        debug!("사용자 문서 생성: {}", user.id);
        Ok(user)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let document = UserDocument::from(&user);

        let result = self
            .collection()
            .replace_one(doc! { "_id": document.id.as_str() }, &document)
            .await
            .map_err(|e| map_write_error(e, &user.username, &user.email))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", user.id)));
        }

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        self.find_one(doc! { "_id": id.to_string() }).await
    }

    async fn find_by_username_ci(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one(doc! { "username_key": normalize_key(username) }).await
    }

    async fn find_by_email_ci(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one(doc! { "email_key": normalize_key(email) }).await
    }

    async fn exists_by_username_ci(&self, username: &str) -> AppResult<bool> {
        Ok(self.count_matching(doc! { "username_key": normalize_key(username) }).await? > 0)
    }

    async fn exists_by_email_ci(&self, email: &str) -> AppResult<bool> {
        Ok(self.count_matching(doc! { "email_key": normalize_key(email) }).await? > 0)
    }

    async fn exists_by_id(&self, id: &UserId) -> AppResult<bool> {
        Ok(self.count_matching(doc! { "_id": id.to_string() }).await? > 0)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.find_many(doc! {}).await
    }

    async fn find_active(&self) -> AppResult<Vec<User>> {
        self.find_many(doc! { "is_active": true }).await
    }

    async fn find_verified(&self) -> AppResult<Vec<User>> {
        self.find_many(doc! { "is_email_verified": true }).await
    }

    async fn delete_by_id(&self, id: &UserId) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(database_error)?;

        Ok(result.deleted_count > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        self.count_matching(doc! {}).await
    }

    async fn count_active(&self) -> AppResult<u64> {
        self.count_matching(doc! { "is_active": true }).await
    }

    async fn count_verified(&self) -> AppResult<u64> {
        self.count_matching(doc! { "is_email_verified": true }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        NewUser {
            first_name: Some("Alice".to_string()),
            ..NewUser::register("Alice".to_string(), "Alice@Example.com".to_string(), "hash".to_string())
        }
        .into_user(UserId::generate())
    }

    #[test]
    fn test_document_carries_normalized_keys() {
        let user = sample_user();
        let document = UserDocument::from(&user);

        assert_eq!(document.id, user.id.to_string());
        assert_eq!(document.username, "Alice");
        assert_eq!(document.username_key, "alice");
        assert_eq!(document.email_key, "alice@example.com");
    }

    #[test]
    fn test_document_round_trip_preserves_user() {
        let user = sample_user().email_verified();
        let restored = User::try_from(UserDocument::from(&user)).unwrap();

        assert_eq!(restored, user);
    }

    #[test]
    fn test_corrupt_document_id_is_database_error() {
        let mut document = UserDocument::from(&sample_user());
        document.id = "not-a-uuid".to_string();

        assert!(matches!(User::try_from(document), Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_bson_serialization_omits_empty_names() {
        let user = NewUser::register("bob".to_string(), "bob@x.com".to_string(), "hash".to_string())
            .into_user(UserId::generate());
        let bson_doc = bson::to_document(&UserDocument::from(&user)).unwrap();

        assert!(bson_doc.contains_key("_id"));
        assert!(!bson_doc.contains_key("first_name"));
        assert!(bson_doc.get_datetime("created_at").is_ok());
    }

    fn write_error(code: i32, index: &str) -> MongoError {
        let write_error: mongodb::error::WriteError = bson::from_document(doc! {
            "code": code,
            "errmsg": format!("E11000 duplicate key error collection: account_service_dev.users index: {} dup key", index),
        })
        .unwrap();

        MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    #[test]
    fn test_duplicate_key_on_username_index() {
        let error = map_write_error(write_error(DUPLICATE_KEY_CODE, USERNAME_INDEX), "Bob", "bob@x.com");
        assert_eq!(error, AppError::DuplicateUsername("Bob".to_string()));
    }

    #[test]
    fn test_duplicate_key_on_email_index() {
        let error = map_write_error(write_error(DUPLICATE_KEY_CODE, EMAIL_INDEX), "Bob", "bob@x.com");
        assert_eq!(error, AppError::DuplicateEmail("bob@x.com".to_string()));
    }

    #[test]
    fn test_other_write_errors_are_database_errors() {
        let error = map_write_error(write_error(121, USERNAME_INDEX), "Bob", "bob@x.com");
        assert!(matches!(error, AppError::DatabaseError(_)));

        let error = map_write_error(write_error(DUPLICATE_KEY_CODE, "some_other_index"), "Bob", "bob@x.com");
        assert!(matches!(error, AppError::DatabaseError(_)));
    }
}
