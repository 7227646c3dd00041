//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`](users::UserStore) trait에만 의존하고,
//! 실제 저장소는 애플리케이션 시작 시 설정에 따라 선택됩니다.
//!
//! - [`MongoUserRepository`](users::user_repo::MongoUserRepository) - MongoDB 영구 저장소
//! - [`InMemoryUserStore`](users::memory_repo::InMemoryUserStore) - 테스트/로컬 실행용 메모리 저장소
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let exists = store.exists_by_email_ci("user@example.com").await?;
//! ```

pub mod users;
