//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`](user::User): 저장소에 존재하는 사용자
//! - [`NewUser`](user::NewUser): 식별자 부여 전의 등록 데이터
//! - [`UserId`](user::UserId): UUID 기반 식별자
//! - [`UserChanges`](user::UserChanges): 갱신 시 허용되는 필드 집합
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{NewUser, UserId};
//!
//! let new_user = NewUser::register(
//!     "alice".to_string(),
//!     "alice@example.com".to_string(),
//!     hashed_password,
//! );
//! let user = new_user.into_user(UserId::generate());
//! let user = user.email_verified();
//! ```

pub mod user;

pub use user::{NewUser, User, UserChanges, UserId};
