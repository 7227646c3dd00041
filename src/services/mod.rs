//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (등록, 조회, 수정, 활성/비활성, 이메일 인증, 삭제)
//! - 대소문자 무시 사용자명/이메일 유일성 사전 확인
//! - 비밀번호 해싱 협력자 (bcrypt)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{auth::BcryptPasswordHasher, users::UserService};
//!
//! let service = UserService::new(store, Arc::new(BcryptPasswordHasher::from_config()));
//! let user = service.register("alice", "alice@example.com", "secret1").await?;
//! ```

pub mod users;
pub mod auth;
