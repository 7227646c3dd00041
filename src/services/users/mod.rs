//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 사용자 등록 (대소문자 무시 중복 방지, 비밀번호 해싱)
//! - 제한된 필드 집합을 통한 정보 수정
//! - 활성/비활성, 이메일 인증 상태 전이
//! - 목록/집계 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = user_service.register("alice", "alice@example.com", "secret1").await?;
//! let user = user_service.verify_email(&user.id).await?;
//! ```

pub mod user_service;

pub use user_service::{UserService, UserStats};
