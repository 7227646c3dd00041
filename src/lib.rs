//! 계정 관리 서비스 백엔드
//!
//! 사용자 계정의 등록, 조회, 수정, 활성화/비활성화, 이메일 인증 처리, 삭제를 담당하는
//! Actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **계정 관리**: 대소문자 무시 유일성이 보장되는 사용자명/이메일
//! - **비밀번호 보호**: bcrypt 해싱, 응답과 로그에서 해시 노출 없음
//! - **교체 가능한 저장소**: MongoDB 또는 인메모리 (`USER_STORE`)
//! - **Rate Limiting**: actix-governor 기반 요청 제한
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / DTO 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserService   │ ← 계정 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    UserStore    │ ← MongoDB / In-Memory
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_service::repositories::users::InMemoryUserStore;
//! use account_service::services::auth::BcryptPasswordHasher;
//! use account_service::services::users::UserService;
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserStore::new()),
//!     Arc::new(BcryptPasswordHasher::new(4)),
//! );
//! let user = service.register("bob", "bob@x.com", "secret1").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
