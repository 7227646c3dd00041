//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **형식 검증**: 이메일, 길이, 문자 집합 (validator)
//! 3. **비즈니스 검증**: 대소문자 무시 중복 확인 (서비스 계층)
//!
//! 검증 실패 시 `validator::ValidationErrors`는 핸들러에서
//! `AppError::ValidationError`(400)로 변환됩니다.

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
