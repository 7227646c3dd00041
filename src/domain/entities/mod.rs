//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! ## 엔티티 설계 원칙
//!
//! - **값 전이**: 상태 변경은 기존 값을 소비하고 새 값을 반환합니다.
//! - **저장소 독립**: 엔티티는 `chrono`/`uuid` 타입만 사용하고,
//!   MongoDB 문서 매핑은 리포지토리 계층이 담당합니다.
//! - **민감 정보 보호**: 비밀번호 해시는 `Debug` 출력에서 가려지고
//!   엔티티 자체는 직렬화되지 않습니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs
//! └── users/
//!     ├── mod.rs
//!     └── user.rs     ← User, NewUser, UserId, UserChanges
//! ```

pub mod users;
