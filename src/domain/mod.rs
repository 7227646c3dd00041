//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 규칙과 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 사용자 엔티티와 생명주기 전이
//! └── DTOs      - 요청/응답 데이터 전송 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 사용자 엔티티와 두 개의 독립적인 생명주기 축을 표현합니다.
//!
//! - 활성 축: `Active ⇄ Inactive` (초기값 Active)
//! - 인증 축: `Unverified → Verified` (초기값 Unverified, 되돌릴 수 없음)
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! HTTP 경계에서 사용하는 요청/응답 타입입니다.
//! 요청 DTO는 `validator`로 형식을 검증하고, 응답 DTO는 비밀번호를 포함하지 않습니다.

pub mod entities;
pub mod dto;
