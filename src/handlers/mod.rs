//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 같은 역할이며,
//! 핸들러는 요청 검증과 DTO 변환만 하고 비즈니스 규칙은 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - 계정 규칙                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserStore - MongoDB / In-Memory               ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! `UserService`는 `main`에서 한 번 만들어 `web::Data`로 등록하고,
//! 각 핸들러는 추출자로 받아 사용합니다.

pub mod users;
