//! # Core Module
//!
//! 계정 서비스 전역에서 공유하는 기반 타입들을 제공합니다.
//!
//! - [`errors`] - `AppError`와 `AppResult`, 에러 컨텍스트 확장 trait

pub mod errors;

pub use errors::*;
