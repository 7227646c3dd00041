//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 대소문자 무시 키 생성
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{normalize_key, validate_required_string};
//!
//! let username = validate_required_string("  Alice  ", "사용자명")?;
//! assert_eq!(normalize_key(&username), "alice");
//! ```

pub mod string_utils;
