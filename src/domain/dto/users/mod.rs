//! # 사용자 DTO 모듈
//!
//! 사용자 관련 HTTP 요청/응답 타입을 모읍니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
