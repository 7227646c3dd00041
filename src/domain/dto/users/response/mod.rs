//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 안전한 형태로 전달합니다.
//!
//! - **데이터 은닉**: 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.
//! - **일관성**: 필드명은 snake_case JSON으로 직렬화됩니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "6f1c1f8e-3c4b-4a57-9f39-2f3c8f0e2b11",
//!   "username": "bob",
//!   "email": "bob@x.com",
//!   "first_name": null,
//!   "last_name": null,
//!   "is_active": true,
//!   "is_email_verified": false,
//!   "created_at": "2026-10-17T09:00:00Z",
//!   "updated_at": "2026-10-17T09:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::{ExistsResponse, UserResponse, UserStatsResponse};
