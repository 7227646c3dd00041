//! # 애플리케이션 에러 시스템
//!
//! 계정 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 정의하고 `actix_web::ResponseError`를 구현하여
//! 서비스 계층의 실패가 그대로 HTTP 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 의미 | HTTP |
//! |------|------|------|
//! | `DuplicateUsername` | 사용자명 중복 (대소문자 무시) | 409 |
//! | `DuplicateEmail` | 이메일 중복 (대소문자 무시) | 409 |
//! | `NotFound` | 대상 사용자 없음 | 404 |
//! | `ValidationError` | 잘못된 입력 | 400 |
//! | `DatabaseError` | 저장소 오류 (분류되지 않은 실패) | 500 |
//! | `InternalError` | 기타 내부 오류 | 500 |
//!
//! 500 계열 응답의 본문에는 상세 내용을 싣지 않고 로그로만 남깁니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn load(service: &UserService, id: &UserId) -> AppResult<User> {
//!     service
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 이미 사용 중인 사용자명 (409 Conflict)
    #[error("Duplicate username: {0}")]
    DuplicateUsername(String),

    /// 이미 사용 중인 이메일 (409 Conflict)
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트가 요청을 수정해서 해결할 수 있는 에러인지 여부
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AppError::DatabaseError(_) | AppError::InternalError(_))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateUsername(_) | AppError::DuplicateEmail(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 클라이언트 에러는 메시지를 그대로 전달하고,
    /// 서버 에러는 로그에만 남긴 뒤 일반화된 메시지를 반환합니다.
    fn error_response(&self) -> HttpResponse {
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            log::error!("요청 처리 중 서버 오류: {}", self);
            "Internal server error".to_string()
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": message
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_errors_map_to_conflict() {
        let username = AppError::DuplicateUsername("bob".to_string());
        let email = AppError::DuplicateEmail("bob@x.com".to_string());

        assert_eq!(username.error_response().status(), StatusCode::CONFLICT);
        assert_eq!(email.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_body_is_opaque() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().try_into_bytes().unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("10.0.0.3"));
        assert!(text.contains("Internal server error"));
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::NotFound("x".to_string()).is_client_error());
        assert!(AppError::DuplicateEmail("x".to_string()).is_client_error());
        assert!(!AppError::InternalError("x".to_string()).is_client_error());
        assert!(!AppError::DatabaseError("x".to_string()).is_client_error());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
