//! # Route Configuration
//!
//! 애플리케이션의 모든 HTTP 라우트를 등록합니다.
//!
//! - `GET /health` - 헬스체크
//! - `/api/v1/users/*` - 사용자 계정 관리

use actix_web::{error, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(user_service))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // JSON 본문 오류도 다른 검증 오류와 같은 형태로 응답
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::ValidationError(err.to_string()))
    }));

    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 고정 경로(`/active`, `/verified`, `/stats`)는 `/{user_id}`보다 먼저 등록해야
/// ID로 해석되지 않습니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"username":"newuser","email":"user@example.com","password":"secret1"}'
///
/// curl http://localhost:8080/api/v1/users/stats
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::list_active_users)
            .service(handlers::users::list_verified_users)
            .service(handlers::users::get_user_stats)
            .service(handlers::users::get_user_by_username)
            .service(handlers::users::get_user_by_email)
            .service(handlers::users::username_exists)
            .service(handlers::users::email_exists)
            .service(handlers::users::activate_user)
            .service(handlers::users::deactivate_user)
            .service(handlers::users::verify_user_email)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "UP",
///   "service": "account_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "UP",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "UP");
        assert_eq!(body["service"], "account_service");
        assert!(body["timestamp"].as_str().is_some());
    }
}
