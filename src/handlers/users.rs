//! # User Management HTTP Handlers
//!
//! 사용자 계정 관리 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 핸들러는 `web::Data<UserService>`로 주입된 서비스에 위임하며,
//! 응답은 항상 비밀번호가 빠진 [`UserResponse`]로 변환됩니다.
//!
//! ## 엔드포인트 (`/api/v1/users` 하위)
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `` | 사용자 등록 | 201 Created |
//! | `GET` | `` | 전체 목록 | 200 OK |
//! | `GET` | `/active` | 활성 사용자 목록 | 200 OK |
//! | `GET` | `/verified` | 이메일 인증 사용자 목록 | 200 OK |
//! | `GET` | `/stats` | 사용자 통계 | 200 OK |
//! | `GET` | `/{id}` | ID로 조회 | 200 / 404 |
//! | `GET` | `/username/{username}` | 사용자명으로 조회 | 200 / 404 |
//! | `GET` | `/email/{email}` | 이메일로 조회 | 200 / 404 |
//! | `GET` | `/exists/username/{username}` | 사용자명 존재 여부 | 200 OK |
//! | `GET` | `/exists/email/{email}` | 이메일 존재 여부 | 200 OK |
//! | `PUT` | `/{id}` | 사용자 정보 수정 | 200 / 404 / 409 |
//! | `PUT` | `/{id}/activate` | 계정 활성화 | 200 / 404 |
//! | `PUT` | `/{id}/deactivate` | 계정 비활성화 | 200 / 404 |
//! | `PUT` | `/{id}/verify-email` | 이메일 인증 처리 | 200 / 404 |
//! | `DELETE` | `/{id}` | 사용자 삭제 | 204 / 404 |
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @PostMapping
//! public ResponseEntity<UserResponse> createUser(@Valid @RequestBody CreateUserRequest request) {
//!     return ResponseEntity.status(HttpStatus.CREATED).body(userService.createUser(request));
//! }
//! ```
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_user(
//!     service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let user = service.register(&payload.username, &payload.email, &payload.password).await?;
//!     Ok(HttpResponse::Created().json(UserResponse::from(user)))
//! }
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{ExistsResponse, UserResponse, UserStatsResponse};
use crate::domain::entities::users::{User, UserId};
use crate::services::users::UserService;

fn parse_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse::<UserId>()
}

fn found(user: Option<User>, what: &str) -> Result<HttpResponse, AppError> {
    user.map(|user| HttpResponse::Ok().json(UserResponse::from(user)))
        .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", what)))
}

fn user_list(users: Vec<User>) -> HttpResponse {
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    HttpResponse::Ok().json(body)
}

/// 사용자 등록 핸들러
///
/// `POST /api/v1/users`
///
/// 형식 검증(사용자명 3-30자 영숫자/언더스코어, 이메일 형식, 비밀번호 6-128자) 후
/// 서비스에 등록을 위임합니다. 사용자명/이메일이 대소문자 무시로 이미 존재하면 409입니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"username":"bob","email":"bob@x.com","password":"secret1"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    let user = service
        .register(&request.username, &request.email, &request.password)
        .await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 전체 사용자 목록 (생성 순)
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    Ok(user_list(service.list_all().await?))
}

#[get("/active")]
pub async fn list_active_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    Ok(user_list(service.list_active().await?))
}

#[get("/verified")]
pub async fn list_verified_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    Ok(user_list(service.list_verified().await?))
}

/// 사용자 통계 (전체 / 활성 / 이메일 인증)
#[get("/stats")]
pub async fn get_user_stats(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let stats = service.stats().await?;
    Ok(HttpResponse::Ok().json(UserStatsResponse::from(stats)))
}

/// 사용자 조회 핸들러
///
/// `GET /api/v1/users/{user_id}`
///
/// `user_id`가 UUID 형식이 아니면 400, 존재하지 않으면 404를 반환합니다.
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&user_id)?;
    found(service.find_by_id(&id).await?, &user_id)
}

#[get("/username/{username}")]
pub async fn get_user_by_username(
    service: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    found(service.find_by_username(&username).await?, &username)
}

#[get("/email/{email}")]
pub async fn get_user_by_email(
    service: web::Data<UserService>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    found(service.find_by_email(&email).await?, &email)
}

#[get("/exists/username/{username}")]
pub async fn username_exists(
    service: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let exists = service.username_exists(&username).await?;
    Ok(HttpResponse::Ok().json(ExistsResponse { exists }))
}

#[get("/exists/email/{email}")]
pub async fn email_exists(
    service: web::Data<UserService>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let exists = service.email_exists(&email).await?;
    Ok(HttpResponse::Ok().json(ExistsResponse { exists }))
}

/// 사용자 정보 수정 핸들러
///
/// `PUT /api/v1/users/{user_id}`
///
/// 요청 본문에는 변경 가능한 필드(`username`, `email`, `first_name`, `last_name`, `is_active`)만
/// 허용됩니다. 식별자, 생성 시각, 비밀번호, 이메일 인증 상태는 저장된 값이 유지됩니다.
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&user_id)?;
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = service.update(&id, payload.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[put("/{user_id}/activate")]
pub async fn activate_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&user_id)?;
    let user = service.activate(&id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[put("/{user_id}/deactivate")]
pub async fn deactivate_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&user_id)?;
    let user = service.deactivate(&id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[put("/{user_id}/verify-email")]
pub async fn verify_user_email(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&user_id)?;
    let user = service.verify_email(&id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /api/v1/users/{user_id}`
///
/// 물리적 삭제(Hard Delete)이며 복구할 수 없습니다.
/// 삭제 후 같은 사용자명과 이메일로 다시 등록할 수 있습니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&user_id)?;
    service.delete(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
