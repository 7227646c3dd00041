//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 사용자 저장소, 비밀번호 해싱, Rate Limiting 설정을 관리합니다.
//! 파싱에 실패한 값은 경고를 남기고 기본값으로 대체합니다.

use std::env;
use std::str::FromStr;

use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::parse(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 환경 변수를 읽어 파싱합니다. 값이 없거나 잘못되면 기본값을 사용합니다.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }),
        Err(_) => default,
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        Self::resolve_cost(env::var("BCRYPT_COST").ok().as_deref(), &Environment::current())
    }

    /// 명시된 cost 문자열과 환경으로 최종 cost를 결정합니다.
    pub fn resolve_cost(raw: Option<&str>, env: &Environment) -> u32 {
        raw.and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "127.0.0.1" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수. 기본값: 4 (`WORKERS`)
    pub fn workers() -> usize {
        env_or("WORKERS", 4usize).max(1)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStoreKind {
    /// MongoDB `users` 컬렉션
    Mongo,
    /// 프로세스 메모리 (재시작 시 소실)
    Memory,
}

impl UserStoreKind {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => UserStoreKind::Memory,
            _ => UserStoreKind::Mongo,
        }
    }
}

/// 데이터베이스 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017" (`MONGODB_URI`)
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름. 기본값: "account_service_dev" (`DATABASE_NAME`)
    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "account_service_dev".to_string())
    }

    /// 사용자 저장소 종류. 기본값: Mongo (`USER_STORE`)
    pub fn user_store() -> UserStoreKind {
        env::var("USER_STORE")
            .map(|value| UserStoreKind::parse(&value))
            .unwrap_or(UserStoreKind::Mongo)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 0은 governor가 허용하지 않으므로 1로 올립니다.
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100u64).max(1),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200u32).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("DEV"), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("stage"), Environment::Staging);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_resolve_cost_rejects_out_of_range() {
        let prod = Environment::Production;

        assert_eq!(PasswordConfig::resolve_cost(Some("8"), &prod), 8);
        assert_eq!(PasswordConfig::resolve_cost(Some("3"), &prod), 12);
        assert_eq!(PasswordConfig::resolve_cost(Some("16"), &prod), 12);
        assert_eq!(PasswordConfig::resolve_cost(Some("abc"), &Environment::Test), 4);
        assert_eq!(PasswordConfig::resolve_cost(None, &Environment::Staging), 10);
    }

    #[test]
    fn test_user_store_kind_parse() {
        assert_eq!(UserStoreKind::parse("memory"), UserStoreKind::Memory);
        assert_eq!(UserStoreKind::parse(" In-Memory "), UserStoreKind::Memory);
        assert_eq!(UserStoreKind::parse("mongo"), UserStoreKind::Mongo);
        assert_eq!(UserStoreKind::parse("anything"), UserStoreKind::Mongo);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }

        if env::var("WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() && env::var("RATE_LIMIT_BURST_SIZE").is_err() {
            assert_eq!(
                RateLimitConfig::from_env(),
                RateLimitConfig { per_second: 100, burst_size: 200 }
            );
        }
    }
}
