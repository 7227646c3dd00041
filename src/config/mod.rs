//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `.env` 파일은 `main`에서 `PROFILE`에 따라 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경, 서버, 데이터베이스, 해싱, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export USER_STORE="mongo"        # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="account_service_dev"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;

pub use data_config::*;
