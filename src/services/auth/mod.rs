//! 인증 보조 서비스 모듈
//!
//! 계정 서비스는 세션/토큰 인증을 다루지 않습니다.
//! 이 모듈은 회원가입에 필요한 비밀번호 해싱 협력자만 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{BcryptPasswordHasher, PasswordHasher};
//!
//! let hasher = BcryptPasswordHasher::from_config();
//! let hash = hasher.hash("secret1")?;
//! assert!(hasher.verify("secret1", &hash)?);
//! ```

pub mod password_hasher;

pub use password_hasher::{BcryptPasswordHasher, PasswordHasher};
