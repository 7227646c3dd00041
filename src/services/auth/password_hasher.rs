//! # 비밀번호 해싱 협력자
//!
//! 계정 서비스는 해싱 알고리즘을 직접 구현하지 않고 [`PasswordHasher`]에 위임합니다.
//! 운영 구현은 `bcrypt` 크레이트를 사용하며, cost는 [`PasswordConfig`]가 환경별로 결정합니다.

use log::debug;

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// 평문 비밀번호를 불투명한 자격 증명으로 변환하는 협력자
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> AppResult<String>;

    fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool>;
}

/// bcrypt 기반 해셔
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 bcrypt cost 사용
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> AppResult<String> {
        let start = std::time::Instant::now();

        let hashed = bcrypt::hash(plaintext, self.cost)
            .with_context(|| format!("비밀번호 해싱 실패 (cost {})", self.cost))?;

        debug!("Password hashing took: {:?} (cost {})", start.elapsed(), self.cost);
        Ok(hashed)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(plaintext, hash).context("비밀번호 검증 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher::new(4);
        let hashed = hasher.hash("secret1").unwrap();

        assert_ne!(hashed, "secret1");
        assert!(hasher.verify("secret1", &hashed).unwrap());
        assert!(!hasher.verify("secret2", &hashed).unwrap());
    }

    #[test]
    fn test_invalid_cost_is_internal_error() {
        let hasher = BcryptPasswordHasher::new(99);
        assert!(matches!(hasher.hash("secret1"), Err(AppError::InternalError(_))));
    }
}
