//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`DatabaseConfig`]에서 읽습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_service::db::Database;
//! use account_service::repositories::users::MongoUserRepository;
//!
//! let database = Arc::new(Database::new().await?);
//! let repository = MongoUserRepository::new(database);
//! repository.create_indexes().await?;
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

const APP_NAME: &str = "account_service";

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관하며,
/// 리포지토리 계층이 컬렉션에 접근할 수 있도록 합니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정으로 새 MongoDB 연결을 생성합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "account_service_dev")
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::uri(), DatabaseConfig::name()).await
    }

    /// 지정한 URI와 데이터베이스로 연결하고 `ping`으로 연결 상태를 검증합니다.
    pub async fn connect(uri: &str, database_name: String) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        // 모니터링 시 식별용
        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 클라이언트 생성 실패: {}", e)))?;

        client
            .database(&database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 연결 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
