//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 풀은 드라이버 기본 동작에 맡기며, 재시도나 별도 풀 설정은 하지 않습니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # MongoDB 연결 URI
//! export MONGODB_URI="mongodb://mongodb:27017/"
//!
//! # 사용할 데이터베이스 이름
//! export DATABASE_NAME="user"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//! use crate::repositories::users::MongoUserRepository;
//!
//! let database = Arc::new(Database::new().await?);
//! let user_repo = MongoUserRepository::new(database, "users");
//! ```

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::core::errors::AppResult;

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관하며,
/// 리포지토리 계층에서 컬렉션에 접근하기 위한 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 환경 변수 설정으로 새 MongoDB 연결을 생성합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://mongodb:27017/")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "user")
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await
    }

    /// 주어진 URI와 데이터베이스 이름으로 연결하고 ping으로 연결 상태를 검증합니다.
    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        // MongoDB 클라이언트 옵션 파싱
        let mut client_options = ClientOptions::parse(uri).await?;

        // 애플리케이션 이름 설정 (서버 측 로그/모니터링 식별용)
        client_options.app_name = Some("user_service_grpc".to_string());

        let client = Client::with_options(client_options)?;

        let database = Self {
            client,
            database_name: database_name.to_string(),
        };

        database.ping().await?;

        info!("✅ MongoDB 연결 성공: {}", database.database_name);

        Ok(database)
    }

    /// 서버 연결 상태 확인
    pub async fn ping(&self) -> AppResult<()> {
        self.get_database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// 실제 MongoDB 작업을 위한 `mongodb::Database` 인스턴스를 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let users = database.get_database().collection::<UserDocument>("users");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// MongoDB 클라이언트 인스턴스를 반환합니다.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
