//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 저장소 백엔드, gRPC 서버 관련 설정을 환경 변수에서 읽습니다.
//! 모든 값은 기본값을 가지며, `.env` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드됩니다.

use std::env;
use std::net::SocketAddr;

use log::error;

/// 사용자 리포지토리 구현 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB 문서 저장소 (기본값)
    MongoDb,
    /// 프로세스 내 메모리 저장소 (로컬 실행/테스트용)
    Memory,
}

impl StoreBackend {
    /// `STORE_BACKEND` 환경 변수에서 백엔드를 결정합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("STORE_BACKEND").unwrap_or_else(|_| "mongodb".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::MongoDb,
        }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 기본 MongoDB URI (docker-compose 서비스명 기준)
    pub const DEFAULT_URI: &'static str = "mongodb://mongodb:27017/";
    pub const DEFAULT_DATABASE: &'static str = "user";
    pub const DEFAULT_COLLECTION: &'static str = "users";

    /// # Environment Variables
    ///
    /// - `MONGODB_URI`: MongoDB 연결 URI
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| Self::DEFAULT_URI.to_string())
    }

    /// # Environment Variables
    ///
    /// - `DATABASE_NAME`: 데이터베이스 이름
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| Self::DEFAULT_DATABASE.to_string())
    }

    /// # Environment Variables
    ///
    /// - `USERS_COLLECTION`: 사용자 컬렉션 이름
    pub fn users_collection() -> String {
        env::var("USERS_COLLECTION").unwrap_or_else(|_| Self::DEFAULT_COLLECTION.to_string())
    }
}

/// gRPC 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 50051;
    pub const DEFAULT_WORKERS: usize = 10;

    /// # Environment Variables
    ///
    /// - `SERVER_PORT`: 리스닝 포트 (기본값: 50051)
    pub fn port() -> u16 {
        env::var("SERVER_PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .unwrap_or_else(|e| {
                error!("SERVER_PORT 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_PORT);
                Self::DEFAULT_PORT
            })
    }

    /// # Environment Variables
    ///
    /// - `SERVER_HOST`: 바인딩 호스트 (기본값: 0.0.0.0)
    pub fn host() -> String {
        env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수이자 연결당 동시 처리 요청 수 상한
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_WORKERS`: 1 이상 (기본값: 10)
    pub fn workers() -> usize {
        let workers = env::var("SERVER_WORKERS")
            .unwrap_or_else(|_| Self::DEFAULT_WORKERS.to_string())
            .parse::<usize>()
            .unwrap_or_else(|e| {
                error!("SERVER_WORKERS 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_WORKERS);
                Self::DEFAULT_WORKERS
            });

        workers.max(1)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> Result<SocketAddr, std::net::AddrParseError> {
        Self::format_address(&Self::host(), Self::port()).parse()
    }

    fn format_address(host: &str, port: u16) -> String {
        // IPv6 리터럴은 대괄호로 감싸야 SocketAddr 파싱이 가능
        if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, port)
        } else {
            format!("{}:{}", host, port)
        }
    }
}
