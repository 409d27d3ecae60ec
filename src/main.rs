//! 사용자 관리 gRPC 서비스 메인 애플리케이션
//!
//! tonic 기반 gRPC 서버를 구동하고 저장소와 서비스를 초기화합니다.
//! 기본 저장소는 MongoDB이며, `STORE_BACKEND=memory`로 인메모리 저장소를 사용할 수 있습니다.

use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_grpc::config::{DatabaseConfig, ServerConfig, StoreBackend};
use user_service_grpc::core::errors::{AppResult, ErrorContext};
use user_service_grpc::db::Database;
use user_service_grpc::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use user_service_grpc::routes::configure_all_services;
use user_service_grpc::services::users::UserService;
use user_service_grpc::utils::display_terminal::print_startup_summary;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    // 고정 크기 워커 풀
    let workers = ServerConfig::workers();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers)
        .enable_all()
        .build()?;

    runtime.block_on(run(workers))?;
    Ok(())
}

async fn run(workers: usize) -> AppResult<()> {
    info!("🚀 사용자 서비스 시작중...");

    let user_repo = initialize_repository(StoreBackend::current()).await?;
    let backend_name = user_repo.name().to_string();
    let user_service = Arc::new(UserService::new(user_repo));

    let address = ServerConfig::bind_address().context("바인딩 주소 파싱 실패")?;
    let router = configure_all_services(user_service, workers)?;

    print_startup_summary(&address, &backend_name, workers);
    info!("🌐 gRPC 서버가 {} 에서 실행중입니다", address);

    router
        .serve_with_shutdown(address, shutdown_signal())
        .await
        .context("gRPC 서버 실행 실패")?;

    info!("👋 서버가 정상적으로 종료되었습니다");
    Ok(())
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// RUST_LOG=user_service_grpc=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}

/// 설정된 백엔드에 맞는 사용자 리포지토리를 생성합니다
///
/// MongoDB 백엔드는 시작 시 ping으로 연결을 확인하며, 실패하면 서버를 띄우지 않습니다.
async fn initialize_repository(backend: StoreBackend) -> AppResult<Arc<dyn UserRepository>> {
    match backend {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await?);
            let repository = MongoUserRepository::new(database, DatabaseConfig::users_collection());

            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            info!("🧪 인메모리 저장소 사용");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

/// Ctrl-C 수신 시 완료되는 종료 시그널
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("🛑 종료 시그널 수신, 서버를 종료합니다"),
        Err(e) => error!("종료 시그널 대기 실패: {}", e),
    }
}
