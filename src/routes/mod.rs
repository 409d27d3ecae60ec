//! gRPC 서비스 등록
//!
//! 사용자 서비스와 서버 리플렉션 서비스를 하나의 tonic 라우터로 구성합니다.
//! 리플렉션은 `grpcurl` 같은 도구가 스키마 없이 서비스를 탐색할 수 있게 해 줍니다.
//!
//! ```bash
//! grpcurl -plaintext localhost:50051 list
//! grpcurl -plaintext -d '{"id": "..."}' localhost:50051 user.v1.UserService/GetUser
//! ```

use std::sync::Arc;

use log::info;
use tonic::transport::{server::Router, Server};

use crate::core::errors::{AppResult, ErrorContext};
use crate::handlers::UserGrpcHandler;
use crate::proto::{user_v1::user_service_server::UserServiceServer, FILE_DESCRIPTOR_SET};
use crate::services::users::UserService;

/// 모든 gRPC 서비스를 등록한 라우터를 생성합니다.
///
/// `max_concurrent_requests`는 연결당 동시에 처리하는 요청 수 상한입니다.
pub fn configure_all_services(
    user_service: Arc<UserService>,
    max_concurrent_requests: usize,
) -> AppResult<Router> {
    let reflection_v1 = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()
        .context("리플렉션 서비스(v1) 생성 실패")?;

    // 구버전 클라이언트(grpcurl 등)는 v1alpha만 지원
    let reflection_v1alpha = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1alpha()
        .context("리플렉션 서비스(v1alpha) 생성 실패")?;

    info!("📚 gRPC 리플렉션 활성화: user.v1.UserService");

    let router = Server::builder()
        .concurrency_limit_per_connection(max_concurrent_requests)
        .add_service(UserServiceServer::new(UserGrpcHandler::new(user_service)))
        .add_service(reflection_v1)
        .add_service(reflection_v1alpha);

    Ok(router)
}
