//! # gRPC Request Handlers Module
//!
//! gRPC 요청을 처리하는 핸들러(파사드)를 정의합니다.
//! 핸들러는 상태를 갖지 않으며, 모든 요청을 서비스 계층에 위임한 뒤
//! `AppError`를 `tonic::Status`로 변환합니다.

pub mod users;

pub use users::UserGrpcHandler;
