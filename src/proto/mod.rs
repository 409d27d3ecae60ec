//! Protocol Buffer 모듈
//!
//! `proto/user/v1/user.proto`에서 생성된 메시지와 서비스 코드를 포함합니다.
//! 리플렉션 서비스가 사용하는 파일 디스크립터 세트도 함께 노출합니다.

/// `user.v1` 패키지 정의
pub mod user {
    pub mod v1 {
        tonic::include_proto!("user.v1");
    }
}

/// gRPC 리플렉션용 인코딩된 파일 디스크립터 세트
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("user_descriptor");

pub use user::v1 as user_v1;
