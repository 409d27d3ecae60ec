//! 사용자 요청 메시지 변환

pub mod create_user_request;
pub mod update_user_request;

pub use update_user_request::UpdateUserCommand;
