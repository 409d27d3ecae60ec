//! 사용자 응답 메시지 변환

pub mod user_response;
