//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반 설정을 제공합니다. 상세 항목은 [`data_config`]를 참고하세요.

pub mod data_config;

pub use data_config::*;
