//! 핵심 공통 모듈
//!
//! 계층 전체에서 공유하는 에러 타입을 제공합니다.

pub mod errors;

pub use errors::*;
