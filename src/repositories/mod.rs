//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 엔진별 구현은 공통 트레이트 뒤에 숨겨지며,
//! 서비스 계층은 트레이트 객체를 통해서만 저장소에 접근합니다.

pub mod users;
