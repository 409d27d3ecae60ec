//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 저장소 종류(MongoDB, 인메모리)와 무관한 순수 도메인 모델이며,
//! 문서 매핑은 각 리포지토리 구현체가 담당합니다.

/// 위치 정보 값 객체
///
/// 위도와 경도는 항상 함께 존재합니다. 부분적인 위치 정보는 허용하지 않으며,
/// 위치가 없으면 `User::location` 자체가 `None`입니다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geolocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl Geolocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// 사용자 엔티티
///
/// `id`는 저장소가 최초 저장 시 할당하는 불투명한 문자열입니다.
/// 저장 전에는 비어 있고, 이후에는 절대 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: Option<Geolocation>,
}

impl User {
    /// 영속화된 사용자인지 확인
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

/// 사용자 생성 입력
///
/// 식별자가 없는 상태의 사용자 데이터입니다. 리포지토리가 식별자를 할당해
/// `User`로 변환합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub location: Option<Geolocation>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, location: Option<Geolocation>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            location,
        }
    }

    /// 할당된 식별자로 영속 사용자 생성
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            location: self.location,
        }
    }
}
