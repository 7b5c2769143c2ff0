//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 필요한 저장소를 생성자로 받습니다. 핸들러는 `web::Data`로
//! 공유된 서비스 인스턴스를 사용합니다.

pub mod users;
