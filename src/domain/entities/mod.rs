//! # Domain Entities Module
//!
//! 저장소에 영속화되는 도메인 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되며, 인메모리 저장소에서도 같은 타입을 사용합니다.
//!
//! ## MongoDB 매핑
//! - **ObjectId 지원**: `_id` 필드와 매핑, 저장 시점에 할당
//! - **유니크 인덱스**: `email` 필드 (`email_unique`)
//! - **BSON DateTime**: 생성 시간은 BSON 날짜 타입으로 저장

pub mod users;
