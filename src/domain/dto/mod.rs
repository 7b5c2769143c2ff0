//! # Data Transfer Objects
//!
//! HTTP 경계에서 사용하는 데이터 전송 객체들입니다.

pub mod users;

pub use users::*;
