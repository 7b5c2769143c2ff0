//! # Configuration Module
//!
//! 사용자 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 비밀번호 해싱, Rate Limiting, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 환경 설정 (development, test, staging, production)
//! export ENVIRONMENT="production"
//!
//! # 저장소 설정 (mongo, memory)
//! export USER_STORE="mongo"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_service"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # 트래픽 제어
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="*"  # 또는 "https://a.example.com,https://b.example.com"
//! ```

pub mod data_config;

pub use data_config::*;
