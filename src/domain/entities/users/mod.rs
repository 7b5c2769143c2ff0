//! Users Entity Module
//!
//! 사용자 레코드 엔티티 [`UserRecord`](user::UserRecord)를 포함합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::UserRecord;
//!
//! let record = UserRecord::from_request(request, password_hash);
//! let saved = store.save(record).await?;
//! assert!(saved.id.is_some());
//! ```

pub mod user;
