//! Functional core for noteboard.
//!
//! Pure data types, validation, and text transforms. All I/O (databases,
//! HTTP) lives in the `noteboard` binary crate behind the traits defined here.

pub mod export;
pub mod note;
pub mod serde;
pub mod storage;
pub mod sync;
