pub mod error;
pub mod export;
pub mod health;
pub mod notes;
pub mod notion;

pub use error::AppError;
