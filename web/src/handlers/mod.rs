//! HTTP request handlers.

pub mod airports;
pub mod documents;
pub mod health;
pub mod images;

pub use health::health_check;
