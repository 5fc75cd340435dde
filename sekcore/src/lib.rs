pub mod ac;
pub mod error;
pub mod platform;
