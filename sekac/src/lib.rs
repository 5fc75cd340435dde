pub mod error;
pub mod platform;
pub mod principal;

pub use platform::Platform;
