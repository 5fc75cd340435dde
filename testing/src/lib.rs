#[cfg(feature = "ac")]
pub mod ac;

mod utils;
pub use utils::*;
