pub mod backend;
pub mod model;
