mod access_control;
pub use access_control::{DefaultACPlatform, ACPlatform};

pub trait PlatformUrl {
    fn url(&self) -> &str;
}
