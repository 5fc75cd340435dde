pub mod action;
pub mod grant;
pub mod permission;
pub mod permset;
pub mod role;
pub mod traits;
pub mod user;

pub use self::action::Action;
pub use self::role::Role;
