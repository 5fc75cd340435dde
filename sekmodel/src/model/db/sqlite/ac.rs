mod grant;
mod permission;
mod user;
