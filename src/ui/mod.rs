pub mod auth;
pub mod body_preview;
pub mod common;
pub mod dashboard;
pub mod http;
pub mod icon;
pub mod markdown;
pub mod pages;

pub use icon::{Icon, icons};
