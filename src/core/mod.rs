//! Domain models, request builders and pure logic shared by the UI and the host

pub mod api;
pub mod body_mesh;
#[cfg(feature = "ssr")]
pub mod config;
pub mod forms;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod session;
