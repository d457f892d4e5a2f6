//! Remote service communication
//!
//! HTTP transport against the configured rgsyn host and the connectivity
//! check built on top of it.

pub mod client;
pub mod ping;

pub use client::{Body, Credentials, RemoteClient};
pub use ping::host_valid;
pub use reqwest::Method;
