//! Rgsyn client core
//!
//! Command-side client for a remote rgsyn library management service:
//! per-user configuration with write-through persistence, authenticated
//! HTTP calls with content negotiation, a connectivity check, and the
//! lifecycle of local yum repository definition files.
//!
//! # Architecture
//!
//! - [`config`] - Persisted client configuration and its storage port
//! - [`core`] - Client facade and repository file lifecycle
//! - [`remote`] - HTTP transport and connectivity check
//! - [`infra`] - Filesystem access
//! - [`render`] - Presentation of fetched records (never called by core)
//! - [`error`] - Error types and handling

pub mod config;
pub mod core;
pub mod error;
pub mod infra;
pub mod remote;
pub mod render;

#[cfg(test)]
pub mod test_utils;
