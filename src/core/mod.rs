//! Core client logic
//!
//! # Submodules
//!
//! - [`client`] - The [`Rgsyn`](client::Rgsyn) facade tying config,
//!   transport, and repository file management together
//! - [`yum`] - Repository definition file lifecycle

pub mod client;
pub mod yum;

pub use client::Rgsyn;
