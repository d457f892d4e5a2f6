//! Presentation layer
//!
//! Renders already-fetched service records as human-readable text. The
//! client core never calls into this module; it only supplies the plain
//! structured data ([`serde_json::Value`]) these functions consume.

pub mod printer;

pub use printer::Printer;
