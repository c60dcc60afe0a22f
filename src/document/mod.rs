//! Document Access
//!
//! Dot-path resolution into nested JSON documents, separated from rule
//! dispatch and validation concerns.

pub mod path;

pub use path::{Resolution, resolve};
