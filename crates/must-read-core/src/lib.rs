//! # must-read-core
//!
//! Core types for the must-read MCP server.
//!
//! This crate has **no internal dependencies** on the protocol crate. It
//! provides:
//!
//! - The workspace guide reader (resolves and reads `AGENTS.md`)
//! - Server configuration
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 - the `must-read` binary crate depends on this one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod guide;

// Re-export commonly used types
pub use config::{ServerConfig, ServerSettings, CONFIG_ENV_VAR};
pub use error::{Error, Result};
pub use guide::{GuideContent, WorkspaceGuide, GUIDE_FILE_NAME};
