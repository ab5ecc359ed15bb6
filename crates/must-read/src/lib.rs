//! must-read MCP Server Library
//!
//! This library contains the MCP protocol layer and the tool response
//! mapping. The actual server binary is in main.rs.

pub mod protocol;
pub mod tools;

// Re-export commonly used types
pub use protocol::MustReadServer;
pub use tools::*;
