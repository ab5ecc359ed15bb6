//! MCP tool metadata and response mapping.
//!
//! Turns the outcome of a guide read into the `CallToolResult` sent back to
//! the agent. Failures of any kind collapse into one fallback instruction;
//! the cause only goes to the log.

use must_read_core::{GuideContent, Result};
use rmcp::model::{CallToolResult, Content};
use tracing::{error, info};

/// Name the tool is registered under.
pub const TOOL_NAME: &str = "must_read";

/// Human-readable tool title.
///
/// Repeated as a literal in the `#[tool]` attribute on `MustReadServer::must_read`,
/// which does not accept constants.
pub const TOOL_TITLE: &str = "IMPORTANT MUST READ";

/// Returned with `isError: true` whenever the guide cannot be read.
pub const FALLBACK_INSTRUCTION: &str = "AGENTS.md not found or could not be read.

FALLBACK INSTRUCTION: Since this MCP server cannot access AGENTS.md, please use your standard file reading tool to read the AGENTS.md file from the project root directory.";

/// Map a guide read into the tool response.
pub fn guide_result(result: Result<GuideContent>) -> CallToolResult {
    match result {
        Ok(guide) => {
            info!("Reading {}", guide.path.display());
            CallToolResult::success(vec![Content::text(guide.text)])
        }
        Err(e) => {
            error!("{}", e);
            CallToolResult::error(vec![Content::text(FALLBACK_INSTRUCTION)])
        }
    }
}
