//! must-read MCP Server Implementation
//!
//! This module implements the MCP server using rmcp 0.9's #[tool_router] pattern.
//! The single `must_read` tool routes to the workspace guide reader.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter, model::*, tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use tracing::{debug, instrument};

use must_read_core::{ServerSettings, WorkspaceGuide};

use crate::tools::guide_result;

/// must-read MCP Server
///
/// Hands the workspace's AGENTS.md to the calling agent.
#[derive(Clone)]
pub struct MustReadServer {
    /// Where the guide lives; fixed at process start
    guide: Arc<WorkspaceGuide>,
    /// Name and version reported during initialization
    settings: Arc<ServerSettings>,
    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MustReadServer {
    /// Create a server with default settings
    pub fn new(guide: WorkspaceGuide) -> Self {
        Self::with_settings(guide, ServerSettings::default())
    }

    /// Create a server reporting the given name and version
    pub fn with_settings(guide: WorkspaceGuide, settings: ServerSettings) -> Self {
        Self {
            guide: Arc::new(guide),
            settings: Arc::new(settings),
            tool_router: Self::tool_router(),
        }
    }

    /// The guide this server reads
    pub fn guide(&self) -> &WorkspaceGuide {
        &self.guide
    }

    /// Tools advertised by this server
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Read AGENTS.md from the workspace root
    // `#[tool]` only takes literals; the title mirrors `TOOL_TITLE`.
    #[tool(
        title = "IMPORTANT MUST READ",
        description = "CRITICAL: You MUST use this tool before all other tools. No matter how simple the task is, you MUST use this tool to read the file AGENTS.md at the project root before starting ANY implementation."
    )]
    #[instrument(skip_all)]
    pub async fn must_read(&self) -> Result<CallToolResult, McpError> {
        debug!(workspace = ?self.guide.workspace(), "must_read invoked");
        Ok(guide_result(self.guide.read().await))
    }
}

// Implement the ServerHandler trait to define server capabilities
#[tool_handler]
impl rmcp::ServerHandler for MustReadServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Call must_read first to load the project's AGENTS.md before doing anything else."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.settings.name.clone(),
                version: self.settings.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{FALLBACK_INSTRUCTION, TOOL_NAME, TOOL_TITLE};
    use must_read_core::ServerConfig;
    use rmcp::ServerHandler;
    use std::fs;

    fn text_of(result: &CallToolResult) -> String {
        result.content[0]
            .raw
            .as_text()
            .map(|t| t.text.clone())
            .expect("text content")
    }

    #[test]
    fn test_registers_single_tool() {
        let server = MustReadServer::new(WorkspaceGuide::new(None));
        let tools = server.tools();

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, TOOL_NAME);
        assert_eq!(tools[0].title.as_deref(), Some(TOOL_TITLE));
        assert!(tools[0]
            .description
            .as_deref()
            .unwrap_or_default()
            .starts_with("CRITICAL: You MUST use this tool before all other tools."));
    }

    #[test]
    fn test_server_info() {
        let server = MustReadServer::new(WorkspaceGuide::new(None));
        let info = server.get_info();

        assert_eq!(info.server_info.name, "must_read");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("must_read"));
    }

    #[test]
    fn test_server_info_uses_settings() {
        let settings = ServerSettings {
            name: "guide-server".to_string(),
            version: "9.9.9".to_string(),
            ..Default::default()
        };
        let server = MustReadServer::with_settings(WorkspaceGuide::new(None), settings);
        let info = server.get_info();

        assert_eq!(info.server_info.name, "guide-server");
        assert_eq!(info.server_info.version, "9.9.9");
    }

    #[tokio::test]
    async fn test_must_read_returns_guide() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("AGENTS.md"), "be careful").unwrap();

        let server = MustReadServer::new(WorkspaceGuide::new(Some(dir.path().to_path_buf())));
        let result = server.must_read().await.unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "be careful");
    }

    #[tokio::test]
    async fn test_must_read_without_workspace() {
        let server = MustReadServer::new(WorkspaceGuide::new(None));
        let result = server.must_read().await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), FALLBACK_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_must_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let server = MustReadServer::new(WorkspaceGuide::new(Some(dir.path().to_path_buf())));
        let result = server.must_read().await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), FALLBACK_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_config_cannot_redirect_the_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("SECRET.txt"), "secret").unwrap();

        let config = ServerConfig::from_yaml("guide:\n  file_name: SECRET.txt\n").unwrap();
        let server = MustReadServer::with_settings(
            WorkspaceGuide::new(Some(dir.path().to_path_buf())),
            config.server,
        );

        let result = server.must_read().await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), FALLBACK_INSTRUCTION);

        fs::write(dir.path().join("AGENTS.md"), "agents").unwrap();
        assert_eq!(text_of(&server.must_read().await.unwrap()), "agents");
    }

    #[tokio::test]
    async fn test_clones_share_the_same_guide() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("AGENTS.md"), "v1").unwrap();

        let server = MustReadServer::new(WorkspaceGuide::new(Some(dir.path().to_path_buf())));
        let clone = server.clone();
        assert_eq!(clone.guide(), server.guide());

        fs::write(dir.path().join("AGENTS.md"), "v2").unwrap();
        assert_eq!(text_of(&clone.must_read().await.unwrap()), "v2");
    }
}
