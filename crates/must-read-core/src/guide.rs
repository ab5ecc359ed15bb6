//! Workspace guide reader.
//!
//! Resolves `<workspace>/AGENTS.md` and reads it. Each call performs exactly
//! one read-only filesystem access; nothing is cached between calls.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{Error, Result};

/// The only file read from the workspace.
pub const GUIDE_FILE_NAME: &str = "AGENTS.md";

/// Successfully read guide text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideContent {
    /// Path that was read
    pub path: PathBuf,
    /// Full file text
    pub text: String,
}

/// Location of the workspace guide.
///
/// The workspace is whatever was passed at process start. It is never checked
/// to be a directory; a bad path simply fails to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceGuide {
    workspace: Option<PathBuf>,
}

impl WorkspaceGuide {
    /// Create a guide reader for `AGENTS.md` under `workspace`.
    pub fn new(workspace: Option<PathBuf>) -> Self {
        Self {
            workspace: workspace.filter(|dir| !dir.as_os_str().is_empty()),
        }
    }

    /// Build from the first positional process argument, if any.
    ///
    /// An empty argument counts as missing.
    pub fn from_arg(arg: Option<OsString>) -> Self {
        Self::new(arg.map(PathBuf::from))
    }

    /// Workspace directory, if one was provided.
    pub fn workspace(&self) -> Option<&Path> {
        self.workspace.as_deref()
    }

    /// Resolve the full path of the guide file.
    pub fn path(&self) -> Result<PathBuf> {
        self.workspace
            .as_ref()
            .map(|dir| dir.join(GUIDE_FILE_NAME))
            .ok_or(Error::NoWorkspace)
    }

    /// Read the guide file as UTF-8 text.
    ///
    /// Missing files, permission problems, non-directory workspaces and
    /// invalid UTF-8 all surface as [`Error::Read`].
    pub async fn read(&self) -> Result<GuideContent> {
        let path = self.path()?;
        info!("Attempting to read {} from: {}", GUIDE_FILE_NAME, path.display());

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| Error::Read {
                file_name: GUIDE_FILE_NAME.to_string(),
                source,
            })?;

        Ok(GuideContent { path, text })
    }
}
