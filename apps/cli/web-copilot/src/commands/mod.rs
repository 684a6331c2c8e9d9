pub mod ask;
pub mod config;
pub mod key;

use crate::APP_DIR_NAME;
use crate::error::CopilotError;

use std::path::{Path, PathBuf};

/// `--config-dir` if given, else `{platform config dir}/web-copilot`.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf, CopilotError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| CopilotError::copilot("Failed to determine config directory"))
}
