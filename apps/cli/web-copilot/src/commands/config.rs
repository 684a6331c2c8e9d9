//! `web-copilot config`

use crate::error::CopilotError;

use copilot_core::QueryConfig;

use std::path::Path;

/// Effective configuration as TOML, after optionally writing the defaults.
pub fn show_config(config_dir: &Path, init: bool) -> Result<String, CopilotError> {
    if init {
        QueryConfig::default().save(config_dir)?;
    }

    let config = QueryConfig::load(config_dir)?;
    Ok(config.to_toml()?)
}
