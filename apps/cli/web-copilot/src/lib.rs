// Library exports for testing
// The binary (main.rs) imports these as well

pub mod cli;
pub mod commands;
pub mod credentials;
pub mod error;
pub mod logger;
pub mod render;

#[cfg(test)]
mod tests;

/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "web-copilot";
