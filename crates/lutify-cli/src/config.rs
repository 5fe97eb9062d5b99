//! Runtime configuration for the CLI.

use lutify_core::PreviewConfig;

/// Env var overriding the preview width cap.
const ENV_PREVIEW_MAX_WIDTH: &str = "LUTIFY_PREVIEW_MAX_WIDTH";
/// Env var overriding the preview height cap.
const ENV_PREVIEW_MAX_HEIGHT: &str = "LUTIFY_PREVIEW_MAX_HEIGHT";

/// Settings not worth a flag on every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    /// Preview box used by `apply --preview`.
    pub preview: PreviewConfig,
}

impl CliConfig {
    /// Defaults, overridden by `LUTIFY_*` environment variables when set and valid.
    pub fn from_env() -> Self {
        let defaults = PreviewConfig::default();
        Self {
            preview: PreviewConfig {
                max_width: parse_dim(std::env::var(ENV_PREVIEW_MAX_WIDTH).ok(), defaults.max_width),
                max_height: parse_dim(
                    std::env::var(ENV_PREVIEW_MAX_HEIGHT).ok(),
                    defaults.max_height,
                ),
            },
        }
    }
}

/// Positive pixel count from an env value, else `fallback`.
fn parse_dim(value: Option<String>, fallback: u32) -> u32 {
    match value.as_deref().map(str::trim).map(str::parse::<u32>) {
        Some(Ok(v)) if v > 0 => v,
        Some(_) => {
            tracing::warn!(?value, fallback, "ignoring invalid preview size");
            fallback
        }
        None => fallback,
    }
}
