use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{codes, AppError};

pub const DEFAULT_LINK_CLASS: &str = "citation-link";

/// Rendering options for the answer parser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// Class placed on every emitted citation link; the click router matches on it.
    pub link_class: String,
    /// Trim surrounding whitespace from the answer before truncation.
    pub trim_content: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            link_class: DEFAULT_LINK_CLASS.to_string(),
            trim_content: false,
        }
    }
}

impl ParserConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let cfg: ParserConfig = serde_json::from_str(raw).map_err(|e| {
            AppError::new(codes::CONFIG_DECODE_FAILED, "Failed to decode parser config")
                .with_details(e.to_string())
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::new(codes::CONFIG_READ_FAILED, "Failed to read parser config")
                .with_details(format!("path={}; err={}", path.display(), e))
        })?;
        let cfg = Self::from_json_str(&raw).map_err(|e| {
            let inner = e.details.clone().unwrap_or_default();
            e.with_details(format!("path={}; {}", path.display(), inner))
        })?;
        tracing::debug!(path = %path.display(), link_class = %cfg.link_class, "loaded parser config");
        Ok(cfg)
    }

    /// The link class is interpolated into markup unescaped, so it must be a plain class token.
    pub fn validate(&self) -> Result<(), AppError> {
        let ok = !self.link_class.is_empty()
            && self
                .link_class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !ok {
            return Err(AppError::new(
                codes::CONFIG_INVALID,
                "link_class must be a non-empty CSS class token",
            )
            .with_details(format!("link_class={:?}", self.link_class)));
        }
        Ok(())
    }
}
