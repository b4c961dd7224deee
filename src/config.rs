use std::path::{Path, PathBuf};

use crate::foundation::{
    core::Canvas,
    error::{CoverError, CoverResult},
};

/// Everything needed to produce one cover.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub font_path: PathBuf,
    pub output_path: PathBuf,
}

impl CoverConfig {
    pub fn validate(&self) -> CoverResult<()> {
        self.canvas().map(|_| ())
    }

    pub fn canvas(&self) -> CoverResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Read a config from JSON. Every field is required.
    pub fn from_json_file(path: &Path) -> CoverResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CoverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            CoverError::validation(format!("config '{}': {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
