//! Appearance configuration.
//!
//! Every field has a default matching the stock look, so a JSON file only
//! needs to name what it overrides.

use crate::error::ConfigError;
use crate::style::{ConnectionStyle, EndpointTheme};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Corner radius of the endpoint outline.
    pub corner_radius: f64,
    pub theme: EndpointTheme,
    /// Style of committed connections.
    pub connection: ConnectionStyle,
    /// Style of the line shown while dragging.
    pub drag_line: ConnectionStyle,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            corner_radius: 8.0,
            theme: EndpointTheme::default(),
            connection: ConnectionStyle::default(),
            drag_line: ConnectionStyle::default(),
        }
    }
}

impl DragConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
