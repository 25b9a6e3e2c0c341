//! YAML configuration for an enclosure, its viewer and an optional scripted
//! input sequence.
//!
//! ```yaml
//! grid: { length: 3, width: 2, cell_size: 100.0 }
//! viewer: { name: Ada, cell: { x: 0, z: 0 } }
//! viewport: { width: 1280, height: 720 }
//! script:
//!   - pointer: 40.0
//!   - frames: 10
//!   - key: forward
//! ```
//!
//! Every section is optional and falls back to its defaults.

use std::path::Path;

use mazen_common::{GridSpec, ViewportContext};
use mazen_input::{NavKey, NavigationConfig, OrbitConfig};
use serde::{Deserialize, Serialize};

use crate::enclosure::Enclosure;
use crate::error::SessionError;
use crate::viewer::ViewerDescriptor;

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One step of a scripted session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Key(NavKey),
    KeyCode(u32),
    /// Pointer moved to this x coordinate.
    Pointer(f32),
    Resize(ViewportContext),
    /// Run this many frames.
    Frames(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub grid: GridSpec,
    pub viewer: ViewerDescriptor,
    pub viewport: ViewportContext,
    pub navigation: NavigationConfig,
    pub orbit: OrbitConfig,
    /// Steps are written as one-key maps (`- frames: 10`), not YAML tags.
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub script: Vec<ScriptStep>,
}

impl MazeConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), steps = config.script.len(), "config loaded");
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build the enclosure and attach the configured viewer.
    pub fn enclosure(&self) -> Result<Enclosure, SessionError> {
        let mut enclosure = Enclosure::build(self.grid)?
            .with_viewport(self.viewport)
            .with_navigation(self.navigation)
            .with_orbit(self.orbit);
        enclosure.attach_viewer(self.viewer.clone());
        Ok(enclosure)
    }
}
