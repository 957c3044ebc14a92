//! Layout configuration loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::layout::{DEFAULT_SPACING, FlowLayout};
use crate::primitives::Point;

/// Host-level defaults for flow layout passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Gap between items in a row and between rows.
    pub spacing: f32,
    /// Top-left corner of the layout bounds.
    pub origin: Point,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            origin: Point::ORIGIN,
        }
    }
}

impl FlowConfig {
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), spacing = config.spacing, "loaded flow config");
        Ok(config)
    }

    /// The layout this config describes.
    pub fn layout(&self) -> FlowLayout {
        FlowLayout::new(self.spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FlowConfig::default();
        assert_eq!(config.spacing, DEFAULT_SPACING);
        assert_eq!(config.origin, Point::ORIGIN);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FlowConfig::from_json_str(r#"{"spacing": 4}"#).unwrap();
        assert_eq!(config.spacing, 4.0);
        assert_eq!(config.origin, Point::ORIGIN);

        let config = FlowConfig::from_json_str(r#"{"origin": {"x": 2, "y": 3}}"#).unwrap();
        assert_eq!(config.spacing, DEFAULT_SPACING);
        assert_eq!(config.origin, Point::new(2.0, 3.0));
    }

    #[test]
    fn test_invalid_json() {
        let err = FlowConfig::from_json_str("{spacing").unwrap_err();
        assert!(matches!(err, LayoutError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"spacing": 12}}"#).unwrap();

        let config = FlowConfig::load(file.path()).unwrap();
        assert_eq!(config.spacing, 12.0);
        assert_eq!(config.layout().spacing_value(), 12.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FlowConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LayoutError::Io(_)));
    }

    #[test]
    fn test_negative_spacing_clamped_by_layout() {
        let config = FlowConfig::from_json_str(r#"{"spacing": -6}"#).unwrap();
        assert_eq!(config.layout().spacing_value(), 0.0);
    }
}
