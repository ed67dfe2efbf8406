//! Board configuration files.
//!
//! An irregular board is described by a JSON document naming the playable
//! mask together with a background image and its placement:
//!
//! ```json
//! {
//!   "board": [[0, 1, 1], [1, 1, 1]],
//!   "background": "boards/china.png",
//!   "offset_x": 40, "offset_y": 40,
//!   "scale_x": 1.0, "scale_y": 1.0
//! }
//! ```
//!
//! Only `board` matters to the engine. The image fields are kept so a
//! renderer can read them from the same place.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConfigError, TopologyError};
use crate::topology::Topology;

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Row-major mask, `1` for playable and `0` for blocked.
    pub board: Vec<Vec<u8>>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

impl BoardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file, checking that its mask is usable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        let topology = config.topology()?;
        info!(
            path = %path.display(),
            rows = topology.rows(),
            cols = topology.cols(),
            playable = topology.playable_count(),
            "loaded board config"
        );
        Ok(config)
    }

    pub fn topology(&self) -> Result<Topology, TopologyError> {
        Topology::from_mask(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = BoardConfig::from_json_str(r#"{"board": [[1, 1], [1, 0]]}"#).unwrap();
        assert_eq!(config.background, None);
        assert_eq!(config.offset_x, 0.0);
        assert_eq!(config.scale_y, 1.0);
        let topo = config.topology().unwrap();
        assert_eq!(topo.playable_count(), 3);
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "board": [[0, 1, 0], [1, 1, 1]],
            "background": "bg.png",
            "offset_x": 40, "offset_y": 32.5,
            "scale_x": 0.5, "scale_y": 2
        }"#;
        let config = BoardConfig::from_json_str(json).unwrap();
        assert_eq!(config.background.as_deref(), Some("bg.png"));
        assert_eq!(config.offset_x, 40.0);
        assert_eq!(config.offset_y, 32.5);
        assert_eq!(config.scale_x, 0.5);
        assert_eq!(config.scale_y, 2.0);
        assert!(!config.topology().unwrap().is_playable(0, 0));
    }

    #[test]
    fn test_missing_board_is_json_error() {
        let err = BoardConfig::from_json_str(r#"{"background": "bg.png"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_bad_mask_is_topology_error() {
        let config = BoardConfig::from_json_str(r#"{"board": [[1, 1], [1]]}"#).unwrap();
        assert!(matches!(
            config.topology(),
            Err(TopologyError::Ragged { row: 1, .. })
        ));
    }
}
