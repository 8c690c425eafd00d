//! Server configuration
//!
//! Values come from an optional JSON file, then command-line flags override
//! them. Every field has a default so an empty `{}` file is valid.

use anyhow::{Context, Result};
use boxforge_core::export::ExportProfile;
use boxforge_core::mesh::DimensionPolicy;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,
    /// Directory generated files are written to
    pub output_dir: PathBuf,
    /// Profile used when a request does not name one
    pub profile: ExportProfile,
    /// How zero or negative dimensions are treated
    pub dimension_policy: DimensionPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            output_dir: PathBuf::from("."),
            profile: ExportProfile::Extended,
            dimension_policy: DimensionPolicy::Permissive,
        }
    }
}

impl ServerConfig {
    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ServerConfig = serde_json::from_str(
            r#"{"output_dir": "/srv/boxes", "dimension_policy": "require_positive"}"#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/srv/boxes"));
        assert_eq!(config.dimension_policy, DimensionPolicy::RequirePositive);
        assert_eq!(config.bind, ServerConfig::default().bind);
        assert_eq!(config.profile, ExportProfile::Extended);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ServerConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
