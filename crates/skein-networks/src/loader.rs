//! Network definition files.
//!
//! Custom networks can be described in a TOML or JSON file holding a list of
//! `[[networks]]` records, each deserializing into a
//! [`NetworkSpec`](crate::NetworkSpec):
//!
//! ```toml
//! [[networks]]
//! name = "stagenet"
//! aliases = ["staging"]
//! pubkeyhash = 0x19
//! privatekey = 0x99
//! scripthash = 0x1a
//! network_magic = "d0b4bef9"
//! port = 54350
//! dns_seeds = ["stage-seed.skeincurrency.com"]
//! ```
//!
//! Loading only parses and validates; registration happens through
//! [`NetworkRegistry::load_file`](crate::NetworkRegistry::load_file).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, NetworkResult};
use crate::profile::NetworkSpec;

#[derive(Debug, Default, Serialize, Deserialize)]
struct NetworkFile {
    #[serde(default)]
    networks: Vec<NetworkSpec>,
}

/// Definition-file loader.
pub struct FileLoader;

impl FileLoader {
    /// Load definitions from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> NetworkResult<Vec<NetworkSpec>> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_toml(&content)
    }

    /// Load definitions from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> NetworkResult<Vec<NetworkSpec>> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_json(&content)
    }

    /// Auto-detect file format from the extension and load definitions.
    pub fn load_auto<P: AsRef<Path>>(path: P) -> NetworkResult<Vec<NetworkSpec>> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(NetworkError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::load_toml(path),
            Some("json") => Self::load_json(path),
            Some(ext) => Err(NetworkError::InvalidFormat(format!(
                "Unsupported file extension: {}",
                ext
            ))),
            None => Err(NetworkError::InvalidFormat(
                "File has no extension".to_string(),
            )),
        }
    }

    /// Parse TOML definition content.
    pub fn parse_toml(content: &str) -> NetworkResult<Vec<NetworkSpec>> {
        let file: NetworkFile = toml::from_str(content)?;
        Self::validate(&file.networks)?;
        Ok(file.networks)
    }

    /// Parse JSON definition content.
    pub fn parse_json(content: &str) -> NetworkResult<Vec<NetworkSpec>> {
        let file: NetworkFile = serde_json::from_str(content)?;
        Self::validate(&file.networks)?;
        Ok(file.networks)
    }

    fn validate(specs: &[NetworkSpec]) -> NetworkResult<()> {
        let mut names = HashSet::new();
        for spec in specs {
            if spec.name.is_empty() {
                return Err(NetworkError::Validation(
                    "Network name cannot be empty".to_string(),
                ));
            }
            if spec.port == Some(0) {
                return Err(NetworkError::Validation(format!(
                    "Network '{}': port cannot be 0",
                    spec.name
                )));
            }
            if !names.insert(spec.name.as_str()) {
                return Err(NetworkError::Validation(format!(
                    "Duplicate network name '{}' in definition file",
                    spec.name
                )));
            }
        }
        Ok(())
    }
}
