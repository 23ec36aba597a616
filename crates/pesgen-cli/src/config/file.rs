use crate::error::{CliError, Result};
use pesgen::core::scan::{InteractionOrder, ScanError, ScanSpec};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FilePathsConfig {
    pub repository: Option<PathBuf>,
    #[serde(rename = "parameter-file")]
    pub parameter_file: Option<PathBuf>,
}

/// The four parallel sequences declaring the scans of one interaction order.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileScanSpec {
    #[serde(default)]
    pub types: Vec<u32>,
    #[serde(default)]
    pub start: Vec<f64>,
    #[serde(default)]
    pub stop: Vec<f64>,
    #[serde(default)]
    pub step: Vec<f64>,
}

impl FileScanSpec {
    pub fn into_spec(self, order: InteractionOrder) -> std::result::Result<ScanSpec, ScanError> {
        ScanSpec::from_parallel(order, &self.types, &self.start, &self.stop, &self.step)
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileScanConfig {
    pub pair: Option<FileScanSpec>,
    pub triplet: Option<FileScanSpec>,
    pub quadruplet: Option<FileScanSpec>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub paths: Option<FilePathsConfig>,
    pub scan: Option<FileScanConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
