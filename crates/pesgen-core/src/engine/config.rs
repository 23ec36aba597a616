use crate::core::scan::{InteractionOrder, ScanError, ScanSpec};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Parameter '{0}' must be a non-empty path")]
    EmptyPath(&'static str),

    #[error("A {found} scan declaration was supplied where {expected} scans are expected")]
    OrderMismatch {
        expected: InteractionOrder,
        found: InteractionOrder,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// The complete, validated scan configuration for one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    repository_path: PathBuf,
    parameter_file_path: PathBuf,
    pair: ScanSpec,
    triplet: Option<ScanSpec>,
    quadruplet: Option<ScanSpec>,
}

impl ScanConfig {
    /// Location of the reference ChIMES calculator checkout.
    pub fn repository_path(&self) -> &Path {
        &self.repository_path
    }

    /// Location of the parameter file whose interactions are scanned.
    pub fn parameter_file_path(&self) -> &Path {
        &self.parameter_file_path
    }

    pub fn pair(&self) -> &ScanSpec {
        &self.pair
    }

    pub fn triplet(&self) -> Option<&ScanSpec> {
        self.triplet.as_ref()
    }

    pub fn quadruplet(&self) -> Option<&ScanSpec> {
        self.quadruplet.as_ref()
    }

    pub fn spec(&self, order: InteractionOrder) -> Option<&ScanSpec> {
        match order {
            InteractionOrder::Pair => Some(&self.pair),
            InteractionOrder::Triplet => self.triplet.as_ref(),
            InteractionOrder::Quadruplet => self.quadruplet.as_ref(),
        }
    }

    /// Present scan declarations, pair first.
    pub fn specs(&self) -> impl Iterator<Item = &ScanSpec> {
        InteractionOrder::ALL
            .into_iter()
            .filter_map(move |order| self.spec(order))
    }

    pub fn job_count(&self) -> usize {
        self.specs().map(ScanSpec::len).sum()
    }
}

#[derive(Default)]
pub struct ScanConfigBuilder {
    repository_path: Option<PathBuf>,
    parameter_file_path: Option<PathBuf>,
    pair: Option<ScanSpec>,
    triplet: Option<ScanSpec>,
    quadruplet: Option<ScanSpec>,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository_path(mut self, path: PathBuf) -> Self {
        self.repository_path = Some(path);
        self
    }
    pub fn parameter_file_path(mut self, path: PathBuf) -> Self {
        self.parameter_file_path = Some(path);
        self
    }
    pub fn pair(mut self, spec: ScanSpec) -> Self {
        self.pair = Some(spec);
        self
    }
    pub fn triplet(mut self, spec: Option<ScanSpec>) -> Self {
        self.triplet = spec;
        self
    }
    pub fn quadruplet(mut self, spec: Option<ScanSpec>) -> Self {
        self.quadruplet = spec;
        self
    }

    pub fn build(self) -> Result<ScanConfig, ConfigError> {
        let repository_path = self
            .repository_path
            .ok_or(ConfigError::MissingParameter("repository_path"))?;
        if repository_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("repository_path"));
        }
        let parameter_file_path = self
            .parameter_file_path
            .ok_or(ConfigError::MissingParameter("parameter_file_path"))?;
        if parameter_file_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("parameter_file_path"));
        }

        let pair = self.pair.ok_or(ConfigError::MissingParameter("pair"))?;
        check_order(&pair, InteractionOrder::Pair)?;
        if let Some(spec) = &self.triplet {
            check_order(spec, InteractionOrder::Triplet)?;
        }
        if let Some(spec) = &self.quadruplet {
            check_order(spec, InteractionOrder::Quadruplet)?;
        }

        Ok(ScanConfig {
            repository_path,
            parameter_file_path,
            pair,
            triplet: self.triplet,
            quadruplet: self.quadruplet,
        })
    }
}

fn check_order(spec: &ScanSpec, expected: InteractionOrder) -> Result<(), ConfigError> {
    if spec.order() != expected {
        return Err(ConfigError::OrderMismatch {
            expected,
            found: spec.order(),
        });
    }
    Ok(())
}
