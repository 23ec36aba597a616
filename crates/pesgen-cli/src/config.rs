//! Layered configuration for the `pesgen` binary.
//!
//! Values come from three places, highest precedence first: dedicated CLI flags
//! (`--repository`, `--parameter-file`), `--set KEY=VALUE` overrides, and the TOML
//! file given with `--config`. [`builder::build_config`] merges them and hands the
//! result to the core `ScanConfigBuilder`, which enforces every scan invariant.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
