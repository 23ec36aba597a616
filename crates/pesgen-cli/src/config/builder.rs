use super::file::{FileConfig, FileScanSpec};
use super::models::AppConfig;
use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use pesgen::core::scan::{InteractionOrder, ScanSpec};
use pesgen::engine::config::{ConfigError, ScanConfigBuilder};
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn build_config(args: &ConfigArgs) -> Result<AppConfig> {
    let file_config = FileConfig::from_file(&args.config)?;
    let base_dir = args
        .config
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let (mut file_config, step_overrides) = apply_set_values(file_config, &args.set_values)?;

    let paths = file_config.paths.take().unwrap_or_default();
    let repository_path = resolve_path(
        args.repository.as_deref(),
        paths.repository.as_deref(),
        &base_dir,
        "paths.repository",
        "--repository",
    )?;
    let parameter_file_path = resolve_path(
        args.parameter_file.as_deref(),
        paths.parameter_file.as_deref(),
        &base_dir,
        "paths.parameter-file",
        "--parameter-file",
    )?;

    let mut scan = file_config.scan.take().unwrap_or_default();
    let pair = scan.pair.take().ok_or_else(|| {
        CliError::Config("`[scan.pair]` section is required in the config file.".to_string())
    })?;
    let mut pair = to_spec(pair, InteractionOrder::Pair)?;
    let mut triplet = scan
        .triplet
        .take()
        .map(|s| to_spec(s, InteractionOrder::Triplet))
        .transpose()?;
    let mut quadruplet = scan
        .quadruplet
        .take()
        .map(|s| to_spec(s, InteractionOrder::Quadruplet))
        .transpose()?;

    for (order, step) in step_overrides {
        let spec = match order {
            InteractionOrder::Pair => Some(&mut pair),
            InteractionOrder::Triplet => triplet.as_mut(),
            InteractionOrder::Quadruplet => quadruplet.as_mut(),
        }
        .ok_or_else(|| {
            CliError::Config(format!(
                "Cannot set scan.{}.step: the config file has no [scan.{}] section.",
                order, order
            ))
        })?;
        debug!("Overriding every {} step with {}.", order, step);
        *spec = spec
            .with_uniform_step(step)
            .map_err(|e| CliError::ScanConfig(ConfigError::from(e)))?;
    }

    let core_config = ScanConfigBuilder::new()
        .repository_path(repository_path)
        .parameter_file_path(parameter_file_path)
        .pair(pair)
        .triplet(triplet)
        .quadruplet(quadruplet)
        .build()?;

    debug!(
        "Configuration built: {} scan job(s) across {} interaction order(s).",
        core_config.job_count(),
        core_config.specs().count()
    );

    Ok(AppConfig {
        config_path: args.config.clone(),
        core_config,
    })
}

fn to_spec(file_spec: FileScanSpec, order: InteractionOrder) -> Result<ScanSpec> {
    file_spec
        .into_spec(order)
        .map_err(|e| CliError::ScanConfig(ConfigError::from(e)))
}

/// CLI values are taken as given; relative values from the file are anchored at
/// the file's directory.
fn resolve_path(
    cli_arg: Option<&Path>,
    file_arg: Option<&Path>,
    base_dir: &Path,
    key: &str,
    flag: &str,
) -> Result<PathBuf> {
    if let Some(path) = cli_arg {
        return Ok(path.to_path_buf());
    }
    let path = file_arg.ok_or_else(|| {
        CliError::Config(format!(
            "A value for '{}' is required either in the config file or via {}.",
            key, flag
        ))
    })?;
    if path.as_os_str().is_empty() || path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(base_dir.join(path))
}

/// Applies path overrides to the file layer and collects step overrides, which
/// are applied to the validated specs.
fn apply_set_values(
    mut config: FileConfig,
    set_values: &[String],
) -> Result<(FileConfig, Vec<(InteractionOrder, f64)>)> {
    let mut step_overrides = Vec::new();
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "paths.repository" => {
                config.paths.get_or_insert_with(Default::default).repository =
                    Some(absolute_from_cwd(value_str)?);
            }
            "paths.parameter-file" => {
                config
                    .paths
                    .get_or_insert_with(Default::default)
                    .parameter_file = Some(absolute_from_cwd(value_str)?);
            }
            "scan.pair.step" | "scan.triplet.step" | "scan.quadruplet.step" => {
                let order: InteractionOrder = key
                    .trim_start_matches("scan.")
                    .trim_end_matches(".step")
                    .parse()
                    .map_err(|e| CliError::Argument(format!("{}", e)))?;
                let step: f64 = value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?;
                step_overrides.push((order, step));
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok((config, step_overrides))
}

fn absolute_from_cwd(value: &str) -> Result<PathBuf> {
    let path = PathBuf::from(value);
    if path.as_os_str().is_empty() || path.is_absolute() {
        return Ok(path);
    }
    Ok(std::env::current_dir()?.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pesgen::core::scan::{RangeError, ScanError};
    use std::fs;
    use tempfile::{TempDir, tempdir};

    const EXAMPLE: &str = r#"
        [paths]
        repository = "chimes_calculator"
        parameter-file = "force_fields/test_params.CHON.txt"

        [scan.pair]
        types = [0, 3, 5]
        start = [1.0, 1.0, 1.0]
        stop  = [4.0, 4.0, 4.0]
        step  = [0.01, 0.01, 0.01]

        [scan.triplet]
        types = [1, 4]
        start = [1.0, 1.0]
        stop  = [4.0, 4.0]
        step  = [0.10, 0.10]
    "#;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pesgen.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn base_args(config: PathBuf) -> ConfigArgs {
        ConfigArgs {
            config,
            repository: None,
            parameter_file: None,
            set_values: vec![],
        }
    }

    #[test]
    fn build_config_reads_file_and_anchors_relative_paths() {
        let (dir, path) = write_config(EXAMPLE);
        let app = build_config(&base_args(path.clone())).expect("build ok");
        let cfg = app.core_config;

        assert_eq!(app.config_path, path);
        assert_eq!(cfg.repository_path(), dir.path().join("chimes_calculator"));
        assert_eq!(
            cfg.parameter_file_path(),
            dir.path().join("force_fields/test_params.CHON.txt")
        );
        assert_eq!(cfg.pair().type_indices().collect::<Vec<_>>(), vec![0, 3, 5]);
        assert_eq!(cfg.triplet().map(ScanSpec::len), Some(2));
        assert!(cfg.quadruplet().is_none());
        assert_eq!(cfg.job_count(), 5);
    }

    #[test]
    fn absolute_file_paths_are_kept() {
        let content = EXAMPLE.replace("\"chimes_calculator\"", "\"/opt/chimes\"");
        let (_dir, path) = write_config(&content);
        let app = build_config(&base_args(path)).unwrap();
        assert_eq!(app.core_config.repository_path(), Path::new("/opt/chimes"));
    }

    #[test]
    fn cli_paths_override_file_values() {
        let (_dir, path) = write_config(EXAMPLE);
        let mut args = base_args(path);
        args.repository = Some(PathBuf::from("/srv/chimes"));
        args.parameter_file = Some(PathBuf::from("local/params.txt"));

        let cfg = build_config(&args).unwrap().core_config;
        assert_eq!(cfg.repository_path(), Path::new("/srv/chimes"));
        assert_eq!(cfg.parameter_file_path(), Path::new("local/params.txt"));
    }

    #[test]
    fn cli_flag_wins_over_set_value() {
        let (_dir, path) = write_config(EXAMPLE);
        let mut args = base_args(path);
        args.repository = Some(PathBuf::from("/from/flag"));
        args.set_values = vec!["paths.repository=/from/set".to_string()];

        let cfg = build_config(&args).unwrap().core_config;
        assert_eq!(cfg.repository_path(), Path::new("/from/flag"));
    }

    #[test]
    fn set_values_override_paths_and_broadcast_steps() {
        let (_dir, path) = write_config(EXAMPLE);
        let mut args = base_args(path);
        args.set_values = vec![
            "paths.parameter-file=/data/params.txt".to_string(),
            "scan.triplet.step=1.0".to_string(),
            "scan.pair.step=0.5".to_string(),
        ];

        let cfg = build_config(&args).unwrap().core_config;
        assert_eq!(cfg.parameter_file_path(), Path::new("/data/params.txt"));
        assert!(cfg.pair().entries().iter().all(|e| e.range.step() == 0.5));
        let triplet = cfg.triplet().unwrap();
        assert!(triplet.entries().iter().all(|e| e.range.sample_count() == 4));
    }

    #[test]
    fn set_value_for_absent_section_is_an_error() {
        let (_dir, path) = write_config(EXAMPLE);
        let mut args = base_args(path);
        args.set_values = vec!["scan.quadruplet.step=1.0".to_string()];

        match build_config(&args) {
            Err(CliError::Config(msg)) => assert!(msg.contains("[scan.quadruplet]")),
            other => panic!("Expected Config error, got {:?}", other.err()),
        }
    }

    #[test]
    fn malformed_or_unknown_set_values_are_rejected() {
        let (_dir, path) = write_config(EXAMPLE);

        for bad in ["scan.pair.step", "scan.pair.types=1", "scan.pair.step=fast"] {
            let mut args = base_args(path.clone());
            args.set_values = vec![bad.to_string()];
            assert!(
                matches!(build_config(&args), Err(CliError::Config(_))),
                "expected rejection of '{}'",
                bad
            );
        }
    }

    #[test]
    fn invalid_broadcast_step_fails_core_validation() {
        let (_dir, path) = write_config(EXAMPLE);
        let mut args = base_args(path);
        args.set_values = vec!["scan.pair.step=0".to_string()];

        let result = build_config(&args);
        assert!(matches!(
            result,
            Err(CliError::ScanConfig(ConfigError::Scan(ScanError::InvalidRange {
                order: InteractionOrder::Pair,
                type_index: 0,
                source: RangeError::NonPositiveStep(_),
            })))
        ));
    }

    #[test]
    fn missing_pair_section_is_reported() {
        let (_dir, path) = write_config(
            r#"
            [paths]
            repository = "repo"
            parameter-file = "params.txt"
            "#,
        );
        match build_config(&base_args(path)) {
            Err(CliError::Config(msg)) => assert!(msg.contains("[scan.pair]")),
            other => panic!("Expected Config error, got {:?}", other.err()),
        }
    }

    #[test]
    fn missing_paths_are_reported_with_key_and_flag() {
        let content = EXAMPLE.replace("repository = \"chimes_calculator\"", "");
        let (_dir, path) = write_config(&content);
        match build_config(&base_args(path)) {
            Err(CliError::Config(msg)) => {
                assert!(msg.contains("paths.repository"));
                assert!(msg.contains("--repository"));
            }
            other => panic!("Expected Config error, got {:?}", other.err()),
        }
    }

    #[test]
    fn empty_path_in_file_fails_core_validation() {
        let content = EXAMPLE.replace("\"chimes_calculator\"", "\"\"");
        let (_dir, path) = write_config(&content);
        let result = build_config(&base_args(path));
        assert!(matches!(
            result,
            Err(CliError::ScanConfig(ConfigError::EmptyPath("repository_path")))
        ));
    }

    #[test]
    fn mismatched_sequence_lengths_are_rejected() {
        let content = EXAMPLE.replace("stop  = [4.0, 4.0]", "stop  = [4.0]");
        let (_dir, path) = write_config(&content);
        let result = build_config(&base_args(path));
        assert!(matches!(
            result,
            Err(CliError::ScanConfig(ConfigError::Scan(
                ScanError::LengthMismatch {
                    order: InteractionOrder::Triplet,
                    field: "stop",
                    ..
                }
            )))
        ));
    }

    #[test]
    fn step_override_does_not_hide_length_mismatch() {
        let content = EXAMPLE.replace("step  = [0.01, 0.01, 0.01]", "step  = [0.01]");
        let (_dir, path) = write_config(&content);

        for set_values in [vec![], vec!["scan.pair.step=0.5".to_string()]] {
            let mut args = base_args(path.clone());
            args.set_values = set_values;
            assert!(matches!(
                build_config(&args),
                Err(CliError::ScanConfig(ConfigError::Scan(
                    ScanError::LengthMismatch {
                        order: InteractionOrder::Pair,
                        field: "step",
                        expected: 3,
                        found: 1,
                    }
                )))
            ));
        }
    }

    #[test]
    fn duplicate_type_indices_are_rejected() {
        let content = EXAMPLE.replace("types = [0, 3, 5]", "types = [0, 3, 3]");
        let (_dir, path) = write_config(&content);
        let result = build_config(&base_args(path));
        assert!(matches!(
            result,
            Err(CliError::ScanConfig(ConfigError::Scan(
                ScanError::DuplicateTypeIndex { type_index: 3, .. }
            )))
        ));
    }
}
