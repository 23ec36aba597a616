use crate::cli::PlanArgs;
use crate::config::builder::build_config;
use crate::config::defaults::DefaultsConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use pesgen::core::io::samples;
use pesgen::core::scan::ScanJob;
use pesgen::engine::error::EngineError;
use pesgen::engine::progress::ProgressReporter;
use pesgen::workflows::{
    self,
    plan::{PlanOptions, ScanPlan},
};
use tracing::{info, warn};

pub fn run(args: PlanArgs, show_progress: bool) -> Result<()> {
    let defaults = DefaultsConfig::default();
    let app = build_config(&args.config)?;

    let handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    if args.check_paths {
        workflows::preflight::run(&app.core_config, &reporter)?;
    }

    let options = PlanOptions {
        large_scan_threshold: args
            .large_scan_threshold
            .unwrap_or(defaults.large_scan_threshold),
    };
    info!("Invoking the scan planning workflow...");
    let plan = workflows::plan::run(&app.core_config, &options, &reporter)?;

    for line in render_table(&plan) {
        println!("{}", line);
    }

    let large = plan.large_jobs().count();
    if large > 0 {
        warn!("{} scan job(s) exceed the large-scan threshold.", large);
        println!(
            "Warning: {} job(s) visit more than {} configurations; consider a larger step first (e.g. -S scan.triplet.step=0.5).",
            large, options.large_scan_threshold
        );
    }

    if let Some(output) = &args.output {
        let rows = reporter.phase("Writing samples", || {
            samples::write_samples_to_path(plan.jobs(), output, &reporter)
                .map_err(EngineError::from)
        })?;
        println!("✓ {} sample point(s) written to: {}", rows, output.display());
    }

    Ok(())
}

fn render_row(job: &ScanJob) -> String {
    format!(
        "{:<16} {:>8.4} {:>8.4} {:>8.4} {:>9} {:>16}",
        job.label(),
        job.range.start(),
        job.range.stop(),
        job.range.step(),
        job.sample_count(),
        job.configuration_count()
    )
}

fn render_table(plan: &ScanPlan) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<16} {:>8} {:>8} {:>8} {:>9} {:>16}",
        "JOB", "START", "STOP", "STEP", "SAMPLES", "CONFIGURATIONS"
    )];
    lines.extend(plan.jobs().iter().map(render_row));
    lines.push(String::new());
    for summary in plan.summary() {
        lines.push(format!(
            "{:<10} {} job(s), {} sample(s), {} configuration(s)",
            summary.order.key(),
            summary.jobs,
            summary.samples,
            summary.configurations
        ));
    }
    lines.push(format!(
        "{:<10} {} job(s), {} sample(s), {} configuration(s)",
        "total",
        plan.jobs().len(),
        plan.total_samples(),
        plan.total_configurations()
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ConfigArgs;
    use std::fs;
    use tempfile::tempdir;

    const CONFIG: &str = r#"
        [paths]
        repository = "repo"
        parameter-file = "params.txt"

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

    fn plan_args(dir: &std::path::Path) -> PlanArgs {
        let config = dir.join("pesgen.toml");
        fs::write(&config, CONFIG).unwrap();
        PlanArgs {
            config: ConfigArgs {
                config,
                repository: None,
                parameter_file: None,
                set_values: vec![],
            },
            output: None,
            large_scan_threshold: None,
            check_paths: false,
        }
    }

    #[test]
    fn table_has_one_row_per_job_and_totals() {
        let dir = tempdir().unwrap();
        let app = build_config(&plan_args(dir.path()).config).unwrap();
        let plan = workflows::plan::run(
            &app.core_config,
            &PlanOptions::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        let lines = render_table(&plan);
        assert!(lines[0].starts_with("JOB"));
        assert!(lines[1].starts_with("pair-0"));
        assert!(lines[1].contains("301"));
        assert!(lines[5].starts_with("triplet-4"));
        assert!(lines[5].contains("29791"));
        assert!(lines.last().unwrap().contains("5 job(s), 965 sample(s)"));
    }

    #[test]
    fn run_writes_sample_csv() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("samples.csv");
        let mut args = plan_args(dir.path());
        args.output = Some(output.clone());

        run(args, false).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 1 + 3 * 301 + 2 * 31);
        assert!(content.starts_with("order,type_index,sample,distance\n"));
    }

    #[test]
    fn run_with_check_paths_fails_for_missing_repository() {
        let dir = tempdir().unwrap();
        let mut args = plan_args(dir.path());
        args.check_paths = true;

        let result = run(args, false);
        assert!(matches!(
            result,
            Err(crate::error::CliError::Engine(EngineError::MissingPath { .. }))
        ));
    }
}
