use crate::cli::ValidateArgs;
use crate::config::builder::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use pesgen::core::scan::InteractionOrder;
use pesgen::engine::config::ScanConfig;
use pesgen::engine::progress::ProgressReporter;
use pesgen::workflows;
use tracing::info;

pub fn run(args: ValidateArgs, show_progress: bool) -> Result<()> {
    info!("Building configuration from {:?}", &args.config.config);
    let app = build_config(&args.config)?;

    if args.check_paths {
        let handler = CliProgressHandler::new(show_progress);
        let reporter = ProgressReporter::with_callback(handler.get_callback());
        workflows::preflight::run(&app.core_config, &reporter)?;
        println!("✓ Repository and parameter file found.");
    }

    println!(
        "✓ Configuration '{}' is valid.",
        app.config_path.display()
    );
    for line in summary_lines(&app.core_config) {
        println!("  {}", line);
    }
    Ok(())
}

fn summary_lines(config: &ScanConfig) -> Vec<String> {
    InteractionOrder::ALL
        .into_iter()
        .map(|order| match config.spec(order) {
            Some(spec) => format!(
                "{:<10} {} scan(s), types {:?} from '{}'",
                order.key(),
                spec.len(),
                spec.type_indices().collect::<Vec<_>>(),
                order.parameter_section()
            ),
            None => format!("{:<10} not scanned", order.key()),
        })
        .collect()
}
