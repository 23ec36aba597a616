use crate::cli::InitArgs;
use crate::config::defaults::DefaultsConfig;
use crate::error::{CliError, Result};
use std::path::PathBuf;
use tracing::info;

pub const TEMPLATE: &str = r#"# pesgen scan configuration
#
# Remember to set PAIR CHEBYSHEV PENALTY SCALING to zero in the parameter file
# before generating scans.

[paths]
# ChIMES calculator checkout used to evaluate the scans.
repository = "chimes_calculator/"
# Parameter file whose interactions are scanned.
parameter-file = "chimes_calculator/serial_interface/tests/force_fields/test_params.CHON.txt"

# Each position across types/start/stop/step is one scan job.
# Type indices are the numbers after "PAIRTYPE PARAMS:" in the parameter file.
[scan.pair]
types = [0,    3,    5   ]
start = [1.0,  1.0,  1.0 ] # Smallest distance for scan
stop  = [4.0,  4.0,  4.0 ] # Largest distance for scan
step  = [0.01, 0.01, 0.01] # Step size for scan

# Type indices are the numbers after "TRIPLETTYPE PARAMS:" in the parameter file.
[scan.triplet]
types = [1,    4   ]
start = [1.0,  1.0 ]
stop  = [4.0,  4.0 ]
step  = [0.10, 0.10]

# Four-body scans visit every combination of six distances, so a small step takes a
# very long time. Start with a large step to gauge run time (`pesgen plan`) and refine.
#
# [scan.quadruplet]
# types = [7   ]
# start = [1.0 ]
# stop  = [4.0 ]
# step  = [1.00]
"#;

pub fn run(args: InitArgs) -> Result<()> {
    let defaults = DefaultsConfig::default();
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&defaults.config_file_name));

    if output.exists() && !args.force {
        return Err(CliError::Argument(format!(
            "'{}' already exists. Use --force to overwrite it.",
            output.display()
        )));
    }

    std::fs::write(&output, TEMPLATE)?;
    info!("Template configuration written to {:?}", &output);
    println!("✓ Template configuration written to: {}", output.display());
    Ok(())
}
