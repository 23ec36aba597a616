use pesgen::engine::config::ScanConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub config_path: PathBuf,
    pub core_config: ScanConfig,
}
