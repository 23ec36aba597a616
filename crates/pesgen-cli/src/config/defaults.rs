use pesgen::workflows::plan::DEFAULT_LARGE_SCAN_THRESHOLD;

pub struct DefaultsConfig {
    pub config_file_name: String,
    pub large_scan_threshold: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            config_file_name: "pesgen.toml".to_string(),
            large_scan_threshold: DEFAULT_LARGE_SCAN_THRESHOLD,
        }
    }
}
