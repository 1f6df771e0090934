// crates/calotrig-cli/src/io/config_file.rs

use anyhow::Context;
use calotrig_core::config::format as config_format;
use calotrig_core::validate::validate_config;
use calotrig_core::ClusterConfig;

/// Load and validate a .ctc config file.
pub fn load_ctc(path: &str) -> anyhow::Result<ClusterConfig> {
    let bytes = std::fs::read(path).with_context(|| format!("read config {path}"))?;
    let config = config_format::decode(&bytes).with_context(|| format!("decode config {path}"))?;
    validate_config(&config).with_context(|| format!("validate config {path}"))?;
    Ok(config)
}

pub fn save_ctc(path: &str, config: &ClusterConfig) -> anyhow::Result<()> {
    let bytes = config_format::encode(config);
    std::fs::write(path, bytes).with_context(|| format!("write config {path}"))?;
    Ok(())
}
