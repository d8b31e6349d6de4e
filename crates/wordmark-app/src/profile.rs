use std::path::{Path, PathBuf};

use wordmark_config::Config;

/// Config looked up in the working directory when `--config` is not given
const LOCAL_CONFIG: &str = "wordmark.json";

/// Explicit file, then `./wordmark.json`, then defaults with env overrides
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::from_file(path);
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Config::from_file(&local);
    }

    tracing::debug!("No config file, using defaults");
    Ok(Config::new())
}

/// Write the effective config so it can be edited
pub fn write_config(config: &Config, path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    std::fs::write(path, serde_json::to_string_pretty(config)?)?;
    tracing::info!("Wrote config to {}", path.display());
    Ok(())
}
