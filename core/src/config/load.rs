use std::path::{Path, PathBuf};

use super::types::AppConfig;

pub const CONFIG_ENV: &str = "ORFPIPE_CONFIG";
pub const LONG_ORFS_BIN_ENV: &str = "ORFPIPE_LONGORFS_BIN";
pub const PREDICT_BIN_ENV: &str = "ORFPIPE_PREDICT_BIN";
pub const LOG_LEVEL_ENV: &str = "ORFPIPE_LOG_LEVEL";

/// Get the default orfpipe data directory: ~/.orfpipe
pub fn get_orfpipe_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".orfpipe"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("read config {} failed: {e}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("parse config {} failed: {e}", path.display()))?;
    Ok(cfg)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: $ORFPIPE_CONFIG
    let explicit = std::env::var(CONFIG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    // Priority 2: ~/.orfpipe/config.toml
    let home_config = get_orfpipe_data_dir().ok().map(|d| d.join("config.toml"));

    // Priority 3: ./orfpipe.toml (current directory)
    let local_config = Path::new("orfpipe.toml");

    let mut cfg = if let Some(path) = explicit {
        load_from_path(&path)?
    } else if let Some(path) = home_config.filter(|p| p.exists()) {
        load_from_path(&path)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        AppConfig::default()
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    if let Ok(data_dir) = get_orfpipe_data_dir() {
        fill_log_directory(&mut cfg, &data_dir);
    }
    Ok(cfg)
}

/// Point an unset or blank `logging.directory` at `<data_dir>/logs`.
pub fn fill_log_directory(cfg: &mut AppConfig, data_dir: &Path) {
    let unset = cfg
        .logging
        .directory
        .as_deref()
        .map(|s| s.trim().is_empty())
        .unwrap_or(true);
    if unset {
        cfg.logging.directory = Some(data_dir.join("logs").to_string_lossy().into_owned());
    }
}

/// Environment variable overrides; blank values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_blank(LONG_ORFS_BIN_ENV) {
        cfg.tools.long_orfs = Some(v);
    }
    if let Some(v) = non_blank(PREDICT_BIN_ENV) {
        cfg.tools.predict = Some(v);
    }
    if let Some(v) = non_blank(LOG_LEVEL_ENV) {
        cfg.logging.level = v;
    }
}
