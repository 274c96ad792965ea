//! Application configuration from `.env` / environment variables.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP(S) URL or local path of the report JSON.
    pub report_source: String,
    /// File persisting the light/dark preference.
    pub theme_file: PathBuf,
}

/// Initializes the application configuration.
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = AppConfig {
        report_source: get_report_source(),
        theme_file: get_theme_file(),
    };

    // The theme store writes lazily; make sure its directory exists up
    // front so a toggle cannot fail on a missing parent.
    if let Some(parent) = config.theme_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    Ok(config)
}

/// Where to fetch the report from; defaults to `report.json` next to the
/// working directory.
pub fn get_report_source() -> String {
    env::var("REPORT_SOURCE").unwrap_or_else(|_| "report.json".to_string())
}

/// Gets the path of the persisted theme preference.
pub fn get_theme_file() -> PathBuf {
    env::var("THEME_FILE").map_or_else(
        |_| PathBuf::from("./.channelscope/theme"),
        PathBuf::from,
    )
}
