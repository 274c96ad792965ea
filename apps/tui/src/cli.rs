use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "channelscope", version, about = "Channel analytics dashboard TUI")]
pub struct CliArgs {
    /// Print the populated dashboard and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Report source: a URL or a local JSON file
    #[arg(long, value_name = "URL_OR_PATH")]
    pub report: Option<String>,

    /// Override the theme persistence file
    #[arg(long = "theme-file", value_name = "PATH")]
    pub theme_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(source) = &self.report {
            std::env::set_var("REPORT_SOURCE", source);
        }
        if let Some(path) = &self.theme_file {
            std::env::set_var("THEME_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
