mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use clap::Parser;
use color_eyre::Result;
use tokio::sync::mpsc;

use app::App;
use channelscope::config;
use channelscope::fetch;
use channelscope::theme::ThemeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = cli::CliArgs::parse();
    args.apply_env_overrides();

    let config = config::init_app_config()?;

    // Without a terminal there is nothing to draw; fall back to the
    // headless report dump.
    if args.headless || !is_terminal() {
        return event::run_headless(&config.report_source, args.json).await;
    }

    let mut app = App::new(ThemeStore::load(config.theme_file.clone()));

    // Kick off the fetch in the background; the event loop picks the
    // outcome up while the loading screen spins.
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = config.report_source.clone();
    tokio::spawn(async move {
        let outcome = fetch::fetch_report(&source).await;
        let _ = tx.send(outcome);
    });

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app, &mut rx).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
