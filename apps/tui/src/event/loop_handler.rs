use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::{handle_input, App, LoadState};
use crate::ui;

use channelscope::fetch::{self, FetchError};
use channelscope::format::{format_growth, format_number};
use channelscope::report::Report;
use channelscope::viewmodel::populate;

/// Run the main application event loop.
///
/// The report arrives on `reports` from the background fetch task; the loop
/// keeps drawing the loading screen until either a report or an error shows
/// up, then swaps the dashboard (or the error panel) in.
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    reports: &mut UnboundedReceiver<Result<Report, FetchError>>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Bootstrap outcome, if the fetch task has finished.
        if app.load_state == LoadState::Loading {
            match reports.try_recv() {
                Ok(Ok(report)) => app.apply_report(report),
                Ok(Err(error)) => app.fail(error.to_string()),
                Err(_) => {}
            }
        }

        let viewport = terminal
            .size()
            .map_or(0, |size| size.height.saturating_sub(ui::CHROME_ROWS));
        app.update(viewport);

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if key.kind == KeyEventKind::Press {
                        handle_input(app, key.code);
                    }
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    app.on_resize();
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }
    }
    Ok(())
}

/// Run the application in headless mode (no UI): fetch the report, populate
/// the dashboard, and print it.
pub async fn run_headless(source: &str, json: bool) -> Result<()> {
    let report = fetch::fetch_report(source).await?;
    let dashboard = populate(&report);

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    let overview = &report.channel_overview;
    println!("\nChannel Report: {}", overview.name);
    println!("=================");
    println!(
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    println!("Niche: {}", overview.niche);
    println!("Subscribers: {}", format_number(overview.subscribers));
    println!("Total views: {}", format_number(overview.total_views));
    println!("Videos: {}", overview.total_videos);
    println!(
        "Health score: {:.1} ({})",
        overview.health_score,
        dashboard.overview.health_label.label()
    );
    println!(
        "Monthly growth: {}",
        format_growth(report.performance_metrics.monthly_growth_rate)
    );

    println!("\nEngagement Breakdown:");
    for item in &dashboard.breakdown {
        println!("- {}: {:.0}% ({})", item.name, item.score, item.tier.label());
    }

    println!("\nTop Categories:");
    for category in &dashboard.categories {
        println!(
            "- {} | {} avg views | {}",
            category.name, category.avg_views, category.performance
        );
    }

    println!("\nCompetitor Benchmark:");
    for row in &dashboard.competitors {
        let marker = if row.is_current { " (you)" } else { "" };
        println!(
            "- {}{} | {} subs | {} engagement | score {}",
            row.name, marker, row.subscribers, row.engagement, row.health_score
        );
    }

    println!("\nSEO:");
    for card in &dashboard.seo_cards {
        println!("- {}: {:.0} ({})", card.title, card.score, card.tier.label());
    }

    Ok(())
}
