use channelscope::domain::Section;
use channelscope::theme::Palette;
use channelscope::viewmodel::DashboardVm;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::app::{App, LoadState};
use crate::ui::screens;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let palette = app.theme.palette();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title line
            Constraint::Length(1), // Section tabs
            Constraint::Min(0),    // Scrolling content
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area());

    render_header(app, &palette, f, layout[0]);
    render_tabs(app, &palette, f, layout[1]);

    match &app.load_state {
        LoadState::Loading => render_loading(app, &palette, f, layout[2]),
        LoadState::Failed(message) => render_error(message, &palette, f, layout[2]),
        LoadState::Ready => {
            if let Some(vm) = app.dashboard.as_ref() {
                render_sections(app, vm, f, layout[2]);
            }
        }
    }

    render_footer(&palette, f, layout[3]);

    if app.show_help {
        render_help_popup(&palette, f, f.area());
    }
}

fn render_header(app: &App, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let mut left = vec![Span::styled(
        "ChannelScope",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(report) = app.report.as_ref() {
        left.push(Span::styled(
            format!("  {}", report.channel_overview.name),
            Style::default().fg(palette.text),
        ));
    }

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(area);

    f.render_widget(Paragraph::new(TextLine::from(left)), split[0]);

    // Right side: last status note plus the theme toggle indicator.
    let right = TextLine::from(vec![
        Span::styled(
            app.status_message.clone(),
            Style::default().fg(palette.text_secondary),
        ),
        Span::styled(
            format!("  {} ", app.theme.glyph()),
            Style::default().fg(palette.accent),
        ),
    ]);
    f.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        split[1],
    );
}

fn render_tabs(app: &App, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let titles = Section::ALL
        .iter()
        .enumerate()
        .map(|(index, section)| TextLine::from(format!("{} {}", index + 1, section.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.nav.active.index())
        .style(Style::default().fg(palette.text_secondary))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

/// Stack the visible sections top to bottom. The scroll position is always
/// a section top, so only the bottom of the strip ever gets clipped.
fn render_sections(app: &App, vm: &DashboardVm, f: &mut Frame<'_>, area: Rect) {
    let scroll = app.nav.scroll;
    let mut y = area.y;
    let end = area.y + area.height;

    for extent in &app.nav.extents {
        if extent.bottom() <= scroll || y >= end {
            continue;
        }
        let skipped = scroll.saturating_sub(extent.top);
        let height = extent.height.saturating_sub(skipped).min(end - y);
        if height == 0 {
            continue;
        }

        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        match extent.section {
            Section::Overview => screens::overview::render_overview(app, vm, f, rect),
            Section::Performance => screens::performance::render_performance(app, vm, f, rect),
            Section::Content => screens::content::render_content(app, vm, f, rect),
            Section::Competitors => screens::competitors::render_competitors(app, vm, f, rect),
            Section::Seo => screens::seo::render_seo(app, vm, f, rect),
            Section::Recommendations => {
                screens::recommendations::render_recommendations(app, vm, f, rect);
            }
            Section::Insights => screens::insights::render_insights(app, vm, f, rect),
        }
        y += height;
    }
}

fn render_loading(app: &App, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frame_index = ((app.animation_counter / (2.0 * std::f64::consts::PI))
        * SPINNER_FRAMES.len() as f64) as usize
        % SPINNER_FRAMES.len();

    let lines = vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            format!("{} Loading report...", SPINNER_FRAMES[frame_index]),
            Style::default().fg(palette.accent),
        )),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines)).alignment(Alignment::Center),
        area,
    );
}

fn render_error(message: &str, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(60, 40, area);

    let block = Block::default()
        .title(" Unable to Load Report ")
        .title_style(
            Style::default()
                .fg(palette.negative)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.negative));

    let lines = vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            message.to_string(),
            Style::default().fg(palette.text),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Check the report source and restart.",
            Style::default().fg(palette.text_secondary),
        )),
        TextLine::from(Span::styled(
            "Press q to quit.",
            Style::default().fg(palette.text_secondary),
        )),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup_area,
    );
}

fn render_footer(palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(palette.text_secondary);

    let line = TextLine::from(vec![
        Span::styled("1-7", key_style),
        Span::styled(": Jump | ", text_style),
        Span::styled("j/k", key_style),
        Span::styled(": Next/Prev | ", text_style),
        Span::styled("t", key_style),
        Span::styled(": Theme | ", text_style),
        Span::styled("?", key_style),
        Span::styled(": Help | ", text_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", text_style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn render_help_popup(palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(" Help & Keyboard Shortcuts ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        TextLine::from(Span::styled(
            "ChannelScope",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Channel analytics dashboard for a fetched report."),
        TextLine::from(""),
        help_line("1-7", "Jump to a section", key_style),
        help_line("j / Down / Tab", "Next section", key_style),
        help_line("k / Up / Shift-Tab", "Previous section", key_style),
        help_line("g / Home", "First section", key_style),
        help_line("G / End", "Last section", key_style),
        help_line("t", "Toggle light/dark theme", key_style),
        help_line("h / ?", "Toggle this popup", key_style),
        help_line("Esc", "Close popup / quit", key_style),
        help_line("q", "Quit", key_style),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(palette.text_secondary),
        )),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: true }),
        popup_area,
    );
}

fn help_line(key: &str, action: &str, key_style: Style) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("  {key:<20}"), key_style),
        Span::raw(action.to_string()),
    ])
}
