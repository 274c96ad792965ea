use channelscope::viewmodel::DashboardVm;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::screens::tier_color;

pub fn render_overview(app: &App, vm: &DashboardVm, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();
    let overview = &vm.overview;

    // Health readout follows the counter animation, not the raw score.
    let health_display = app
        .health_anim
        .as_ref()
        .map_or_else(|| format!("{:.1}", overview.health_score), |anim| anim.display());

    let growth_style = if overview.growth_positive {
        Style::default().fg(palette.positive)
    } else {
        Style::default().fg(palette.negative)
    };

    let lines = vec![
        TextLine::from(vec![
            Span::styled(
                overview.name.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", overview.niche),
                Style::default().fg(palette.text_secondary),
            ),
        ]),
        TextLine::from(""),
        info_line("Subscribers", &overview.subscribers, &palette),
        info_line("Total Views", &overview.total_views, &palette),
        info_line("Videos", &overview.total_videos, &palette),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled(
                "Health Score: ",
                Style::default().fg(palette.text_secondary),
            ),
            Span::styled(
                health_display,
                Style::default()
                    .fg(tier_color(overview.health_label, &palette))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", overview.health_label.label()),
                Style::default().fg(tier_color(overview.health_label, &palette)),
            ),
        ]),
        TextLine::from(vec![
            Span::styled(
                "Monthly Growth: ",
                Style::default().fg(palette.text_secondary),
            ),
            Span::styled(overview.growth_badge.clone(), growth_style),
        ]),
    ];

    let block = Block::default()
        .title(" Overview ")
        .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn info_line(
    label: &str,
    value: &str,
    palette: &channelscope::theme::Palette,
) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().fg(palette.text_secondary),
        ),
        Span::styled(value.to_string(), Style::default().fg(palette.text)),
    ])
}
