use channelscope::viewmodel::{BadgeInsightVm, DashboardVm};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub fn render_insights(app: &App, vm: &DashboardVm, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();
    let insights = &vm.insights;

    let lines = vec![
        badge_line("Best Upload Time", &insights.best_upload_time, &palette),
        TextLine::from(""),
        badge_line("Top Content Format", &insights.top_content_format, &palette),
        TextLine::from(""),
        plain_line("Audience Retention", &insights.audience_retention, &palette),
        plain_line("Community Health", &insights.community_health, &palette),
    ];

    let block = Block::default()
        .title(" Engagement Insights ")
        .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn badge_line(
    label: &str,
    insight: &BadgeInsightVm,
    palette: &channelscope::theme::Palette,
) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().fg(palette.text_secondary),
        ),
        Span::styled(
            format!("[{}] ", insight.badge),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            insight.description.clone(),
            Style::default().fg(palette.text),
        ),
    ])
}

fn plain_line(
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
