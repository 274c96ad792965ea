use channelscope::theme::Palette;
use channelscope::viewmodel::CompetitorRowVm;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::ui::screens::tier_color;

pub fn render_competitor_table(
    rows: &[CompetitorRowVm],
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let header = Row::new(
        ["Channel", "Subscribers", "Avg Views", "Engagement", "Uploads", "Health"]
            .into_iter()
            .map(Cell::from),
    )
    .style(
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::BOLD),
    );

    let body = rows.iter().map(|row| {
        let name = if row.is_current {
            format!("▶ {}", row.name)
        } else {
            format!("  {}", row.name)
        };
        let style = if row.is_current {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };

        Row::new(vec![
            Cell::from(name),
            Cell::from(row.subscribers.clone()),
            Cell::from(row.avg_views.clone()),
            Cell::from(row.engagement.clone()),
            Cell::from(row.upload_frequency.clone()),
            Cell::from(TextLine::from(vec![
                Span::raw(format!("{:.1} ", row.health_score)),
                Span::styled(
                    row.badge.label(),
                    Style::default().fg(tier_color(row.badge, palette)),
                ),
            ])),
        ])
        .style(style)
    });

    let table = Table::new(
        body,
        [
            Constraint::Min(18),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(15),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Benchmark ")
            .title_style(Style::default().fg(palette.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );

    f.render_widget(table, area);
}
