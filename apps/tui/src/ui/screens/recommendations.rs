use channelscope::viewmodel::DashboardVm;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub fn render_recommendations(app: &App, vm: &DashboardVm, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let mut lines = Vec::new();
    for group in &vm.recommendations {
        lines.push(TextLine::from(Span::styled(
            group.title.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for item in &group.items {
            lines.push(TextLine::from(vec![
                Span::styled("• ", Style::default().fg(palette.accent)),
                Span::styled(item.title.clone(), Style::default().fg(palette.text)),
            ]));
            if let Some(subtitle) = &item.subtitle {
                lines.push(TextLine::from(Span::styled(
                    format!("    {subtitle}"),
                    Style::default().fg(palette.text_secondary),
                )));
            }
        }
        lines.push(TextLine::from(""));
    }

    let block = Block::default()
        .title(" Growth Recommendations ")
        .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
