use channelscope::domain::ScoreTier;
use channelscope::viewmodel::DashboardVm;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::screens::tier_color;

pub fn render_content(app: &App, vm: &DashboardVm, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let mut lines = Vec::with_capacity(1 + 2 * vm.categories.len());
    lines.push(TextLine::from(Span::styled(
        "Top Performing Categories",
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    )));

    for category in &vm.categories {
        // The free-form performance label reuses tier styling when it
        // matches one of the known names.
        let color = match category.style_class.as_str() {
            "excellent" => tier_color(ScoreTier::Excellent, &palette),
            "good" => tier_color(ScoreTier::Good, &palette),
            _ => palette.text_secondary,
        };

        lines.push(TextLine::from(vec![
            Span::styled(
                category.name.clone(),
                Style::default().fg(palette.text),
            ),
            Span::styled(
                format!("  [{}]", category.performance),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(TextLine::from(Span::styled(
            format!("  {} avg views", category.avg_views),
            Style::default().fg(palette.text_secondary),
        )));
    }

    let block = Block::default()
        .title(" Content ")
        .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
