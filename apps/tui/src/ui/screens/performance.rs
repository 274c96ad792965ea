use channelscope::viewmodel::DashboardVm;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::screens::tier_color;
use crate::ui::widgets::progress::fill_bar;

const BAR_WIDTH: u16 = 40;

pub fn render_performance(app: &App, vm: &DashboardVm, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let mut lines = Vec::with_capacity(1 + 2 * vm.breakdown.len());
    lines.push(TextLine::from(vec![
        Span::styled(
            "Engagement Breakdown",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    for (index, item) in vm.breakdown.iter().enumerate() {
        let color = tier_color(item.tier, &palette);
        lines.push(TextLine::from(vec![
            Span::styled(format!("{}: ", item.name), Style::default().fg(palette.text)),
            Span::styled(format!("{:.0}", item.score), Style::default().fg(color)),
            Span::styled(
                format!(" ({})", item.tier.label()),
                Style::default().fg(palette.text_secondary),
            ),
        ]));

        // Bars fill from zero once the section has been seen.
        let percent = app
            .bar_anims
            .get(index)
            .map_or(item.target_width, channelscope::anim::BarAnim::current);
        lines.push(fill_bar(percent, BAR_WIDTH, color, palette.border));
    }

    let block = Block::default()
        .title(" Performance ")
        .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
