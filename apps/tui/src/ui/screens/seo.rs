use channelscope::viewmodel::DashboardVm;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::screens::seo_tier_color;

pub fn render_seo(app: &App, vm: &DashboardVm, f: &mut Frame<'_>, area: Rect) {
    let palette = app.theme.palette();

    let mut lines = Vec::new();
    for card in &vm.seo_cards {
        let color = seo_tier_color(card.tier, &palette);
        lines.push(TextLine::from(vec![
            Span::styled(
                card.title.clone(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {:.0}", card.score),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", card.tier.label()),
                Style::default().fg(color),
            ),
        ]));
        for strength in &card.strengths {
            lines.push(TextLine::from(Span::styled(
                format!("  + {strength}"),
                Style::default().fg(palette.positive),
            )));
        }
        for improvement in &card.improvements {
            lines.push(TextLine::from(Span::styled(
                format!("  - {improvement}"),
                Style::default().fg(palette.text_secondary),
            )));
        }
        lines.push(TextLine::from(""));
    }

    let block = Block::default()
        .title(" SEO Analysis ")
        .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
