use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};

/// One-row fill bar: filled cells for the current percentage, shaded cells
/// for the rest. `percent` is 0-100, already animated by the caller.
pub fn fill_bar(percent: f64, width: u16, color: Color, rest: Color) -> TextLine<'static> {
    let width = usize::from(width);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    TextLine::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(width - filled), Style::default().fg(rest)),
    ])
}
