use channelscope::chart::{BubbleChartSpec, BubbleSeries};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the market-position bubble chart: a canvas with one circle per
/// channel next to a legend listing each bubble's stats, which stands in
/// for the hover tooltip.
pub fn render_bubble_chart(spec: &BubbleChartSpec, f: &mut Frame<'_>, area: Rect) {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_canvas(spec, f, split[0]);
    render_legend(spec, f, split[1]);
}

fn plotted_x(spec: &BubbleChartSpec, x: f64) -> f64 {
    if spec.log_x {
        x.max(0.1).log10()
    } else {
        x
    }
}

fn render_canvas(spec: &BubbleChartSpec, f: &mut Frame<'_>, area: Rect) {
    let points = || {
        spec.current
            .points
            .iter()
            .chain(spec.competitors.points.iter())
    };

    let mut x_min = f64::MAX;
    let mut x_max = f64::MIN;
    let mut y_max = 0.0_f64;
    for point in points() {
        let x = plotted_x(spec, point.x);
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_max = y_max.max(point.y);
    }
    if x_min > x_max {
        (x_min, x_max) = (0.0, 1.0);
    }

    let x_bounds = [x_min - 0.3, x_max + 0.5];
    let y_bounds = [0.0, (y_max * 1.25).max(1.0)];
    let x_span = x_bounds[1] - x_bounds[0];

    let block = Block::default()
        .title(format!(" {} ", spec.title))
        .title_style(Style::default().fg(spec.text_color))
        .title_bottom(format!(" {} / {} ", spec.x_title, spec.y_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(spec.grid_color));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for series in [&spec.competitors, &spec.current] {
                for point in &series.points {
                    ctx.draw(&Circle {
                        x: plotted_x(spec, point.x),
                        y: point.y,
                        // Radii are in axis units; keep them proportional
                        // to the horizontal span so they survive rescaling.
                        radius: point.radius * x_span / 40.0,
                        color: series.color,
                    });
                }
            }
        });

    f.render_widget(canvas, area);
}

fn render_legend(spec: &BubbleChartSpec, f: &mut Frame<'_>, area: Rect) {
    let mut lines = Vec::new();
    for series in [&spec.current, &spec.competitors] {
        append_series_lines(spec, series, &mut lines);
    }

    let block = Block::default()
        .title(" Channels ")
        .title_style(Style::default().fg(spec.text_color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(spec.grid_color));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn append_series_lines(
    spec: &BubbleChartSpec,
    series: &BubbleSeries,
    lines: &mut Vec<TextLine<'static>>,
) {
    lines.push(TextLine::from(Span::styled(
        format!("● {}", series.label),
        Style::default()
            .fg(series.color)
            .add_modifier(Modifier::BOLD),
    )));
    for point in &series.points {
        for (index, tooltip_line) in point.tooltip.iter().enumerate() {
            let style = if index == 0 {
                Style::default().fg(spec.text_color)
            } else {
                Style::default().fg(spec.secondary_color)
            };
            lines.push(TextLine::from(Span::styled(
                format!("  {tooltip_line}"),
                style,
            )));
        }
    }
}
