//! Market-position bubble chart specification.
//!
//! Built once from the competitor benchmark; theme-dependent colors are
//! captured from the palette at construction time and rewritten in place
//! by [`recolor`] when the theme changes.

use ratatui::style::Color;

use crate::format::{format_percent, format_thousands};
use crate::report::CompetitorChannel;
use crate::theme::Palette;

/// Bubble radius = sqrt(avg views in thousands) * this constant, so the
/// radius grows sub-linearly with view count.
pub const RADIUS_SCALE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct BubblePoint {
    pub name: String,
    /// Subscribers in thousands. Plotted on a logarithmic axis.
    pub x: f64,
    /// Engagement rate, percent.
    pub y: f64,
    pub radius: f64,
    pub tooltip: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BubbleSeries {
    pub label: String,
    pub color: Color,
    pub points: Vec<BubblePoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BubbleChartSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Subscriber counts span orders of magnitude.
    pub log_x: bool,
    pub current: BubbleSeries,
    pub competitors: BubbleSeries,
    // Theme-dependent, rewritten by `recolor`.
    pub text_color: Color,
    pub secondary_color: Color,
    pub grid_color: Color,
}

/// Build the two-series spec: one point for the channel whose name matches
/// `current_name`, every other channel in the competitor series.
pub fn build_market_chart(
    channels: &[CompetitorChannel],
    current_name: &str,
    palette: &Palette,
) -> BubbleChartSpec {
    let (current, competitors): (Vec<_>, Vec<_>) = channels
        .iter()
        .partition(|channel| channel.name == current_name);

    BubbleChartSpec {
        title: "Subscribers vs Engagement Rate (Bubble size = Avg Views)".to_string(),
        x_title: "Subscribers (K)".to_string(),
        y_title: "Engagement Rate (%)".to_string(),
        log_x: true,
        current: BubbleSeries {
            label: "Current Channel".to_string(),
            color: palette.current_bubble,
            points: current.iter().map(|channel| bubble_point(channel)).collect(),
        },
        competitors: BubbleSeries {
            label: "Competitors".to_string(),
            color: palette.competitor_bubble,
            points: competitors
                .iter()
                .map(|channel| bubble_point(channel))
                .collect(),
        },
        text_color: palette.text,
        secondary_color: palette.text_secondary,
        grid_color: palette.border,
    }
}

fn bubble_point(channel: &CompetitorChannel) -> BubblePoint {
    let subscribers_k = channel.subscribers / 1_000.0;
    let avg_views_k = channel.avg_views / 1_000.0;
    BubblePoint {
        name: channel.name.clone(),
        x: subscribers_k,
        y: channel.engagement_rate,
        radius: avg_views_k.max(0.0).sqrt() * RADIUS_SCALE,
        tooltip: vec![
            channel.name.clone(),
            format!("Subscribers: {}", format_thousands(channel.subscribers)),
            format!("Engagement: {}", format_percent(channel.engagement_rate)),
            format!("Avg Views: {}", format_thousands(channel.avg_views)),
        ],
    }
}

/// Rewrite the theme-dependent color fields in place. Series fill colors
/// are fixed and left untouched.
pub fn recolor(spec: &mut BubbleChartSpec, palette: &Palette) {
    spec.text_color = palette.text;
    spec.secondary_color = palette.text_secondary;
    spec.grid_color = palette.border;
}
