pub mod competitors;
pub mod content;
pub mod insights;
pub mod overview;
pub mod performance;
pub mod recommendations;
pub mod seo;

use channelscope::domain::{ScoreTier, SeoTier};
use channelscope::theme::Palette;
use ratatui::style::Color;

pub const fn tier_color(tier: ScoreTier, palette: &Palette) -> Color {
    match tier {
        ScoreTier::Excellent => palette.positive,
        ScoreTier::Good => palette.accent,
        ScoreTier::Average => palette.text_secondary,
    }
}

pub const fn seo_tier_color(tier: SeoTier, palette: &Palette) -> Color {
    match tier {
        SeoTier::Good => palette.positive,
        SeoTier::Warning => palette.negative,
        SeoTier::Average => Color::Yellow,
    }
}
