/// Three-step rating used across the dashboard. The thresholds differ per
/// region, so each region has its own constructor instead of one shared
/// cutoff table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Excellent,
    Good,
    Average,
}

impl ScoreTier {
    /// Channel health label: Excellent >= 75, Good >= 60, else Average.
    pub fn for_health(score: f64) -> Self {
        if score >= 75.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else {
            Self::Average
        }
    }

    /// Performance breakdown styling: excellent >= 85, good >= 60.
    pub fn for_breakdown(score: f64) -> Self {
        if score >= 85.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else {
            Self::Average
        }
    }

    /// Competitor health badge: excellent >= 75, good >= 65.
    pub fn for_competitor(score: f64) -> Self {
        if score >= 75.0 {
            Self::Excellent
        } else if score >= 65.0 {
            Self::Good
        } else {
            Self::Average
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
        }
    }
}

/// SEO card styling. "good" is evaluated before "warning", so a score of
/// exactly 75 is good and exactly 50 is average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoTier {
    Good,
    Warning,
    Average,
}

impl SeoTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 75.0 {
            Self::Good
        } else if score < 50.0 {
            Self::Warning
        } else {
            Self::Average
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Average => "average",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Average => "Average",
        }
    }
}

/// The seven dashboard sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Performance,
    Content,
    Competitors,
    Seo,
    Recommendations,
    Insights,
}

impl Section {
    pub const ALL: [Self; 7] = [
        Self::Overview,
        Self::Performance,
        Self::Content,
        Self::Competitors,
        Self::Seo,
        Self::Recommendations,
        Self::Insights,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Performance => "performance",
            Self::Content => "content",
            Self::Competitors => "competitors",
            Self::Seo => "seo",
            Self::Recommendations => "recommendations",
            Self::Insights => "insights",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Performance => "Performance",
            Self::Content => "Content",
            Self::Competitors => "Competitors",
            Self::Seo => "SEO",
            Self::Recommendations => "Growth",
            Self::Insights => "Insights",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Overview),
            1 => Some(Self::Performance),
            2 => Some(Self::Content),
            3 => Some(Self::Competitors),
            4 => Some(Self::Seo),
            5 => Some(Self::Recommendations),
            6 => Some(Self::Insights),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ScoreTier, Section, SeoTier};

    #[test]
    fn health_label_boundaries() {
        assert_eq!(ScoreTier::for_health(75.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::for_health(74.9), ScoreTier::Good);
        assert_eq!(ScoreTier::for_health(60.0), ScoreTier::Good);
        assert_eq!(ScoreTier::for_health(59.9), ScoreTier::Average);
        assert_eq!(ScoreTier::for_health(0.0), ScoreTier::Average);
    }

    #[test]
    fn breakdown_tier_boundaries() {
        assert_eq!(ScoreTier::for_breakdown(85.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::for_breakdown(84.9), ScoreTier::Good);
        assert_eq!(ScoreTier::for_breakdown(60.0), ScoreTier::Good);
        assert_eq!(ScoreTier::for_breakdown(59.9), ScoreTier::Average);
    }

    #[test]
    fn competitor_badge_boundaries() {
        assert_eq!(ScoreTier::for_competitor(75.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::for_competitor(74.9), ScoreTier::Good);
        assert_eq!(ScoreTier::for_competitor(65.0), ScoreTier::Good);
        assert_eq!(ScoreTier::for_competitor(64.9), ScoreTier::Average);
    }

    #[test]
    fn seo_tier_resolves_good_before_warning() {
        // Exact boundaries: 75 is good, 50 is average.
        assert_eq!(SeoTier::for_score(75.0), SeoTier::Good);
        assert_eq!(SeoTier::for_score(74.9), SeoTier::Average);
        assert_eq!(SeoTier::for_score(50.0), SeoTier::Average);
        assert_eq!(SeoTier::for_score(49.9), SeoTier::Warning);
        assert_eq!(SeoTier::for_score(0.0), SeoTier::Warning);
    }

    #[test]
    fn section_index_round_trips() {
        for (index, section) in Section::ALL.iter().enumerate() {
            assert_eq!(Section::from_index(index), Some(*section));
            assert_eq!(section.index(), index);
        }
        assert_eq!(Section::from_index(7), None);
    }
}
