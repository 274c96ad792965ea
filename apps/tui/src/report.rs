use serde::Deserialize;

/// The single JSON payload describing all dashboard content for one load.
///
/// The report is immutable after deserialization; every field is required,
/// so a missing section fails the parse and surfaces at the bootstrap
/// boundary instead of producing a partially rendered dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub channel_overview: ChannelOverview,
    pub performance_metrics: PerformanceMetrics,
    pub content_analysis: ContentAnalysis,
    pub competitor_benchmark: CompetitorBenchmark,
    pub seo_analysis: SeoAnalysis,
    pub growth_recommendations: GrowthRecommendations,
    pub engagement_insights: EngagementInsights,
}

impl Report {
    /// The benchmark entry whose name matches the channel itself.
    pub fn current_channel(&self) -> Option<&CompetitorChannel> {
        self.competitor_benchmark
            .channels
            .iter()
            .find(|channel| channel.name == self.channel_overview.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelOverview {
    pub name: String,
    pub niche: String,
    pub subscribers: u64,
    pub total_views: u64,
    pub total_videos: u64,
    /// Composite 0-100 rating. Rendered as-is, no range validation.
    pub health_score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceMetrics {
    /// Percent, signed. Positive values get the positive-styled badge.
    pub monthly_growth_rate: f64,
    pub engagement_breakdown: Vec<EngagementScore>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngagementScore {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentAnalysis {
    pub top_categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    pub avg_views: f64,
    /// Free-form label ("Excellent", "Good", ...); lowercased for styling.
    pub performance: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitorBenchmark {
    pub channels: Vec<CompetitorChannel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitorChannel {
    pub name: String,
    pub subscribers: f64,
    pub avg_views: f64,
    pub engagement_rate: f64,
    pub upload_frequency: String,
    pub health_score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeoAnalysis {
    pub title_optimization: SeoSection,
    pub description_quality: SeoSection,
    pub thumbnail_effectiveness: SeoSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeoSection {
    pub score: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrowthRecommendations {
    pub content_strategy: Vec<String>,
    pub seo_improvements: Vec<String>,
    pub engagement_tactics: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngagementInsights {
    pub best_upload_time: String,
    pub top_content_format: String,
    pub audience_retention: String,
    pub community_health: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Report;

    /// The demo report shipped with the repo doubles as the test fixture.
    pub const SAMPLE_REPORT: &str = include_str!("../demos/report.json");

    pub fn sample_report() -> Report {
        serde_json::from_str(SAMPLE_REPORT).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{sample_report, SAMPLE_REPORT};
    use super::Report;

    #[test]
    fn sample_report_parses() {
        let report = sample_report();
        assert_eq!(report.channel_overview.name, "Jhoom Baba Gyaan");
        assert_eq!(report.competitor_benchmark.channels.len(), 4);
        assert_eq!(report.performance_metrics.engagement_breakdown.len(), 3);
    }

    #[test]
    fn current_channel_matches_overview_name() {
        let report = sample_report();
        let current = report.current_channel().unwrap();
        assert_eq!(current.name, report.channel_overview.name);
        assert!((current.engagement_rate - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_section_fails_deserialization() {
        let truncated = SAMPLE_REPORT.replace("\"seo_analysis\"", "\"seo\"");
        let result: Result<Report, _> = serde_json::from_str(&truncated);
        assert!(result.is_err());
    }
}
