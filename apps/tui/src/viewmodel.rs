//! The data-population pipeline.
//!
//! `populate` turns a validated [`Report`] into per-section view models
//! carrying every derived presentation fact (labels, tiers, badge text,
//! split recommendations). Rendering consumes these read-only, so the
//! derivation rules stay unit-testable without a terminal.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::{ScoreTier, SeoTier};
use crate::format::{format_growth, format_number, format_percent};
use crate::report::Report;

/// Badge shown when an insight carries no parenthesized value.
pub const BADGE_SENTINEL: &str = "N/A";

#[allow(clippy::expect_used)]
static PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([^)]+)\)").expect("parenthetical pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardVm {
    pub overview: OverviewVm,
    pub breakdown: Vec<BreakdownItemVm>,
    pub categories: Vec<CategoryVm>,
    pub competitors: Vec<CompetitorRowVm>,
    pub seo_cards: Vec<SeoCardVm>,
    pub recommendations: Vec<RecommendationGroupVm>,
    pub insights: InsightsVm,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewVm {
    pub name: String,
    pub niche: String,
    pub subscribers: String,
    pub total_views: String,
    pub total_videos: String,
    pub health_score: f64,
    pub health_label: ScoreTier,
    pub growth_badge: String,
    pub growth_positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownItemVm {
    pub name: String,
    pub score: f64,
    pub tier: ScoreTier,
    /// Raw score reused as the bar's target fill percentage.
    pub target_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryVm {
    pub name: String,
    pub avg_views: String,
    pub performance: String,
    pub style_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorRowVm {
    pub name: String,
    pub subscribers: String,
    pub avg_views: String,
    pub engagement: String,
    pub upload_frequency: String,
    pub health_score: f64,
    pub badge: ScoreTier,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoCardVm {
    pub title: String,
    pub score: f64,
    pub tier: SeoTier,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationGroupVm {
    pub title: String,
    pub items: Vec<RecommendationVm>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationVm {
    pub title: String,
    /// Parenthesized detail, shown only when the entry carried one.
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsVm {
    pub best_upload_time: BadgeInsightVm,
    pub top_content_format: BadgeInsightVm,
    pub audience_retention: String,
    pub community_health: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeInsightVm {
    pub badge: String,
    pub description: String,
}

/// Build the full dashboard view model from a report.
///
/// Idempotent: the result depends only on the report, and applying it
/// replaces all previously derived state wholesale.
pub fn populate(report: &Report) -> DashboardVm {
    DashboardVm {
        overview: overview_vm(report),
        breakdown: breakdown_vm(report),
        categories: categories_vm(report),
        competitors: competitors_vm(report),
        seo_cards: seo_cards_vm(report),
        recommendations: recommendations_vm(report),
        insights: insights_vm(report),
    }
}

fn overview_vm(report: &Report) -> OverviewVm {
    let overview = &report.channel_overview;
    let growth = report.performance_metrics.monthly_growth_rate;
    OverviewVm {
        name: overview.name.clone(),
        niche: overview.niche.clone(),
        subscribers: format_number(overview.subscribers),
        total_views: format_number(overview.total_views),
        total_videos: format_number(overview.total_videos),
        health_score: overview.health_score,
        health_label: ScoreTier::for_health(overview.health_score),
        growth_badge: format_growth(growth),
        growth_positive: growth > 0.0,
    }
}

fn breakdown_vm(report: &Report) -> Vec<BreakdownItemVm> {
    report
        .performance_metrics
        .engagement_breakdown
        .iter()
        .map(|entry| BreakdownItemVm {
            name: entry.name.clone(),
            score: entry.score,
            tier: ScoreTier::for_breakdown(entry.score),
            target_width: entry.score,
        })
        .collect()
}

fn categories_vm(report: &Report) -> Vec<CategoryVm> {
    report
        .content_analysis
        .top_categories
        .iter()
        .map(|category| CategoryVm {
            name: category.name.clone(),
            avg_views: format_number(category.avg_views.round().max(0.0) as u64),
            performance: category.performance.clone(),
            style_class: category.performance.to_lowercase(),
        })
        .collect()
}

fn competitors_vm(report: &Report) -> Vec<CompetitorRowVm> {
    let current_name = &report.channel_overview.name;
    report
        .competitor_benchmark
        .channels
        .iter()
        .map(|channel| CompetitorRowVm {
            name: channel.name.clone(),
            subscribers: format_number(channel.subscribers.round().max(0.0) as u64),
            avg_views: format_number(channel.avg_views.round().max(0.0) as u64),
            engagement: format_percent(channel.engagement_rate),
            upload_frequency: channel.upload_frequency.clone(),
            health_score: channel.health_score,
            badge: ScoreTier::for_competitor(channel.health_score),
            is_current: &channel.name == current_name,
        })
        .collect()
}

fn seo_cards_vm(report: &Report) -> Vec<SeoCardVm> {
    let seo = &report.seo_analysis;
    [
        ("Title Optimization", &seo.title_optimization),
        ("Description Quality", &seo.description_quality),
        ("Thumbnail Effectiveness", &seo.thumbnail_effectiveness),
    ]
    .into_iter()
    .map(|(title, section)| SeoCardVm {
        title: title.to_string(),
        score: section.score,
        tier: SeoTier::for_score(section.score),
        strengths: section.strengths.clone(),
        improvements: section.improvements.clone(),
    })
    .collect()
}

fn recommendations_vm(report: &Report) -> Vec<RecommendationGroupVm> {
    let recs = &report.growth_recommendations;
    [
        ("Content Strategy", &recs.content_strategy),
        ("SEO Improvements", &recs.seo_improvements),
        ("Engagement Tactics", &recs.engagement_tactics),
    ]
    .into_iter()
    .map(|(title, entries)| RecommendationGroupVm {
        title: title.to_string(),
        items: entries.iter().map(|entry| split_recommendation(entry)).collect(),
    })
    .collect()
}

fn insights_vm(report: &Report) -> InsightsVm {
    let insights = &report.engagement_insights;
    InsightsVm {
        best_upload_time: extract_badge(&insights.best_upload_time),
        top_content_format: extract_badge(&insights.top_content_format),
        audience_retention: insights.audience_retention.clone(),
        community_health: insights.community_health.clone(),
    }
}

/// Split a recommendation at the first '('. Text before is the title;
/// text from '(' onward is the parenthesized subtitle, if any.
pub fn split_recommendation(entry: &str) -> RecommendationVm {
    entry.find('(').map_or_else(
        || RecommendationVm {
            title: entry.trim().to_string(),
            subtitle: None,
        },
        |index| RecommendationVm {
            title: entry[..index].trim().to_string(),
            subtitle: Some(entry[index..].trim().to_string()),
        },
    )
}

/// Extract the first "(badge)" from an insight. Without a match the badge
/// falls back to [`BADGE_SENTINEL`] and the description stays unchanged.
pub fn extract_badge(text: &str) -> BadgeInsightVm {
    PAREN.captures(text).map_or_else(
        || BadgeInsightVm {
            badge: BADGE_SENTINEL.to_string(),
            description: text.to_string(),
        },
        |captures| {
            let full = captures.get(0).map_or(0..0, |m| m.range());
            let mut description = String::with_capacity(text.len());
            description.push_str(&text[..full.start]);
            description.push_str(&text[full.end..]);
            BadgeInsightVm {
                badge: captures[1].to_string(),
                description: description.trim().to_string(),
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::{extract_badge, populate, split_recommendation, BADGE_SENTINEL};
    use crate::domain::{ScoreTier, SeoTier};
    use crate::report::fixtures::sample_report;

    #[test]
    fn recommendation_split_with_detail() {
        let vm = split_recommendation("Post daily (consistency matters)");
        assert_eq!(vm.title, "Post daily");
        assert_eq!(vm.subtitle.as_deref(), Some("(consistency matters)"));
    }

    #[test]
    fn recommendation_split_without_detail() {
        let vm = split_recommendation("Engage more");
        assert_eq!(vm.title, "Engage more");
        assert_eq!(vm.subtitle, None);
    }

    #[test]
    fn badge_extraction_with_match() {
        let vm = extract_badge("Best at night (8-10pm)");
        assert_eq!(vm.badge, "8-10pm");
        assert_eq!(vm.description, "Best at night");
    }

    #[test]
    fn badge_extraction_without_match() {
        let vm = extract_badge("Steady growth");
        assert_eq!(vm.badge, BADGE_SENTINEL);
        assert_eq!(vm.description, "Steady growth");
    }

    #[test]
    fn badge_extraction_uses_first_match_only() {
        let vm = extract_badge("Peaks (8pm) and again (11pm)");
        assert_eq!(vm.badge, "8pm");
        assert_eq!(vm.description, "Peaks  and again (11pm)");
    }

    #[test]
    fn overview_derivations() {
        let vm = populate(&sample_report());
        assert_eq!(vm.overview.subscribers, "60.8K");
        assert_eq!(vm.overview.total_views, "1.9M");
        assert_eq!(vm.overview.health_label, ScoreTier::Excellent);
        assert_eq!(vm.overview.growth_badge, "+4.2%");
        assert!(vm.overview.growth_positive);
    }

    #[test]
    fn breakdown_tiers_and_widths() {
        let vm = populate(&sample_report());
        assert_eq!(vm.breakdown[0].tier, ScoreTier::Excellent);
        assert_eq!(vm.breakdown[1].tier, ScoreTier::Good);
        assert_eq!(vm.breakdown[2].tier, ScoreTier::Average);
        assert!((vm.breakdown[0].target_width - 88.0).abs() < f64::EPSILON);
    }

    #[test]
    fn category_class_is_lowercased_label() {
        let vm = populate(&sample_report());
        assert_eq!(vm.categories[0].style_class, "excellent");
        assert_eq!(vm.categories[0].performance, "Excellent");
    }

    #[test]
    fn exactly_one_competitor_row_is_current() {
        let vm = populate(&sample_report());
        let current: Vec<_> = vm.competitors.iter().filter(|row| row.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].name, "Jhoom Baba Gyaan");
        assert_eq!(current[0].badge, ScoreTier::Excellent);
    }

    #[test]
    fn seo_cards_follow_ordered_rule() {
        let vm = populate(&sample_report());
        assert_eq!(vm.seo_cards[0].tier, SeoTier::Good); // 82
        assert_eq!(vm.seo_cards[1].tier, SeoTier::Warning); // 48
        assert_eq!(vm.seo_cards[2].tier, SeoTier::Average); // 66
    }

    #[test]
    fn populate_is_idempotent() {
        let report = sample_report();
        assert_eq!(populate(&report), populate(&report));
    }
}
