//! Section navigation and scroll spying.
//!
//! The dashboard is a vertical strip of sections with known row extents.
//! One section is "active" at a time: explicit selection sets it
//! immediately and jumps the scroll to the section top; otherwise the
//! active section is derived from the scroll position against a viewport
//! band that skips a fixed header at the top and excludes most of the
//! bottom, so the section near the top of the screen wins.

use crate::domain::Section;
use crate::viewmodel::DashboardVm;

/// Rows reserved for the sticky header when spying.
pub const SPY_TOP_OFFSET: u16 = 2;
/// Share of the viewport excluded at the bottom of the spy band.
pub const SPY_BOTTOM_EXCLUSION: f64 = 0.6;
/// A section counts as visible for animations once at least half of it
/// (capped by the viewport) is on screen.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

impl SectionExtent {
    pub const fn bottom(self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Row extents for every section, in document order, derived from the
/// populated view model.
pub fn build_extents(vm: &DashboardVm) -> Vec<SectionExtent> {
    let heights = [
        (Section::Overview, 12),
        (Section::Performance, 3 + 2 * vm.breakdown.len()),
        (Section::Content, 3 + 2 * vm.categories.len()),
        (Section::Competitors, 20 + vm.competitors.len()),
        (
            Section::Seo,
            2 + vm
                .seo_cards
                .iter()
                .map(|card| 3 + card.strengths.len() + card.improvements.len())
                .sum::<usize>(),
        ),
        (
            Section::Recommendations,
            2 + vm
                .recommendations
                .iter()
                .map(|group| {
                    2 + group
                        .items
                        .iter()
                        .map(|item| 1 + usize::from(item.subtitle.is_some()))
                        .sum::<usize>()
                })
                .sum::<usize>(),
        ),
        (Section::Insights, 8),
    ];

    let mut top = 0_u16;
    heights
        .into_iter()
        .map(|(section, height)| {
            let height = u16::try_from(height).unwrap_or(u16::MAX);
            let extent = SectionExtent {
                section,
                top,
                height,
            };
            top = top.saturating_add(height);
            extent
        })
        .collect()
}

/// Scroll-spy: the active section for a given scroll position.
///
/// A section qualifies when it intersects the band
/// `[scroll + SPY_TOP_OFFSET, scroll + viewport * (1 - SPY_BOTTOM_EXCLUSION))`.
/// When several qualify the first one in document order wins. The observed
/// behavior left the tie-break unspecified (last observer callback won,
/// order not guaranteed); topmost-wins is the deterministic choice that
/// keeps explicit selection stable under the next spy pass.
pub fn active_from_scroll(
    extents: &[SectionExtent],
    scroll: u16,
    viewport: u16,
) -> Option<Section> {
    let band_top = u32::from(scroll) + u32::from(SPY_TOP_OFFSET);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let band_height = (f64::from(viewport) * (1.0 - SPY_BOTTOM_EXCLUSION)).round() as u32;
    let band_bottom = u32::from(scroll) + band_height.max(u32::from(SPY_TOP_OFFSET) + 1);

    extents
        .iter()
        .find(|extent| {
            let top = u32::from(extent.top);
            let bottom = u32::from(extent.bottom());
            top < band_bottom && bottom > band_top
        })
        .map(|extent| extent.section)
}

/// Fraction of a section currently on screen, relative to the smaller of
/// its height and the viewport.
pub fn visible_fraction(extent: SectionExtent, scroll: u16, viewport: u16) -> f64 {
    let view_top = u32::from(scroll);
    let view_bottom = view_top + u32::from(viewport);
    let top = u32::from(extent.top);
    let bottom = u32::from(extent.bottom());

    let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
    let reference = u32::from(extent.height).min(u32::from(viewport)).max(1);
    f64::from(overlap) / f64::from(reference)
}

#[derive(Debug)]
pub struct Navigator {
    pub extents: Vec<SectionExtent>,
    pub active: Section,
    pub scroll: u16,
}

impl Navigator {
    pub fn new(extents: Vec<SectionExtent>) -> Self {
        Self {
            extents,
            active: Section::Overview,
            scroll: 0,
        }
    }

    /// Explicit selection: immediately active, scroll jumps to the
    /// section top.
    pub fn select(&mut self, section: Section) {
        if let Some(extent) = self
            .extents
            .iter()
            .find(|extent| extent.section == section)
        {
            self.active = section;
            self.scroll = extent.top;
        }
    }

    pub fn select_index(&mut self, index: usize) {
        if let Some(section) = Section::from_index(index) {
            self.select(section);
        }
    }

    pub fn next_section(&mut self) {
        let index = self.active.index();
        if index + 1 < Section::ALL.len() {
            self.select_index(index + 1);
        }
    }

    pub fn prev_section(&mut self) {
        let index = self.active.index();
        if index > 0 {
            self.select_index(index - 1);
        }
    }

    /// Scroll-driven update of the active section.
    pub fn sync_from_scroll(&mut self, viewport: u16) {
        if let Some(section) = active_from_scroll(&self.extents, self.scroll, viewport) {
            self.active = section;
        }
    }

    /// Sections visible enough to receive the animation visibility signal.
    pub fn visible_sections(&self, viewport: u16) -> Vec<Section> {
        self.extents
            .iter()
            .filter(|extent| {
                visible_fraction(**extent, self.scroll, viewport) >= VISIBILITY_THRESHOLD
            })
            .map(|extent| extent.section)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        active_from_scroll, build_extents, visible_fraction, Navigator, SectionExtent,
    };
    use crate::domain::Section;
    use crate::report::fixtures::sample_report;
    use crate::viewmodel::populate;

    fn extents() -> Vec<SectionExtent> {
        build_extents(&populate(&sample_report()))
    }

    #[test]
    fn extents_are_contiguous_and_ordered() {
        let extents = extents();
        assert_eq!(extents.len(), Section::ALL.len());
        for pair in extents.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(extents[0].top, 0);
    }

    #[test]
    fn top_of_page_activates_overview() {
        assert_eq!(
            active_from_scroll(&extents(), 0, 40),
            Some(Section::Overview)
        );
    }

    #[test]
    fn scrolled_to_section_top_activates_it() {
        let extents = extents();
        for extent in &extents {
            // At a section's own top the previous section has left the
            // band, so the section itself is active.
            assert_eq!(
                active_from_scroll(&extents, extent.top, 40),
                Some(extent.section)
            );
        }
        let seo = extents[4];
        assert_eq!(seo.section, Section::Seo);
        assert_eq!(active_from_scroll(&extents, seo.top, 10), Some(Section::Seo));
    }

    #[test]
    fn first_intersecting_section_wins() {
        // Two short sections inside the band: the topmost one is active.
        let extents = vec![
            SectionExtent {
                section: Section::Overview,
                top: 0,
                height: 4,
            },
            SectionExtent {
                section: Section::Performance,
                top: 4,
                height: 4,
            },
        ];
        assert_eq!(
            active_from_scroll(&extents, 0, 40),
            Some(Section::Overview)
        );
    }

    #[test]
    fn spy_keeps_explicit_selection_stable() {
        let mut nav = Navigator::new(extents());
        nav.select(Section::Competitors);
        nav.sync_from_scroll(40);
        assert_eq!(nav.active, Section::Competitors);
    }

    #[test]
    fn select_is_immediate_and_jumps_scroll() {
        let mut nav = Navigator::new(extents());
        nav.select(Section::Recommendations);
        assert_eq!(nav.active, Section::Recommendations);
        let top = nav
            .extents
            .iter()
            .find(|extent| extent.section == Section::Recommendations)
            .map(|extent| extent.top);
        assert_eq!(Some(nav.scroll), top);
    }

    #[test]
    fn visible_fraction_bounds() {
        let extent = SectionExtent {
            section: Section::Overview,
            top: 0,
            height: 10,
        };
        assert!((visible_fraction(extent, 0, 40) - 1.0).abs() < f64::EPSILON);
        assert!((visible_fraction(extent, 5, 40) - 0.5).abs() < f64::EPSILON);
        assert!(visible_fraction(extent, 10, 40).abs() < f64::EPSILON);
    }

    #[test]
    fn visible_sections_respect_threshold() {
        let mut nav = Navigator::new(extents());
        nav.scroll = 0;
        let visible = nav.visible_sections(14);
        assert!(visible.contains(&Section::Overview));
        assert!(!visible.contains(&Section::Insights));
    }
}
