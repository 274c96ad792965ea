use std::time::{Duration, Instant};

use channelscope::anim::{BarAnim, ScoreAnim};
use channelscope::chart::{self, build_market_chart, BubbleChartSpec};
use channelscope::domain::Section;
use channelscope::nav::{build_extents, Navigator};
use channelscope::report::Report;
use channelscope::theme::{ThemeStore, RECOLOR_DELAY_MS};
use channelscope::viewmodel::{populate, DashboardVm};

/// Resize events are debounced before the layout reacts.
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

/// Where the bootstrap sequence currently stands. Loading is always left,
/// whatever the fetch outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub load_state: LoadState,
    pub report: Option<Report>,
    pub dashboard: Option<DashboardVm>,
    /// Live chart registry; resize and theme handlers only touch
    /// rendering options, never the point data.
    pub charts: Vec<BubbleChartSpec>,
    pub theme: ThemeStore,
    pub nav: Navigator,
    pub health_anim: Option<ScoreAnim>,
    pub bar_anims: Vec<BarAnim>,
    pub show_help: bool,
    pub status_message: String,
    pub animation_counter: f64,
    pub last_frame: Instant,
    recolor_at: Option<Instant>,
    resize_at: Option<Instant>,
}

impl App {
    pub fn new(theme: ThemeStore) -> Self {
        Self {
            running: true,
            load_state: LoadState::Loading,
            report: None,
            dashboard: None,
            charts: Vec::new(),
            theme,
            nav: Navigator::new(Vec::new()),
            health_anim: None,
            bar_anims: Vec::new(),
            show_help: false,
            status_message: String::new(),
            animation_counter: 0.0,
            last_frame: Instant::now(),
            recolor_at: None,
            resize_at: None,
        }
    }

    /// Successful fetch: populate every section, then build the chart and
    /// the animations over the fresh view model. Replaces all previously
    /// derived state, so applying the same report twice is a no-op.
    pub fn apply_report(&mut self, report: Report) {
        let dashboard = populate(&report);
        let palette = self.theme.palette();

        self.charts = vec![build_market_chart(
            &report.competitor_benchmark.channels,
            &report.channel_overview.name,
            &palette,
        )];
        self.health_anim = Some(ScoreAnim::new(report.channel_overview.health_score));
        self.bar_anims = dashboard
            .breakdown
            .iter()
            .map(|item| BarAnim::new(item.target_width))
            .collect();
        self.nav = Navigator::new(build_extents(&dashboard));
        self.dashboard = Some(dashboard);
        self.report = Some(report);
        self.load_state = LoadState::Ready;
    }

    /// Failed fetch: the error panel replaces all main content.
    pub fn fail(&mut self, message: String) {
        self.load_state = LoadState::Failed(message);
        self.dashboard = None;
        self.charts.clear();
    }

    /// Flip the theme and schedule the chart recolor pass shortly after,
    /// mirroring how resolved styles only settle a tick after the toggle.
    pub fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(theme) => self.status_message = format!("Theme: {}", theme.as_str()),
            Err(error) => {
                self.status_message = format!("Theme not persisted: {error}");
            }
        }
        self.recolor_at = Some(Instant::now() + Duration::from_millis(RECOLOR_DELAY_MS));
    }

    pub fn on_resize(&mut self) {
        self.resize_at = Some(Instant::now() + Duration::from_millis(RESIZE_DEBOUNCE_MS));
    }

    /// Per-frame update: spinner, scroll spying, animation signals, and
    /// the deferred recolor / resize work.
    pub fn update(&mut self, viewport: u16) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Loading spinner phase (cycles between 0 and 2*PI).
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.load_state != LoadState::Ready {
            return;
        }

        self.nav.sync_from_scroll(viewport);

        for section in self.nav.visible_sections(viewport) {
            match section {
                Section::Overview => {
                    if let Some(anim) = self.health_anim.as_mut() {
                        anim.on_visible(now);
                    }
                }
                Section::Performance => {
                    for bar in &mut self.bar_anims {
                        bar.on_visible(now);
                    }
                }
                _ => {}
            }
        }

        if let Some(anim) = self.health_anim.as_mut() {
            anim.tick(now);
        }
        for bar in &mut self.bar_anims {
            bar.tick(now);
        }

        if self.recolor_at.is_some_and(|at| now >= at) {
            self.recolor_at = None;
            let palette = self.theme.palette();
            for spec in &mut self.charts {
                chart::recolor(spec, &palette);
            }
        }

        if self.resize_at.is_some_and(|at| now >= at) {
            self.resize_at = None;
            // Extents are width-independent; just keep the scroll anchored
            // to a valid section top.
            let max_top = self
                .nav
                .extents
                .last()
                .map_or(0, |extent| extent.top);
            if self.nav.scroll > max_top {
                self.nav.scroll = max_top;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{App, LoadState};
    use channelscope::report::Report;
    use channelscope::theme::ThemeStore;

    fn sample_report() -> Report {
        serde_json::from_str(include_str!("../../demos/report.json")).unwrap()
    }

    fn app() -> App {
        let dir = tempfile::tempdir().unwrap();
        App::new(ThemeStore::load(dir.path().join("theme")))
    }

    #[test]
    fn starts_loading() {
        let app = app();
        assert_eq!(app.load_state, LoadState::Loading);
        assert!(app.dashboard.is_none());
    }

    #[test]
    fn apply_report_populates_everything() {
        let mut app = app();
        app.apply_report(sample_report());

        assert_eq!(app.load_state, LoadState::Ready);
        let dashboard = app.dashboard.as_ref().unwrap();
        assert_eq!(app.bar_anims.len(), dashboard.breakdown.len());
        assert_eq!(app.charts.len(), 1);
        assert!(app.health_anim.is_some());
        assert_eq!(app.nav.extents.len(), 7);
    }

    #[test]
    fn apply_report_is_idempotent() {
        let mut app = app();
        app.apply_report(sample_report());
        let first = app.dashboard.clone();
        app.apply_report(sample_report());
        assert_eq!(app.dashboard, first);
        assert_eq!(app.charts.len(), 1);
    }

    #[test]
    fn failure_clears_dashboard_and_leaves_loading() {
        let mut app = app();
        app.fail("boom".to_string());
        assert_eq!(app.load_state, LoadState::Failed("boom".to_string()));
        assert!(app.dashboard.is_none());
        assert!(app.charts.is_empty());
    }
}
