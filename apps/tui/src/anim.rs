//! Visibility-triggered one-shot animations.
//!
//! Each animated element owns an explicit state machine
//! (pending → animating → done) advanced by two external signals: a
//! visibility notification and the frame tick. Once past pending, further
//! visibility signals are ignored, which gives the one-shot behavior.

use std::time::{Duration, Instant};

/// Delay between a bar becoming visible and its fill starting.
pub const BAR_START_DELAY: Duration = Duration::from_millis(300);
/// Time a bar takes to sweep from zero to its target width.
pub const BAR_FILL_DURATION: Duration = Duration::from_millis(700);
/// Score counters advance one increment per tick at ~60fps.
pub const SCORE_TICK: Duration = Duration::from_millis(16);
/// Number of increments from zero to the target score.
pub const SCORE_STEPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimPhase {
    Pending,
    Animating,
    Done,
}

/// Progress-bar fill: zero width until visible, then a delayed sweep to
/// the target percentage.
#[derive(Debug, Clone)]
pub struct BarAnim {
    target: f64,
    phase: AnimPhase,
    start_at: Option<Instant>,
    current: f64,
}

impl BarAnim {
    pub fn new(target: f64) -> Self {
        Self {
            target: target.clamp(0.0, 100.0),
            phase: AnimPhase::Pending,
            start_at: None,
            current: 0.0,
        }
    }

    pub const fn phase(&self) -> AnimPhase {
        self.phase
    }

    /// Current fill percentage.
    pub const fn current(&self) -> f64 {
        self.current
    }

    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Visibility signal. Only the first one schedules the fill.
    pub fn on_visible(&mut self, now: Instant) {
        if self.phase == AnimPhase::Pending {
            self.start_at = Some(now + BAR_START_DELAY);
            self.phase = AnimPhase::Animating;
        }
    }

    /// Frame tick.
    pub fn tick(&mut self, now: Instant) {
        if self.phase != AnimPhase::Animating {
            return;
        }
        let Some(start) = self.start_at else {
            return;
        };
        if now < start {
            return;
        }
        let progress =
            now.duration_since(start).as_secs_f64() / BAR_FILL_DURATION.as_secs_f64();
        if progress >= 1.0 {
            self.current = self.target;
            self.phase = AnimPhase::Done;
        } else {
            self.current = self.target * progress;
        }
    }
}

/// Numeric score counter: 0 to target in [`SCORE_STEPS`] fixed increments,
/// one per [`SCORE_TICK`], clamping at the target.
#[derive(Debug, Clone)]
pub struct ScoreAnim {
    target: f64,
    increment: f64,
    phase: AnimPhase,
    last_tick: Option<Instant>,
    current: f64,
}

impl ScoreAnim {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            increment: target / f64::from(SCORE_STEPS),
            phase: AnimPhase::Pending,
            last_tick: None,
            current: 0.0,
        }
    }

    pub const fn phase(&self) -> AnimPhase {
        self.phase
    }

    pub const fn current(&self) -> f64 {
        self.current
    }

    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Numeric readout, one decimal.
    pub fn display(&self) -> String {
        format!("{:.1}", self.current)
    }

    pub fn on_visible(&mut self, now: Instant) {
        if self.phase == AnimPhase::Pending {
            self.phase = AnimPhase::Animating;
            self.last_tick = Some(now);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.phase != AnimPhase::Animating {
            return;
        }
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return;
        };
        let elapsed = now.saturating_duration_since(last);
        let steps = (elapsed.as_millis() / SCORE_TICK.as_millis()) as u32;
        if steps == 0 {
            return;
        }
        self.current += self.increment * f64::from(steps);
        self.last_tick = Some(last + SCORE_TICK * steps);
        if self.current >= self.target {
            self.current = self.target;
            self.phase = AnimPhase::Done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AnimPhase, BarAnim, ScoreAnim, BAR_FILL_DURATION, BAR_START_DELAY, SCORE_STEPS,
        SCORE_TICK,
    };
    use std::time::{Duration, Instant};

    #[test]
    fn bar_stays_at_zero_until_visible() {
        let mut bar = BarAnim::new(88.0);
        let now = Instant::now();
        bar.tick(now + Duration::from_secs(5));
        assert_eq!(bar.phase(), AnimPhase::Pending);
        assert!(bar.current().abs() < f64::EPSILON);
    }

    #[test]
    fn bar_waits_for_start_delay() {
        let mut bar = BarAnim::new(88.0);
        let now = Instant::now();
        bar.on_visible(now);
        bar.tick(now + BAR_START_DELAY / 2);
        assert!(bar.current().abs() < f64::EPSILON);
        assert_eq!(bar.phase(), AnimPhase::Animating);
    }

    #[test]
    fn bar_reaches_target_and_finishes() {
        let mut bar = BarAnim::new(88.0);
        let now = Instant::now();
        bar.on_visible(now);
        bar.tick(now + BAR_START_DELAY + BAR_FILL_DURATION / 2);
        assert!(bar.current() > 0.0 && bar.current() < 88.0);

        bar.tick(now + BAR_START_DELAY + BAR_FILL_DURATION);
        assert!((bar.current() - 88.0).abs() < f64::EPSILON);
        assert_eq!(bar.phase(), AnimPhase::Done);
    }

    #[test]
    fn bar_visibility_is_one_shot() {
        let mut bar = BarAnim::new(50.0);
        let now = Instant::now();
        bar.on_visible(now);
        bar.tick(now + BAR_START_DELAY + BAR_FILL_DURATION);
        assert_eq!(bar.phase(), AnimPhase::Done);

        // A later visibility signal must not restart the sweep.
        bar.on_visible(now + Duration::from_secs(10));
        bar.tick(now + Duration::from_secs(11));
        assert_eq!(bar.phase(), AnimPhase::Done);
        assert!((bar.current() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bar_target_is_clamped_to_percent_range() {
        assert!((BarAnim::new(150.0).target() - 100.0).abs() < f64::EPSILON);
        assert!(BarAnim::new(-5.0).target().abs() < f64::EPSILON);
    }

    #[test]
    fn score_advances_in_fixed_increments() {
        let mut score = ScoreAnim::new(78.5);
        let now = Instant::now();
        score.on_visible(now);

        score.tick(now + SCORE_TICK);
        let expected = 78.5 / f64::from(SCORE_STEPS);
        assert!((score.current() - expected).abs() < 1e-9);
        assert_eq!(score.display(), format!("{expected:.1}"));
    }

    #[test]
    fn score_clamps_at_target_and_finishes() {
        let mut score = ScoreAnim::new(78.5);
        let now = Instant::now();
        score.on_visible(now);
        score.tick(now + SCORE_TICK * (SCORE_STEPS + 10));
        assert!((score.current() - 78.5).abs() < f64::EPSILON);
        assert_eq!(score.phase(), AnimPhase::Done);
        assert_eq!(score.display(), "78.5");
    }

    #[test]
    fn score_completes_in_sixty_steps() {
        let mut score = ScoreAnim::new(60.0);
        let now = Instant::now();
        score.on_visible(now);
        for step in 1..=SCORE_STEPS {
            score.tick(now + SCORE_TICK * step);
        }
        assert!((score.current() - 60.0).abs() < 1e-9);
        assert_eq!(score.phase(), AnimPhase::Done);
    }

    #[test]
    fn score_zero_target_finishes_immediately() {
        let mut score = ScoreAnim::new(0.0);
        let now = Instant::now();
        score.on_visible(now);
        score.tick(now + SCORE_TICK);
        assert_eq!(score.phase(), AnimPhase::Done);
        assert_eq!(score.display(), "0.0");
    }
}
