//! View controller: owns which section is active plus the secondary UI
//! state (theme, mobile menu, clock, project carousel).
//!
//! All time-dependent behaviour takes an explicit `Instant` so the shell
//! drives it from the frame loop and tests drive it deterministically.
//!
//! - `section`:  the fixed section order
//! - `carousel`: two-up project paging
//! - `timer`:    cancellable one-shot deadlines
//! - `clock`:    one-second wall clock

pub mod carousel;
pub mod clock;
pub mod section;
pub mod timer;

use std::time::{Duration, Instant};

use crate::content;
use carousel::{Carousel, Direction};
use clock::Clock;
use section::Section;
use timer::Deadline;

/// Duration of the outgoing section's exit animation. Scroll is reset once
/// it has finished.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(400);

/// The complete in-memory UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_section: Section,
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    pub carousel: Carousel,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: Section::Introduction,
            dark_mode: true,
            mobile_menu_open: false,
            carousel: Carousel::default(),
        }
    }
}

/// Side effects due on this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewEffects {
    /// Scroll the content area and window back to the top.
    pub scroll_reset: bool,
    /// The clock text changed.
    pub clock_ticked: bool,
}

pub struct ViewController {
    state: ViewState,
    clock: Clock,
    scroll_reset: Deadline,
    entered_at: Option<Instant>,
    applied_theme: Option<bool>,
    transitions: u64,
}

impl ViewController {
    pub fn new(now: Instant) -> Self {
        Self::with_clock(Clock::new(now))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            state: ViewState::default(),
            clock,
            scroll_reset: Deadline::default(),
            entered_at: None,
            applied_theme: None,
            transitions: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn active_section(&self) -> Section {
        self.state.active_section
    }

    pub fn clock_text(&self) -> &str {
        self.clock.text()
    }

    pub fn clock_short_text(&self) -> &str {
        self.clock.short_text()
    }

    /// Number of section transitions so far.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    // ── Section state machine ────────────────────────────────────────────

    /// Switch to `section`. Never rejected; re-selecting the active section
    /// only closes the mobile menu.
    pub fn navigate_to(&mut self, section: Section, now: Instant) {
        if section == self.state.active_section {
            self.state.mobile_menu_open = false;
            return;
        }
        log::debug!("section {} -> {}", self.state.active_section, section);
        self.state.active_section = section;
        self.state.mobile_menu_open = false;
        self.scroll_reset.schedule(now, EXIT_ANIMATION);
        self.entered_at = Some(now);
        self.transitions += 1;
    }

    /// Fade-in progress of the current section in `[0, 1]`.
    pub fn transition_progress(&self, now: Instant) -> f32 {
        match self.entered_at {
            Some(at) => {
                let elapsed = now.saturating_duration_since(at).as_secs_f32();
                (elapsed / EXIT_ANIMATION.as_secs_f32()).min(1.0)
            }
            None => 1.0,
        }
    }

    /// Step back one section. Returns `false` on the first section.
    pub fn navigate_prev(&mut self, now: Instant) -> bool {
        match self.state.active_section.prev() {
            Some(prev) => {
                self.navigate_to(prev, now);
                true
            }
            None => false,
        }
    }

    /// Step forward one section. Returns `false` on the last section.
    pub fn navigate_next(&mut self, now: Instant) -> bool {
        match self.state.active_section.next() {
            Some(next) => {
                self.navigate_to(next, now);
                true
            }
            None => false,
        }
    }

    // ── Theme & mobile menu ──────────────────────────────────────────────

    pub fn toggle_theme(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
        log::debug!("dark mode: {}", self.state.dark_mode);
    }

    /// The theme to apply to the window, if it differs from what was last
    /// applied. The first call always reports the initial theme.
    pub fn take_theme_change(&mut self) -> Option<bool> {
        let dark = self.state.dark_mode;
        if self.applied_theme == Some(dark) {
            return None;
        }
        self.applied_theme = Some(dark);
        Some(dark)
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.state.mobile_menu_open = false;
    }

    // ── Projects carousel ────────────────────────────────────────────────

    pub fn advance_projects(&mut self, direction: Direction) -> bool {
        let total = content::list_projects().len();
        self.state.carousel.advance(direction, total)
    }

    /// Projects currently on screen.
    pub fn visible_projects(&self) -> &'static [content::Project] {
        let projects = content::list_projects();
        &projects[self.state.carousel.visible_range(projects.len())]
    }

    // ── Timers ───────────────────────────────────────────────────────────

    /// Fire whatever timers are due.
    pub fn poll(&mut self, now: Instant) -> ViewEffects {
        ViewEffects {
            scroll_reset: self.scroll_reset.fire_if_due(now),
            clock_ticked: self.clock.tick(now),
        }
    }

    /// How long the shell may sleep before the next timer is due.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        match (self.scroll_reset.remaining(now), self.clock.next_tick_in(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancel every timer. Called when the window closes.
    pub fn shutdown(&mut self) {
        self.scroll_reset.cancel();
        self.clock.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(t0: Instant) -> ViewController {
        ViewController::with_clock(Clock::with_source(t0, || "00:00:00".to_string()))
    }

    #[test]
    fn defaults() {
        let vc = controller(Instant::now());
        assert_eq!(vc.active_section(), Section::Introduction);
        assert!(vc.state().dark_mode);
        assert!(!vc.state().mobile_menu_open);
        assert_eq!(vc.state().carousel.index(), 0);
        assert_eq!(vc.clock_text(), "00:00:00");
        assert_eq!(vc.clock_short_text(), "00:00");
    }

    #[test]
    fn every_transition_lands_on_its_target() {
        let t0 = Instant::now();
        let mut vc = controller(t0);
        let targets = [
            Section::Contact,
            Section::Projects,
            Section::Projects,
            Section::Introduction,
            Section::Experience,
            Section::AboutMe,
            Section::SkillsAndTools,
        ];
        let mut changes = 0;
        for target in targets {
            if target != vc.active_section() {
                changes += 1;
            }
            vc.navigate_to(target, t0);
            assert_eq!(vc.active_section(), target);
            assert_eq!(vc.transitions(), changes);
        }
    }

    #[test]
    fn prev_next_walk() {
        let t0 = Instant::now();
        let mut vc = controller(t0);
        assert!(!vc.navigate_prev(t0));
        assert_eq!(vc.active_section(), Section::Introduction);
        for expected in &Section::ALL[1..] {
            assert!(vc.navigate_next(t0));
            assert_eq!(vc.active_section(), *expected);
        }
        assert!(!vc.navigate_next(t0));
        assert_eq!(vc.active_section(), Section::Contact);
        assert!(vc.navigate_prev(t0));
        assert_eq!(vc.active_section(), Section::Experience);
    }

    #[test]
    fn transition_closes_mobile_menu() {
        let t0 = Instant::now();
        let mut vc = controller(t0);
        vc.toggle_mobile_menu();
        assert!(vc.state().mobile_menu_open);
        vc.navigate_to(Section::AboutMe, t0);
        assert!(!vc.state().mobile_menu_open);
    }

    #[test]
    fn scroll_reset_after_exit_animation() {
        let t0 = Instant::now();
        let mut vc = controller(t0);
        vc.navigate_to(Section::Projects, t0);
        assert!(!vc.poll(t0 + Duration::from_millis(100)).scroll_reset);
        assert!(vc.poll(t0 + EXIT_ANIMATION).scroll_reset);
        assert!(!vc.poll(t0 + Duration::from_secs(2)).scroll_reset);
    }

    #[test]
    fn superseded_scroll_reset_is_cancelled() {
        let t0 = Instant::now();
        let mut vc = controller(t0);
        vc.navigate_to(Section::Projects, t0);
        let t1 = t0 + Duration::from_millis(300);
        vc.navigate_to(Section::Experience, t1);
        // the first transition's deadline would have been t0 + 400ms
        assert!(!vc.poll(t0 + Duration::from_millis(450)).scroll_reset);
        assert!(vc.poll(t1 + EXIT_ANIMATION).scroll_reset);
    }

    #[test]
    fn reselecting_active_section_only_closes_menu() {
        let t0 = Instant::now();
        let mut vc = controller(t0);
        vc.navigate_to(Section::Projects, t0);
        let t1 = t0 + Duration::from_secs(1);
        assert!(vc.poll(t1).scroll_reset);

        vc.toggle_mobile_menu();
        vc.navigate_to(Section::Projects, t1);
        assert!(!vc.state().mobile_menu_open);
        assert_eq!(vc.transitions(), 1);
        assert_eq!(vc.transition_progress(t1), 1.0);
        assert!(!vc.poll(t1 + EXIT_ANIMATION).scroll_reset);
    }

    #[test]
    fn transition_progress_ramps() {
        let t0 = Instant::now();
        let mut vc = controller(t0);
        assert_eq!(vc.transition_progress(t0), 1.0);
        vc.navigate_to(Section::SkillsAndTools, t0);
        assert_eq!(vc.transition_progress(t0), 0.0);
        let half = vc.transition_progress(t0 + Duration::from_millis(200));
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(vc.transition_progress(t0 + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn theme_change_reported_once() {
        let mut vc = controller(Instant::now());
        assert_eq!(vc.take_theme_change(), Some(true));
        assert_eq!(vc.take_theme_change(), None);
        vc.toggle_theme();
        assert_eq!(vc.take_theme_change(), Some(false));
        assert_eq!(vc.take_theme_change(), None);
        vc.toggle_theme();
        vc.toggle_theme();
        assert_eq!(vc.take_theme_change(), None);
    }

    #[test]
    fn projects_scenario() {
        let t0 = Instant::now();
        let mut vc = controller(t0);
        vc.navigate_to(Section::Projects, t0);
        let visible: Vec<u32> = vc.visible_projects().iter().map(|p| p.id).collect();
        assert_eq!(visible, vec![1, 2]);
        assert!(!vc.state().carousel.can_go_back());
        let total = content::list_projects().len();
        assert_eq!(vc.state().carousel.can_go_forward(total), total > 2);
        let moved = vc.advance_projects(Direction::Forward);
        assert_eq!(moved, total > 2);
        assert_eq!(vc.state().carousel.index(), if total > 2 { 1 } else { 0 });
    }

    #[test]
    fn shutdown_cancels_timers() {
        let t0 = Instant::now();
        let mut vc = controller(t0);
        vc.navigate_to(Section::Contact, t0);
        assert!(vc.next_wakeup(t0).is_some());
        vc.shutdown();
        assert_eq!(vc.next_wakeup(t0), None);
        let effects = vc.poll(t0 + Duration::from_secs(10));
        assert_eq!(effects, ViewEffects::default());
    }

    #[test]
    fn next_wakeup_prefers_earliest() {
        let t0 = Instant::now();
        let mut vc = controller(t0);
        vc.navigate_to(Section::AboutMe, t0);
        assert_eq!(vc.next_wakeup(t0), Some(EXIT_ANIMATION));
    }
}
