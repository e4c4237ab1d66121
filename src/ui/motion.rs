// Panel Motion
// Animated presentation state that trails the selection: underline, panel height, content entry
//
// Nothing here is authoritative. Every target is derived from the TabPanel and the
// measured tab strip when a frame is drawn, so the selection logic works the same
// whether or not anything animates.

use std::time::Duration;

use tui_components::{AnimatedValue, Motion, UnderlinePosition};

use crate::core::app_config::AppConfig;
use crate::core::TabName;

/// Exit progress at which the outgoing view is swapped out
const EXIT_DONE: f32 = 0.95;

#[derive(Debug, Clone)]
pub struct PanelMotion {
    underline_offset: AnimatedValue,
    underline_width: AnimatedValue,
    height: AnimatedValue,
    /// 1.0 = view fully hidden one row down, 0.0 = view in place
    content: AnimatedValue,
    /// View currently on screen; trails the selection while an exit plays
    shown_view: Option<TabName>,
}

impl PanelMotion {
    pub fn new(config: &AppConfig) -> Self {
        let motion = &config.motion;
        let (underline, resize, content) = if config.ui.animations {
            (
                Motion::spring(motion.underline),
                Motion::delayed(motion.resize, motion.resize_delay),
                Motion::spring(motion.content),
            )
        } else {
            (Motion::Instant, Motion::Instant, Motion::Instant)
        };

        Self {
            underline_offset: AnimatedValue::new(underline),
            underline_width: AnimatedValue::new(underline),
            height: AnimatedValue::new(resize),
            content: AnimatedValue::new(content),
            shown_view: None,
        }
    }

    /// Point the panel height at `rows`
    pub fn set_height_target(&mut self, rows: u16) {
        self.height.set_target(rows as f32);
    }

    /// Current panel height in rows
    pub fn height(&self) -> u16 {
        self.height.cells()
    }

    pub fn set_underline_target(&mut self, target: UnderlinePosition) {
        self.underline_offset.set_target(target.offset as f32);
        self.underline_width.set_target(target.width as f32);
    }

    pub fn underline_target(&self) -> UnderlinePosition {
        UnderlinePosition {
            offset: self.underline_offset.target().round() as u16,
            width: self.underline_width.target().round() as u16,
        }
    }

    /// Where the underline is drawn this frame
    pub fn underline(&self) -> UnderlinePosition {
        UnderlinePosition {
            offset: self.underline_offset.cells(),
            width: self.underline_width.cells(),
        }
    }

    /// Follow the selected view and return the one to draw this frame
    ///
    /// A change of view first plays the exit of the view on screen (fade out,
    /// drop one row). Only once that finishes is the new view shown and its
    /// entry started. Selecting the shown view again mid-exit brings it back.
    pub fn show_view(&mut self, view: TabName) -> TabName {
        let shown = match self.shown_view {
            Some(shown) => shown,
            None => return self.enter(view),
        };

        if shown == view {
            self.content.set_target(0.0);
            return shown;
        }

        self.content.set_target(1.0);
        if self.content.is_settled() || self.content.value() >= EXIT_DONE {
            return self.enter(view);
        }
        shown
    }

    fn enter(&mut self, view: TabName) -> TabName {
        self.shown_view = Some(view);
        self.content.animate_from(1.0, 0.0);
        view
    }

    /// Content opacity in [0, 1]
    pub fn content_opacity(&self) -> f32 {
        (1.0 - self.content.value()).clamp(0.0, 1.0)
    }

    /// Rows the content is pushed down while entering
    pub fn content_offset(&self) -> u16 {
        self.content.value().clamp(0.0, 1.0).round() as u16
    }

    /// Advance every animation; returns true while anything is still moving
    pub fn tick(&mut self, dt: Duration) -> bool {
        // Non-short-circuiting so every value advances
        self.underline_offset.tick(dt)
            | self.underline_width.tick(dt)
            | self.height.tick(dt)
            | self.content.tick(dt)
    }

    pub fn is_idle(&self) -> bool {
        self.underline_offset.is_settled()
            && self.underline_width.is_settled()
            && self.height.is_settled()
            && self.content.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(motion: &mut PanelMotion) {
        for _ in 0..300 {
            motion.tick(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_first_targets_snap() {
        let mut motion = PanelMotion::new(&AppConfig::default());
        motion.set_height_target(14);
        motion.set_underline_target(UnderlinePosition { offset: 2, width: 15 });

        assert_eq!(motion.height(), 14);
        assert_eq!(motion.underline(), UnderlinePosition { offset: 2, width: 15 });
    }

    #[test]
    fn test_underline_slides_to_target() {
        let mut config = AppConfig::default();
        config.ui.animations = true;
        let mut motion = PanelMotion::new(&config);
        motion.set_underline_target(UnderlinePosition { offset: 2, width: 15 });
        motion.set_underline_target(UnderlinePosition { offset: 37, width: 16 });

        motion.tick(Duration::from_millis(16));
        let mid = motion.underline();
        assert!(mid.offset > 2 && mid.offset < 37);
        assert_eq!(motion.underline_target(), UnderlinePosition { offset: 37, width: 16 });

        settle(&mut motion);
        assert_eq!(motion.underline(), UnderlinePosition { offset: 37, width: 16 });
        assert!(motion.is_idle());
    }

    #[test]
    fn test_height_waits_for_delay() {
        let mut config = AppConfig::default();
        config.ui.animations = true;
        config.motion.resize_delay = Duration::from_millis(200);
        let mut motion = PanelMotion::new(&config);
        motion.set_height_target(14);
        motion.set_height_target(9);

        motion.tick(Duration::from_millis(100));
        assert_eq!(motion.height(), 14);

        settle(&mut motion);
        assert_eq!(motion.height(), 9);
    }

    #[test]
    fn test_new_view_fades_in() {
        let mut config = AppConfig::default();
        config.ui.animations = true;
        let mut motion = PanelMotion::new(&config);

        motion.show_view(TabName::Account);
        assert_eq!(motion.content_opacity(), 0.0);
        assert_eq!(motion.content_offset(), 1);

        settle(&mut motion);
        assert_eq!(motion.content_opacity(), 1.0);
        assert_eq!(motion.content_offset(), 0);

        // Same view again does not restart the entry
        motion.show_view(TabName::Account);
        assert_eq!(motion.content_opacity(), 1.0);
    }

    #[test]
    fn test_outgoing_view_exits_before_switch() {
        let mut config = AppConfig::default();
        config.ui.animations = true;
        let mut motion = PanelMotion::new(&config);
        motion.show_view(TabName::Account);
        settle(&mut motion);

        // Old view keeps drawing while it fades out
        assert_eq!(motion.show_view(TabName::Password), TabName::Account);
        motion.tick(Duration::from_millis(16));
        assert_eq!(motion.show_view(TabName::Password), TabName::Account);
        assert!(motion.content_opacity() < 1.0);

        let mut shown = TabName::Account;
        for _ in 0..120 {
            motion.tick(Duration::from_millis(16));
            shown = motion.show_view(TabName::Password);
            if shown == TabName::Password {
                break;
            }
        }
        assert_eq!(shown, TabName::Password);
        // Entry starts from hidden
        assert!(motion.content_opacity() < 0.1);

        settle(&mut motion);
        assert_eq!(motion.show_view(TabName::Password), TabName::Password);
        assert_eq!(motion.content_opacity(), 1.0);
    }

    #[test]
    fn test_reselect_during_exit_brings_view_back() {
        let mut config = AppConfig::default();
        config.ui.animations = true;
        let mut motion = PanelMotion::new(&config);
        motion.show_view(TabName::Account);
        settle(&mut motion);

        motion.show_view(TabName::Settings);
        motion.tick(Duration::from_millis(16));
        assert_eq!(motion.show_view(TabName::Account), TabName::Account);

        settle(&mut motion);
        assert_eq!(motion.content_opacity(), 1.0);
        assert_eq!(motion.show_view(TabName::Account), TabName::Account);
    }

    #[test]
    fn test_disabled_animations_snap() {
        let config = AppConfig::default().without_animations();
        let mut motion = PanelMotion::new(&config);

        motion.set_height_target(14);
        motion.set_height_target(10);
        motion.set_underline_target(UnderlinePosition { offset: 2, width: 15 });
        motion.set_underline_target(UnderlinePosition { offset: 19, width: 16 });
        motion.show_view(TabName::Account);
        assert_eq!(motion.show_view(TabName::Password), TabName::Password);

        assert_eq!(motion.height(), 10);
        assert_eq!(motion.underline(), UnderlinePosition { offset: 19, width: 16 });
        assert_eq!(motion.content_opacity(), 1.0);
        assert!(motion.is_idle());
    }
}
