use log::Level;

use crate::ambient::{OrnamentRanges, SparkleRanges};
use crate::entry::EntryTiming;
use crate::motion::{Ease, Pose, TweenSpec};
use crate::reveal::{RevealSpec, ScrollMark, ScrubRange};

/// Ceremony start, wall-clock time at the venue as seen by the guest's browser.
pub const COUNTDOWN_TARGET: &str = "2024-12-14T18:00:00";
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

pub const AUDIO_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/e/e6/Shehnai_music.ogg";
pub const AUDIO_VOLUME: f64 = 0.3;
pub const AUDIO_LABEL: &str = "♪ Wedding Shehnai";

pub const ENTRY_SPARKLES: usize = 30;
pub const BACKGROUND_SPARKLES: usize = 15;
pub const FLOATING_ICONS: usize = 15;
pub const FLOATING_MANDALAS: usize = 4;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn entry_timing() -> EntryTiming {
    EntryTiming {
        content_fade: TweenSpec::new(0.8, Ease::Power2In),
        content_scale: 0.9,
        zoom: TweenSpec::new(1.2, Ease::Power2InOut),
        zoom_offset: -0.4,
        zoom_scale: 1.05,
        doors: TweenSpec::new(2.5, Ease::Power2InOut),
        doors_offset: -0.8,
        door_angle: 110.0,
        door_slide_percent: 20.0,
        overlay_fade: TweenSpec::new(1.0, Ease::Power1Out).delayed(0.2),
        overlay_fade_offset: -1.5,
    }
}

pub fn ornament_ranges() -> OrnamentRanges {
    OrnamentRanges {
        left_percent: (0.0, 100.0),
        top_percent: (10.0, 110.0),
        size_px: (20.0, 40.0),
        drift_px: (200.0, 500.0),
        sway_px: (-50.0, 50.0),
        rotation_deg: (0.0, 360.0),
        duration_s: (15.0, 25.0),
        opacity: (0.1, 0.4),
        fade_s: (2.0, 4.0),
        wrap_margin_px: 100.0,
    }
}

pub fn sparkle_ranges() -> SparkleRanges {
    SparkleRanges {
        size_px: (1.0, 3.0),
        top_percent: (0.0, 100.0),
        left_percent: (0.0, 100.0),
        period_s: (2.0, 5.0),
        delay_s: (0.0, 5.0),
    }
}

// Hero

pub const HERO_INTRO_DELAY: f64 = 0.5;
pub const HERO_INTRO_STAGGER: f64 = 0.25;

pub fn hero_intro() -> RevealSpec {
    RevealSpec {
        from: Pose::REST.y(80.0).opacity(0.0).blur(10.0),
        tween: TweenSpec::new(1.8, Ease::Power4Out),
        stagger: HERO_INTRO_STAGGER,
        targets: ".hero-text-line",
    }
}

/// Background parallax runs while the hero scrolls from its top to its bottom
/// leaving the top of the viewport.
pub fn hero_parallax() -> ScrubRange {
    ScrubRange {
        start: ScrollMark::new(0.0, 0.0),
        end: ScrollMark::new(1.0, 0.0),
    }
}

pub const HERO_PARALLAX_Y_PERCENT: f64 = 20.0;
pub const HERO_PARALLAX_EASE: Ease = Ease::Linear;
pub const HERO_TEXT_FADE_EASE: Ease = Ease::Power1Out;

pub fn hero_text_fade() -> ScrubRange {
    ScrubRange {
        start: ScrollMark::new(0.0, 0.0),
        end: ScrollMark::new(0.4, 0.0),
    }
}

pub fn hero_text_faded() -> Pose {
    Pose::REST.opacity(0.0).y(-30.0).scale(0.95)
}

// Story

pub const STORY_THRESHOLD: &str = "top 70%";

pub fn story_image_reveal() -> RevealSpec {
    RevealSpec {
        from: Pose::REST.x(-50.0).opacity(0.0),
        tween: TweenSpec::new(1.5, Ease::Power3Out),
        stagger: 0.0,
        targets: ".story-portrait",
    }
}

pub fn story_text_reveal() -> RevealSpec {
    RevealSpec {
        from: Pose::REST.x(50.0).opacity(0.0),
        tween: TweenSpec::new(1.5, Ease::Power3Out),
        stagger: 0.2,
        targets: ".story-text > *",
    }
}

// Events

pub const EVENTS_THRESHOLD: &str = "top 75%";

pub fn event_cards_reveal() -> RevealSpec {
    RevealSpec {
        from: Pose::REST.y(80.0).opacity(0.0),
        tween: TweenSpec::new(1.2, Ease::Power3Out),
        stagger: 0.2,
        targets: ".event-card",
    }
}

// Countdown

pub const TIMER_THRESHOLD: &str = "top 80%";

pub fn timer_blocks_reveal() -> RevealSpec {
    RevealSpec {
        from: Pose::REST.y(50.0).opacity(0.0),
        tween: TweenSpec::new(1.0, Ease::BackOut(1.7)),
        stagger: 0.1,
        targets: ".timer-block",
    }
}

pub const RSVP_THRESHOLD: &str = "top 60%";

pub fn rsvp_reveal() -> RevealSpec {
    RevealSpec {
        from: Pose::REST.scale(0.9).opacity(0.0),
        tween: TweenSpec::new(1.0, Ease::Power2Out).delayed(0.5),
        stagger: 0.0,
        targets: ".rsvp-box",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::resolve_local_target;
    use crate::reveal::Threshold;

    #[test]
    fn section_thresholds_parse() {
        assert_eq!(STORY_THRESHOLD.parse::<Threshold>(), Ok(Threshold::top(70.0)));
        assert_eq!(EVENTS_THRESHOLD.parse::<Threshold>(), Ok(Threshold::top(75.0)));
        assert_eq!(TIMER_THRESHOLD.parse::<Threshold>(), Ok(Threshold::top(80.0)));
        assert_eq!(RSVP_THRESHOLD.parse::<Threshold>(), Ok(Threshold::top(60.0)));
    }

    #[test]
    fn sparkle_ranges_are_ordered() {
        let r = sparkle_ranges();
        for (lo, hi) in [r.size_px, r.top_percent, r.left_percent, r.period_s, r.delay_s] {
            assert!(lo <= hi);
        }
    }

    #[test]
    fn countdown_target_parses() {
        assert!(resolve_local_target(COUNTDOWN_TARGET).is_some());
    }
}
