//! Decorative background motion.
//!
//! Each ornament draws its parameters once, when the field is created, and
//! keeps them for its whole life. Frames only evaluate `pose_at`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::motion::{Ease, Pose};

/// Inclusive-exclusive `(low, high)` bounds for every random parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrnamentRanges {
    pub left_percent: (f64, f64),
    pub top_percent: (f64, f64),
    pub size_px: (f64, f64),
    /// Upward travel over one half-cycle.
    pub drift_px: (f64, f64),
    pub sway_px: (f64, f64),
    pub rotation_deg: (f64, f64),
    pub duration_s: (f64, f64),
    pub opacity: (f64, f64),
    pub fade_s: (f64, f64),
    /// Added to the viewport height before wrapping the vertical offset.
    pub wrap_margin_px: f64,
}

/// Bounds for the twinkling dots, same convention as [`OrnamentRanges`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkleRanges {
    pub size_px: (f64, f64),
    pub top_percent: (f64, f64),
    pub left_percent: (f64, f64),
    pub period_s: (f64, f64),
    pub delay_s: (f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Heart,
    Star,
    HeartOutline,
}

impl Glyph {
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => Glyph::Heart,
            1 => Glyph::Star,
            _ => Glyph::HeartOutline,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Glyph::Heart | Glyph::HeartOutline => "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z",
            Glyph::Star => "M12 2l2.4 7.2h7.6l-6 4.8 2.4 7.2-6-4.8-6 4.8 2.4-7.2-6-4.8h7.6z",
        }
    }

    pub fn is_outline(self) -> bool {
        self == Glyph::HeartOutline
    }
}

fn draw(rng: &mut impl Rng, (low, high): (f64, f64)) -> f64 {
    if high <= low {
        low
    } else {
        rng.gen_range(low..high)
    }
}

/// Back-and-forth progress: 0 → 1 over one period, then 1 → 0 over the next.
pub fn yoyo(elapsed: f64, period: f64) -> f64 {
    if period <= 0.0 {
        return 0.0;
    }
    let cycles = (elapsed.max(0.0) / period).max(0.0);
    let frac = cycles.fract();
    if (cycles.floor() as u64) % 2 == 0 {
        frac
    } else {
        1.0 - frac
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ornament {
    pub glyph: Glyph,
    pub left_percent: f64,
    pub top_percent: f64,
    pub size_px: f64,
    pub drift_px: f64,
    pub sway_px: f64,
    pub rotation_deg: f64,
    pub duration_s: f64,
    pub opacity: f64,
    pub fade_s: f64,
}

impl Ornament {
    pub fn random(index: usize, rng: &mut impl Rng, ranges: &OrnamentRanges) -> Self {
        Ornament {
            glyph: Glyph::for_index(index),
            left_percent: draw(rng, ranges.left_percent),
            top_percent: draw(rng, ranges.top_percent),
            size_px: draw(rng, ranges.size_px),
            drift_px: draw(rng, ranges.drift_px),
            sway_px: draw(rng, ranges.sway_px),
            rotation_deg: draw(rng, ranges.rotation_deg),
            duration_s: draw(rng, ranges.duration_s),
            opacity: draw(rng, ranges.opacity),
            fade_s: draw(rng, ranges.fade_s),
        }
    }

    /// Pose `elapsed` seconds into the loop. The vertical offset wraps at
    /// `viewport_height + wrap_margin` so the drift never jumps back.
    pub fn pose_at(&self, elapsed: f64, viewport_height: f64, wrap_margin: f64) -> Pose {
        let travel = yoyo(elapsed, self.duration_s);
        let wrap = (viewport_height + wrap_margin).max(1.0);
        let fade = Ease::SineInOut.apply(yoyo(elapsed, self.fade_s));
        Pose::REST
            .y((-self.drift_px * travel) % wrap)
            .x(self.sway_px * travel)
            .rotate(self.rotation_deg * travel)
            .opacity(1.0 + (self.opacity - 1.0) * fade)
    }
}

/// Twinkling dot; animated by a CSS keyframe loop, so it only needs its layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub size_px: f64,
    pub top_percent: f64,
    pub left_percent: f64,
    pub period_s: f64,
    pub delay_s: f64,
}

impl Sparkle {
    pub fn random(rng: &mut impl Rng, ranges: &SparkleRanges) -> Self {
        Sparkle {
            size_px: draw(rng, ranges.size_px),
            top_percent: draw(rng, ranges.top_percent),
            left_percent: draw(rng, ranges.left_percent),
            period_s: draw(rng, ranges.period_s),
            delay_s: draw(rng, ranges.delay_s),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; top: {top:.2}%; left: {left:.2}%; animation: twinkle {period:.2}s ease-in-out infinite; animation-delay: {delay:.2}s;",
            size = self.size_px,
            top = self.top_percent,
            left = self.left_percent,
            period = self.period_s,
            delay = self.delay_s,
        )
    }
}

pub fn rng_from_seed(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Arena of ornaments owned by one background layer.
#[derive(Clone, Debug, PartialEq)]
pub struct OrnamentField {
    pub ornaments: Vec<Ornament>,
    pub wrap_margin: f64,
}

impl OrnamentField {
    pub fn new(count: usize, seed: u64, ranges: &OrnamentRanges) -> Self {
        let mut rng = rng_from_seed(seed);
        OrnamentField {
            ornaments: (0..count).map(|i| Ornament::random(i, &mut rng, ranges)).collect(),
            wrap_margin: ranges.wrap_margin_px,
        }
    }

    pub fn poses_at(&self, elapsed: f64, viewport_height: f64) -> Vec<Pose> {
        self.ornaments
            .iter()
            .map(|o| o.pose_at(elapsed, viewport_height, self.wrap_margin))
            .collect()
    }
}

pub fn sparkles(count: usize, seed: u64, ranges: &SparkleRanges) -> Vec<Sparkle> {
    let mut rng = rng_from_seed(seed);
    (0..count).map(|_| Sparkle::random(&mut rng, ranges)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ornament_ranges, sparkle_ranges};

    fn within(value: f64, (low, high): (f64, f64)) -> bool {
        value >= low && value < high
    }

    #[test]
    fn parameters_stay_in_their_ranges() {
        let ranges = ornament_ranges();
        let field = OrnamentField::new(30, 7, &ranges);
        assert_eq!(field.ornaments.len(), 30);
        for o in &field.ornaments {
            assert!(within(o.drift_px, ranges.drift_px));
            assert!(within(o.sway_px, ranges.sway_px));
            assert!(within(o.rotation_deg, ranges.rotation_deg));
            assert!(within(o.duration_s, ranges.duration_s));
            assert!(within(o.opacity, ranges.opacity));
            assert!(within(o.fade_s, ranges.fade_s));
            assert!(within(o.top_percent, ranges.top_percent));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let ranges = ornament_ranges();
        assert_eq!(OrnamentField::new(15, 42, &ranges), OrnamentField::new(15, 42, &ranges));
        assert_ne!(OrnamentField::new(15, 42, &ranges), OrnamentField::new(15, 43, &ranges));
    }

    #[test]
    fn glyphs_cycle() {
        let field = OrnamentField::new(6, 1, &ornament_ranges());
        let glyphs: Vec<Glyph> = field.ornaments.iter().map(|o| o.glyph).collect();
        assert_eq!(
            glyphs,
            vec![Glyph::Heart, Glyph::Star, Glyph::HeartOutline, Glyph::Heart, Glyph::Star, Glyph::HeartOutline]
        );
    }

    #[test]
    fn yoyo_goes_out_and_back() {
        assert_eq!(yoyo(0.0, 10.0), 0.0);
        assert_eq!(yoyo(5.0, 10.0), 0.5);
        assert_eq!(yoyo(15.0, 10.0), 0.5);
        assert!((yoyo(19.0, 10.0) - 0.1).abs() < 1e-9);
        assert_eq!(yoyo(20.0, 10.0), 0.0);
        assert_eq!(yoyo(3.0, 0.0), 0.0);
    }

    #[test]
    fn motion_is_continuous_across_the_turnaround() {
        let field = OrnamentField::new(5, 3, &ornament_ranges());
        for o in &field.ornaments {
            let before = o.pose_at(o.duration_s - 0.001, 2000.0, 100.0);
            let after = o.pose_at(o.duration_s + 0.001, 2000.0, 100.0);
            assert!((before.y - after.y).abs() < 1.0);
        }
    }

    #[test]
    fn vertical_offset_wraps_within_the_viewport() {
        let ranges = ornament_ranges();
        let field = OrnamentField::new(20, 9, &ranges);
        let viewport = 300.0;
        for step in 0..200 {
            for pose in field.poses_at(step as f64 * 0.37, viewport) {
                assert!(pose.y.abs() < viewport + ranges.wrap_margin_px);
                assert!(pose.opacity >= 0.1 - 1e-9 && pose.opacity <= 1.0);
            }
        }
    }

    #[test]
    fn opacity_starts_full_and_reaches_target() {
        let o = &OrnamentField::new(1, 11, &ornament_ranges()).ornaments[0];
        assert_eq!(o.pose_at(0.0, 900.0, 100.0).opacity, 1.0);
        assert!((o.pose_at(o.fade_s, 900.0, 100.0).opacity - o.opacity).abs() < 1e-6);
    }

    #[test]
    fn sparkle_style_is_inline_css() {
        let s = &sparkles(1, 5, &sparkle_ranges())[0];
        let css = s.style();
        assert!(css.starts_with("width: "));
        assert!(css.contains("animation: twinkle"));
    }

    #[test]
    fn sparkles_follow_their_ranges() {
        let ranges = SparkleRanges {
            size_px: (4.0, 6.0),
            top_percent: (10.0, 20.0),
            left_percent: (50.0, 60.0),
            period_s: (1.0, 1.5),
            delay_s: (0.0, 0.5),
        };
        let field = sparkles(40, 3, &ranges);
        assert_eq!(field.len(), 40);
        for s in &field {
            assert!(within(s.size_px, ranges.size_px));
            assert!(within(s.top_percent, ranges.top_percent));
            assert!(within(s.left_percent, ranges.left_percent));
            assert!(within(s.period_s, ranges.period_s));
            assert!(within(s.delay_s, ranges.delay_s));
        }
    }
}
