//! Scroll-driven animation: one-shot reveals and scroll-scrubbed tweens.
//!
//! The geometry (thresholds, scrub progress) is pure and lives at the top of
//! the file. `register_scroll_reveal` binds it to a live element and returns a
//! [`RevealHandle`]; dropping the handle removes the listeners, stops any
//! running frames and reverts the inline styles the reveal wrote. Whether a
//! scroll event may still start the animation is decided by [`RevealLatch`].

use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use gloo_events::EventListener;
use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::error::{self, DomResult};
use crate::motion::{apply_pose, clear_pose, run_frames, AnimationHandle, FrameControl, Pose, Position, Timeline, TweenSpec};

/// Fires once the element's top edge reaches `fraction` of the viewport
/// height, measured from the top ("top 80%" is 0.8).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    fraction: f64,
}

#[derive(Debug, Error, PartialEq)]
#[error("unrecognised scroll threshold `{0}`")]
pub struct ThresholdParseError(String);

impl Threshold {
    pub fn top(percent: f64) -> Self {
        Threshold { fraction: percent / 100.0 }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn crossed(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top <= viewport_height * self.fraction
    }
}

/// Viewport position as a percentage of its height.
fn parse_viewport_edge(word: &str) -> Option<f64> {
    match word {
        "top" => Some(0.0),
        "center" => Some(50.0),
        "bottom" => Some(100.0),
        _ => word.strip_suffix('%').and_then(|n| n.trim().parse::<f64>().ok()),
    }
}

impl FromStr for Threshold {
    type Err = ThresholdParseError;

    /// Accepts `"top <edge>"` where edge is `top`, `center`, `bottom` or `N%`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("top"), Some(edge), None) => parse_viewport_edge(edge)
                .map(Threshold::top)
                .ok_or_else(|| ThresholdParseError(s.to_string())),
            _ => Err(ThresholdParseError(s.to_string())),
        }
    }
}

/// A point on the element lined up against a point on the viewport, both as
/// fractions of their heights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMark {
    pub element: f64,
    pub viewport: f64,
}

impl ScrollMark {
    pub fn new(element: f64, viewport: f64) -> Self {
        ScrollMark { element, viewport }
    }

    /// Pixels still to scroll before the two points meet. Negative once past.
    fn distance(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        element_top + self.element * element_height - self.viewport * viewport_height
    }
}

/// Scroll span over which a scrubbed tween runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubRange {
    pub start: ScrollMark,
    pub end: ScrollMark,
}

impl ScrubRange {
    pub fn progress(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        let to_start = self.start.distance(element_top, element_height, viewport_height);
        let to_end = self.end.distance(element_top, element_height, viewport_height);
        let span = to_end - to_start;
        if span.abs() < f64::EPSILON {
            return if to_start <= 0.0 { 1.0 } else { 0.0 };
        }
        (-to_start / span).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    /// Starting pose; every target settles at its natural layout.
    pub from: Pose,
    pub tween: TweenSpec,
    /// Seconds between consecutive targets.
    pub stagger: f64,
    /// CSS selector for the animated elements, resolved inside the trigger.
    pub targets: &'static str,
}

impl RevealSpec {
    pub fn timeline(&self, count: usize, delay: f64) -> Timeline<usize> {
        let mut timeline = Timeline::with_delay(delay);
        let targets: Vec<usize> = (0..count).collect();
        timeline.stagger_from_to(&targets, self.from, Pose::REST, self.tween, self.stagger, Position::Sequential);
        timeline
    }
}

/// One-shot latch over a threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    threshold: Threshold,
    fired: bool,
}

impl RevealTrigger {
    pub fn new(threshold: Threshold) -> Self {
        RevealTrigger { threshold, fired: false }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// True exactly once: on the first check where the threshold is crossed.
    pub fn check(&mut self, element_top: f64, viewport_height: f64) -> bool {
        if self.fired || !self.threshold.crossed(element_top, viewport_height) {
            return false;
        }
        self.fired = true;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchAction {
    Play,
    Hold,
}

/// Decides, for one registration, whether a scroll check starts the reveal.
/// Plays at most once, and never after the registration is released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    trigger: RevealTrigger,
    released: bool,
}

impl RevealLatch {
    pub fn new(threshold: Threshold) -> Self {
        RevealLatch { trigger: RevealTrigger::new(threshold), released: false }
    }

    /// A latch that has already played, for reveals started without a trigger.
    pub fn spent() -> Self {
        let mut trigger = RevealTrigger::new(Threshold::top(100.0));
        trigger.fired = true;
        RevealLatch { trigger, released: false }
    }

    pub fn check(&mut self, element_top: f64, viewport_height: f64) -> LatchAction {
        if !self.released && self.trigger.check(element_top, viewport_height) {
            LatchAction::Play
        } else {
            LatchAction::Hold
        }
    }

    /// True only for the call that actually releases.
    pub fn release(&mut self) -> bool {
        !std::mem::replace(&mut self.released, true)
    }

    pub fn has_fired(&self) -> bool {
        self.trigger.has_fired()
    }
}

fn collect_targets(element: &HtmlElement, selector: &str) -> DomResult<Vec<HtmlElement>> {
    let nodes = element.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

struct RevealState {
    targets: Vec<HtmlElement>,
    spec: RevealSpec,
    delay: f64,
    listeners: RefCell<Vec<EventListener>>,
    animation: RefCell<Option<AnimationHandle>>,
    latch: RefCell<RevealLatch>,
}

impl RevealState {
    fn hold(&self) {
        for target in &self.targets {
            if let Err(err) = apply_pose(target, &self.spec.from) {
                warn!("could not hold reveal target: {}", err);
            }
        }
    }

    fn play(self: &Rc<Self>) {
        let timeline = self.spec.timeline(self.targets.len(), self.delay);
        let state = Rc::clone(self);
        let mut first_frame = true;
        let handle = run_frames(move |elapsed| {
            if first_frame {
                // The trigger is spent; stop listening outside the event callback.
                state.listeners.borrow_mut().clear();
                first_frame = false;
            }
            for (index, pose) in timeline.sample(elapsed) {
                if let Some(target) = state.targets.get(index) {
                    if let Err(err) = apply_pose(target, &pose) {
                        warn!("reveal frame not applied: {}", err);
                    }
                }
            }
            if timeline.is_complete(elapsed) {
                FrameControl::Finished
            } else {
                FrameControl::Continue
            }
        });
        *self.animation.borrow_mut() = Some(handle);
    }

    fn release(&self) {
        let fired = {
            let mut latch = self.latch.borrow_mut();
            if !latch.release() {
                return;
            }
            latch.has_fired()
        };
        debug!("reveal released after {}", if fired { "playing" } else { "never firing" });
        self.listeners.borrow_mut().clear();
        self.animation.borrow_mut().take();
        for target in &self.targets {
            if let Err(err) = clear_pose(target) {
                warn!("could not clear reveal target: {}", err);
            }
        }
    }
}

/// Registration of one scroll reveal. Dropping it undoes the registration.
pub struct RevealHandle {
    state: Rc<RevealState>,
}

impl RevealHandle {
    pub fn target_count(&self) -> usize {
        self.state.targets.len()
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.state.release();
    }
}

/// Holds the targets found under `element` at `spec.from` and animates them
/// to rest the first time `element` crosses `threshold`. Checked immediately,
/// then on scroll and resize.
pub fn register_scroll_reveal(element: &HtmlElement, threshold: Threshold, spec: RevealSpec) -> DomResult<RevealHandle> {
    let window = error::window()?;
    let state = Rc::new(RevealState {
        targets: collect_targets(element, spec.targets)?,
        spec,
        delay: 0.0,
        listeners: RefCell::new(Vec::new()),
        animation: RefCell::new(None),
        latch: RefCell::new(RevealLatch::new(threshold)),
    });
    state.hold();

    let check: Rc<dyn Fn()> = {
        let element = element.clone();
        let state = Rc::downgrade(&state);
        Rc::new(move || {
            let Some(state) = state.upgrade() else { return };
            let Ok(viewport_height) = error::viewport_height() else { return };
            let top = element.get_bounding_client_rect().top();
            let action = state.latch.borrow_mut().check(top, viewport_height);
            if action == LatchAction::Play {
                debug!("reveal fired for {} target(s)", state.targets.len());
                state.play();
            }
        })
    };

    for event in ["scroll", "resize"] {
        let check = Rc::clone(&check);
        let listener = EventListener::new(&window, event, move |_| check());
        state.listeners.borrow_mut().push(listener);
    }
    check();

    Ok(RevealHandle { state })
}

/// Plays a reveal right away, after `delay` seconds, with no scroll trigger.
pub fn play_reveal(element: &HtmlElement, spec: RevealSpec, delay: f64) -> DomResult<RevealHandle> {
    let state = Rc::new(RevealState {
        targets: collect_targets(element, spec.targets)?,
        spec,
        delay,
        listeners: RefCell::new(Vec::new()),
        animation: RefCell::new(None),
        latch: RefCell::new(RevealLatch::spent()),
    });
    state.hold();
    state.play();
    Ok(RevealHandle { state })
}

fn arm(element: &HtmlElement, threshold: &str, spec: RevealSpec) -> Option<RevealHandle> {
    let threshold = match threshold.parse::<Threshold>() {
        Ok(threshold) => threshold,
        Err(err) => {
            warn!("scroll reveal not registered: {}", err);
            return None;
        }
    };
    match register_scroll_reveal(element, threshold, spec) {
        Ok(handle) => {
            debug!(
                "scroll reveal armed on {} target(s) at {:.0}% of the viewport",
                handle.target_count(),
                threshold.fraction() * 100.0
            );
            Some(handle)
        }
        Err(err) => {
            warn!("scroll reveal not registered: {}", err);
            None
        }
    }
}

/// Registers a scroll reveal on `node` while `active` is true. `threshold`
/// is written as `"top 80%"`. A fresh registration is made every time
/// `active` turns on or the view remounts.
#[hook]
pub fn use_scroll_reveal(node: NodeRef, threshold: &'static str, spec: RevealSpec, active: bool) {
    use_effect_with_deps(
        move |active| {
            let handle = match (*active, node.cast::<HtmlElement>()) {
                (true, Some(element)) => arm(&element, threshold, spec),
                _ => None,
            };
            move || drop(handle)
        },
        active,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Ease;

    #[test]
    fn parses_percent_and_keyword_thresholds() {
        assert_eq!("top 80%".parse::<Threshold>(), Ok(Threshold::top(80.0)));
        assert_eq!("top 60%".parse::<Threshold>().unwrap().fraction(), 0.6);
        assert_eq!("top top".parse::<Threshold>().unwrap().fraction(), 0.0);
        assert_eq!("top center".parse::<Threshold>().unwrap().fraction(), 0.5);
        assert_eq!("top bottom".parse::<Threshold>().unwrap().fraction(), 1.0);
    }

    #[test]
    fn rejects_malformed_thresholds() {
        assert!("bottom 80%".parse::<Threshold>().is_err());
        assert!("top".parse::<Threshold>().is_err());
        assert!("top eighty".parse::<Threshold>().is_err());
        assert!("top 80% extra".parse::<Threshold>().is_err());
    }

    #[test]
    fn threshold_crossing() {
        let t = Threshold::top(70.0);
        assert!(!t.crossed(800.0, 1000.0));
        assert!(t.crossed(700.0, 1000.0));
        assert!(t.crossed(-50.0, 1000.0));
    }

    #[test]
    fn trigger_fires_once() {
        let mut trigger = RevealTrigger::new(Threshold::top(75.0));
        assert!(!trigger.check(900.0, 1000.0));
        assert!(trigger.check(740.0, 1000.0));
        assert!(!trigger.check(100.0, 1000.0));
        assert!(trigger.has_fired());
    }

    #[test]
    fn a_fresh_trigger_starts_armed() {
        let mut spent = RevealTrigger::new(Threshold::top(80.0));
        spent.check(0.0, 1000.0);
        let fresh = RevealTrigger::new(Threshold::top(80.0));
        assert!(spent.has_fired());
        assert!(!fresh.has_fired());
    }

    #[test]
    fn latch_plays_once_on_crossing() {
        let mut latch = RevealLatch::new(Threshold::top(80.0));
        assert_eq!(latch.check(900.0, 1000.0), LatchAction::Hold);
        assert_eq!(latch.check(790.0, 1000.0), LatchAction::Play);
        assert_eq!(latch.check(100.0, 1000.0), LatchAction::Hold);
        assert!(latch.has_fired());
    }

    #[test]
    fn crossing_after_release_does_not_play() {
        let mut latch = RevealLatch::new(Threshold::top(80.0));
        assert_eq!(latch.check(900.0, 1000.0), LatchAction::Hold);
        assert!(latch.release());
        assert_eq!(latch.check(100.0, 1000.0), LatchAction::Hold);
        assert!(!latch.has_fired());
    }

    #[test]
    fn second_release_is_a_no_op() {
        let mut latch = RevealLatch::new(Threshold::top(80.0));
        assert!(latch.release());
        assert!(!latch.release());
        assert_eq!(latch.check(0.0, 1000.0), LatchAction::Hold);
    }

    #[test]
    fn fresh_registration_fires_again() {
        let mut first = RevealLatch::new(Threshold::top(80.0));
        assert_eq!(first.check(0.0, 1000.0), LatchAction::Play);
        assert!(first.release());

        let mut second = RevealLatch::new(Threshold::top(80.0));
        assert_eq!(second.check(0.0, 1000.0), LatchAction::Play);
    }

    #[test]
    fn spent_latch_never_plays() {
        let mut latch = RevealLatch::spent();
        assert!(latch.has_fired());
        assert_eq!(latch.check(0.0, 1000.0), LatchAction::Hold);
        assert!(latch.release());
    }

    #[test]
    fn scrub_from_top_top_to_bottom_top() {
        let range = ScrubRange { start: ScrollMark::new(0.0, 0.0), end: ScrollMark::new(1.0, 0.0) };
        assert_eq!(range.progress(100.0, 800.0, 800.0), 0.0);
        assert_eq!(range.progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(range.progress(-400.0, 800.0, 800.0), 0.5);
        assert_eq!(range.progress(-2000.0, 800.0, 800.0), 1.0);
    }

    #[test]
    fn scrub_over_part_of_the_element() {
        let range = ScrubRange { start: ScrollMark::new(0.0, 0.0), end: ScrollMark::new(0.4, 0.0) };
        assert!((range.progress(-160.0, 800.0, 800.0) - 0.5).abs() < 1e-9);
        assert_eq!(range.progress(-320.0, 800.0, 800.0), 1.0);
    }

    #[test]
    fn zero_length_scrub_is_a_step() {
        let range = ScrubRange { start: ScrollMark::new(0.0, 0.0), end: ScrollMark::new(0.0, 0.0) };
        assert_eq!(range.progress(10.0, 0.0, 800.0), 0.0);
        assert_eq!(range.progress(-10.0, 0.0, 800.0), 1.0);
    }

    #[test]
    fn staggered_reveal_timeline() {
        let spec = RevealSpec {
            from: Pose::REST.y(80.0).opacity(0.0),
            tween: TweenSpec::new(1.2, Ease::Power3Out),
            stagger: 0.2,
            targets: ".event-card",
        };
        let tl = spec.timeline(3, 0.0);
        assert!((tl.duration() - 1.6).abs() < 1e-9);
        assert_eq!(tl.pose_at(2, 0.3), Some(spec.from));
        assert_eq!(tl.pose_at(0, 1.2), Some(Pose::REST));
        assert!(tl.is_complete(1.61));
    }
}
