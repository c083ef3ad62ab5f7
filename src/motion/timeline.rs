//! Declarative tween scheduling.
//!
//! Every step is placed at an absolute start time when it is added, computed
//! from the timeline's running end. Nothing chains on completion callbacks, so
//! ordering is fixed at build time and sampling is a pure function of `t`.

use super::easing::Ease;
use super::pose::Pose;

/// Where a step is placed relative to what is already on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    Sequential,
    /// At the current end shifted by the given seconds; negative values overlap.
    Relative(f64),
    /// At the same start time as the previously added step.
    WithPrevious,
}

/// Duration, easing and extra delay of a single tween, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
}

impl TweenSpec {
    pub const fn new(duration: f64, ease: Ease) -> Self {
        TweenSpec { duration, ease, delay: 0.0 }
    }

    pub const fn delayed(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Debug)]
struct Step<K> {
    target: K,
    from: Pose,
    to: Pose,
    start: f64,
    duration: f64,
    ease: Ease,
}

impl<K> Step<K> {
    fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn pose_at(&self, t: f64) -> Pose {
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            (t - self.start) / self.duration
        };
        Pose::lerp(&self.from, &self.to, self.ease.apply(progress))
    }
}

/// Handle to a step, returned when it is added.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepId(usize);

#[derive(Clone, Debug)]
pub struct Timeline<K> {
    steps: Vec<Step<K>>,
    end: f64,
}

impl<K: Copy + PartialEq> Default for Timeline<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + PartialEq> Timeline<K> {
    pub fn new() -> Self {
        Timeline { steps: Vec::new(), end: 0.0 }
    }

    /// A timeline whose first sequential step waits `delay` seconds.
    pub fn with_delay(delay: f64) -> Self {
        Timeline { steps: Vec::new(), end: delay.max(0.0) }
    }

    fn resolve(&self, position: Position) -> f64 {
        let start = match position {
            Position::Sequential => self.end,
            Position::Relative(offset) => self.end + offset,
            Position::WithPrevious => self.steps.last().map(|s| s.start).unwrap_or(self.end),
        };
        start.max(0.0)
    }

    /// Pose the target will have once every step added so far has finished.
    pub fn settled_pose(&self, target: K) -> Pose {
        self.steps
            .iter()
            .rev()
            .find(|s| s.target == target)
            .map(|s| s.to)
            .unwrap_or(Pose::REST)
    }

    fn push(&mut self, target: K, from: Pose, to: Pose, spec: TweenSpec, start: f64) -> StepId {
        let step = Step {
            target,
            from,
            to,
            start: start + spec.delay.max(0.0),
            duration: spec.duration.max(0.0),
            ease: spec.ease,
        };
        self.end = self.end.max(step.end());
        self.steps.push(step);
        StepId(self.steps.len() - 1)
    }

    /// Tweens `target` from wherever earlier steps leave it to `pose(current)`.
    pub fn to(
        &mut self,
        target: K,
        spec: TweenSpec,
        position: Position,
        pose: impl FnOnce(Pose) -> Pose,
    ) -> StepId {
        let from = self.settled_pose(target);
        let start = self.resolve(position);
        self.push(target, from, pose(from), spec, start)
    }

    /// Same tween for every target, each one starting `each` seconds after the
    /// previous. The group as a whole is placed by `position`.
    pub fn stagger_from_to(
        &mut self,
        targets: &[K],
        from: Pose,
        to: Pose,
        spec: TweenSpec,
        each: f64,
        position: Position,
    ) -> Vec<StepId> {
        let base = self.resolve(position);
        targets
            .iter()
            .enumerate()
            .map(|(i, target)| self.push(*target, from, to, spec, base + each * i as f64))
            .collect()
    }

    pub fn duration(&self) -> f64 {
        self.end
    }

    pub fn end_of(&self, id: StepId) -> f64 {
        self.steps[id.0].end()
    }

    pub fn is_complete(&self, t: f64) -> bool {
        t >= self.end
    }

    /// Every target once, in first-appearance order.
    pub fn targets(&self) -> Vec<K> {
        let mut targets: Vec<K> = Vec::new();
        for step in &self.steps {
            if !targets.contains(&step.target) {
                targets.push(step.target);
            }
        }
        targets
    }

    /// Pose of `target` at time `t`.
    ///
    /// The most recently declared step that has started wins. Before any of the
    /// target's steps start, it holds the first step's starting pose.
    pub fn pose_at(&self, target: K, t: f64) -> Option<Pose> {
        let mut first = None;
        let mut active = None;
        for step in self.steps.iter().filter(|s| s.target == target) {
            first.get_or_insert(step);
            if step.start <= t {
                active = Some(step);
            }
        }
        match (active, first) {
            (Some(step), _) => Some(step.pose_at(t)),
            (None, Some(step)) => Some(step.from),
            (None, None) => None,
        }
    }

    pub fn sample(&self, t: f64) -> Vec<(K, Pose)> {
        self.targets()
            .into_iter()
            .filter_map(|target| self.pose_at(target, t).map(|pose| (target, pose)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn start_of<K>(tl: &Timeline<K>, id: StepId) -> f64 {
        tl.steps[id.0].start
    }

    #[test]
    fn sequential_steps_follow_each_other() {
        let mut tl = Timeline::new();
        let a = tl.to(0, TweenSpec::new(1.0, Ease::Linear), Position::Sequential, |p| p.opacity(0.0));
        let b = tl.to(1, TweenSpec::new(2.0, Ease::Linear), Position::Sequential, |p| p.scale(2.0));
        assert!(approx(start_of(&tl, a), 0.0));
        assert!(approx(start_of(&tl, b), 1.0));
        assert!(approx(tl.duration(), 3.0));
    }

    #[test]
    fn negative_relative_offsets_overlap_the_tail() {
        let mut tl = Timeline::new();
        tl.to(0, TweenSpec::new(0.8, Ease::Linear), Position::Sequential, |p| p);
        let b = tl.to(1, TweenSpec::new(1.2, Ease::Linear), Position::Relative(-0.4), |p| p);
        assert!(approx(start_of(&tl, b), 0.4));
        assert!(approx(tl.duration(), 1.6));
    }

    #[test]
    fn delay_shifts_start_and_short_steps_do_not_shrink_the_end() {
        let mut tl = Timeline::new();
        tl.to(0, TweenSpec::new(3.0, Ease::Linear), Position::Sequential, |p| p);
        let b = tl.to(1, TweenSpec::new(1.0, Ease::Linear).delayed(0.2), Position::Relative(-2.0), |p| p);
        assert!(approx(start_of(&tl, b), 1.2));
        assert!(approx(tl.end_of(b), 2.2));
        assert!(approx(tl.duration(), 3.0));
    }

    #[test]
    fn with_previous_shares_the_start() {
        let mut tl = Timeline::new();
        tl.to(0, TweenSpec::new(1.0, Ease::Linear), Position::Sequential, |p| p);
        let a = tl.to(1, TweenSpec::new(1.0, Ease::Linear), Position::Sequential, |p| p);
        let b = tl.to(2, TweenSpec::new(1.0, Ease::Linear), Position::WithPrevious, |p| p);
        assert!(approx(start_of(&tl, a), start_of(&tl, b)));
    }

    #[test]
    fn to_continues_from_the_settled_pose() {
        let mut tl = Timeline::new();
        tl.to(0, TweenSpec::new(1.0, Ease::Linear), Position::Sequential, |p| p.scale(1.05));
        tl.to(0, TweenSpec::new(1.0, Ease::Linear), Position::Sequential, |p| p.opacity(0.0));
        let end = tl.pose_at(0, 2.0).unwrap();
        assert!(approx(end.scale, 1.05));
        assert!(approx(end.opacity, 0.0));
        let between = tl.pose_at(0, 1.5).unwrap();
        assert!(approx(between.scale, 1.05));
        assert!(approx(between.opacity, 0.5));
    }

    #[test]
    fn targets_hold_their_from_pose_until_started() {
        let mut tl = Timeline::with_delay(0.5);
        let hidden = Pose::REST.opacity(0.0).y(80.0);
        tl.stagger_from_to(&[0, 1], hidden, Pose::REST, TweenSpec::new(1.0, Ease::Linear), 0.25, Position::Sequential);
        assert_eq!(tl.pose_at(1, 0.0), Some(hidden));
        assert_eq!(tl.pose_at(1, 0.7), Some(hidden));
        assert_eq!(tl.pose_at(0, 1.5), Some(Pose::REST));
        assert!(approx(tl.duration(), 1.75));
    }

    #[test]
    fn sampling_is_pure() {
        let mut tl = Timeline::new();
        tl.to(0, TweenSpec::new(1.0, Ease::Power2InOut), Position::Sequential, |p| p.rotate_y(110.0));
        assert_eq!(tl.sample(0.37), tl.sample(0.37));
        assert!(tl.pose_at(7, 0.5).is_none());
    }
}
