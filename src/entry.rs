//! The door-opening sequence that dismisses the entry overlay.
//!
//! `EntryController` is the only place that decides when the guest has
//! entered. It is a plain state machine over a prebuilt [`Timeline`]; the
//! overlay component feeds it frame times and writes the poses it returns.

use log::{debug, info};

use crate::motion::{Origin, Pose, Position, Timeline, TweenSpec};
use crate::motion::timeline::StepId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryPart {
    Content,
    Container,
    LeftDoor,
    RightDoor,
}

/// Durations, eases and overlaps of the four entry steps, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntryTiming {
    pub content_fade: TweenSpec,
    pub content_scale: f64,
    pub zoom: TweenSpec,
    /// Offset from the end of the content fade; negative overlaps it.
    pub zoom_offset: f64,
    pub zoom_scale: f64,
    pub doors: TweenSpec,
    pub doors_offset: f64,
    pub door_angle: f64,
    pub door_slide_percent: f64,
    pub overlay_fade: TweenSpec,
    pub overlay_fade_offset: f64,
}

pub struct DoorSequence {
    pub timeline: Timeline<EntryPart>,
    overlay_fade: StepId,
}

impl DoorSequence {
    pub fn build(timing: &EntryTiming) -> Self {
        let mut timeline = Timeline::new();

        timeline.to(EntryPart::Content, timing.content_fade, Position::Sequential, |p| {
            p.opacity(0.0).scale(timing.content_scale)
        });

        timeline.to(EntryPart::Container, timing.zoom, Position::Relative(timing.zoom_offset), |p| {
            p.scale(timing.zoom_scale)
        });

        // Each door swings around the edge it shares with the frame.
        timeline.to(EntryPart::LeftDoor, timing.doors, Position::Relative(timing.doors_offset), |p| {
            p.rotate_y(-timing.door_angle)
                .x_percent(-timing.door_slide_percent)
                .origin(Origin::LeftCenter)
        });
        timeline.to(EntryPart::RightDoor, timing.doors, Position::WithPrevious, |p| {
            p.rotate_y(timing.door_angle)
                .x_percent(timing.door_slide_percent)
                .origin(Origin::RightCenter)
        });

        let overlay_fade = timeline.to(
            EntryPart::Container,
            timing.overlay_fade,
            Position::Relative(timing.overlay_fade_offset),
            |p| p.opacity(0.0),
        );

        DoorSequence { timeline, overlay_fade }
    }

    pub fn duration(&self) -> f64 {
        self.timeline.duration()
    }

    /// When the overlay has fully faded and can leave the layout.
    pub fn overlay_gone_at(&self) -> f64 {
        self.timeline.end_of(self.overlay_fade)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryPhase {
    Idle,
    Running,
    Done,
}

/// What the overlay should look like on one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryFrame {
    pub poses: Vec<(EntryPart, Pose)>,
    pub overlay_hidden: bool,
    /// Set on exactly one frame: the one that finishes the sequence.
    pub entered: bool,
}

impl EntryFrame {
    fn idle() -> Self {
        EntryFrame { poses: Vec::new(), overlay_hidden: false, entered: false }
    }
}

pub struct EntryController {
    phase: EntryPhase,
    sequence: DoorSequence,
}

impl EntryController {
    pub fn new(timing: &EntryTiming) -> Self {
        EntryController {
            phase: EntryPhase::Idle,
            sequence: DoorSequence::build(timing),
        }
    }

    /// Starts the sequence. Returns `false`, doing nothing, if it already ran
    /// or is running.
    pub fn activate(&mut self) -> bool {
        match self.phase {
            EntryPhase::Idle => {
                info!("entry sequence started ({:.1}s)", self.sequence.duration());
                self.phase = EntryPhase::Running;
                true
            }
            phase => {
                debug!("entry activation ignored while {:?}", phase);
                false
            }
        }
    }

    /// Poses at `elapsed` seconds into the sequence.
    pub fn advance(&mut self, elapsed: f64) -> EntryFrame {
        match self.phase {
            EntryPhase::Idle => EntryFrame::idle(),
            EntryPhase::Done => EntryFrame {
                poses: self.sequence.timeline.sample(self.sequence.duration()),
                overlay_hidden: true,
                entered: false,
            },
            EntryPhase::Running => {
                let entered = self.sequence.timeline.is_complete(elapsed);
                if entered {
                    info!("entry sequence finished");
                    self.phase = EntryPhase::Done;
                }
                EntryFrame {
                    poses: self.sequence.timeline.sample(elapsed),
                    overlay_hidden: elapsed >= self.sequence.overlay_gone_at(),
                    entered,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::entry_timing;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn steps_overlap_as_configured() {
        let seq = DoorSequence::build(&entry_timing());
        let tl = &seq.timeline;
        assert!(approx(tl.pose_at(EntryPart::Content, 0.8).unwrap().opacity, 0.0));
        // zoom starts 0.4s before the content fade ends
        assert!(approx(tl.pose_at(EntryPart::Container, 0.4).unwrap().scale, 1.0));
        assert!(tl.pose_at(EntryPart::Container, 0.5).unwrap().scale > 1.0);
        // doors start at 1.6 - 0.8
        assert!(approx(tl.pose_at(EntryPart::LeftDoor, 0.8).unwrap().rotate_y, 0.0));
        assert!(tl.pose_at(EntryPart::LeftDoor, 0.9).unwrap().rotate_y < 0.0);
        // overlay fade: 3.3 - 1.5 + 0.2 delay, one second long
        assert!(approx(seq.overlay_gone_at(), 3.0));
        assert!(approx(seq.duration(), 3.3));
    }

    #[test]
    fn doors_open_outward_from_their_shared_edges() {
        let seq = DoorSequence::build(&entry_timing());
        let left = seq.timeline.pose_at(EntryPart::LeftDoor, 10.0).unwrap();
        let right = seq.timeline.pose_at(EntryPart::RightDoor, 10.0).unwrap();
        assert!(approx(left.rotate_y, -110.0));
        assert!(approx(right.rotate_y, 110.0));
        assert!(approx(left.x_percent, -20.0));
        assert!(approx(right.x_percent, 20.0));
        assert_eq!(left.origin, Origin::LeftCenter);
        assert_eq!(right.origin, Origin::RightCenter);
    }

    #[test]
    fn container_keeps_its_zoom_while_fading() {
        let seq = DoorSequence::build(&entry_timing());
        let end = seq.timeline.pose_at(EntryPart::Container, 3.3).unwrap();
        assert!(approx(end.scale, 1.05));
        assert!(approx(end.opacity, 0.0));
    }

    #[test]
    fn nothing_moves_before_activation() {
        let mut entry = EntryController::new(&entry_timing());
        let frame = entry.advance(5.0);
        assert!(frame.poses.is_empty());
        assert!(!frame.entered);
        assert_eq!(entry.phase, EntryPhase::Idle);
    }

    #[test]
    fn double_activation_enters_once() {
        let mut entry = EntryController::new(&entry_timing());
        assert!(entry.activate());
        assert!(!entry.activate());
        assert_eq!(entry.phase, EntryPhase::Running);

        let mut flips = 0;
        let mut t = 0.0;
        while t < 6.0 {
            let frame = entry.advance(t);
            if frame.entered {
                flips += 1;
                assert!(t >= entry.sequence.duration());
            }
            if t > 1.0 {
                assert!(!entry.activate());
            }
            t += 1.0 / 60.0;
        }
        assert_eq!(flips, 1);
        assert_eq!(entry.phase, EntryPhase::Done);
        assert!(!entry.activate());
    }

    #[test]
    fn overlay_hides_before_the_doors_finish() {
        let mut entry = EntryController::new(&entry_timing());
        entry.activate();
        assert!(!entry.advance(2.9).overlay_hidden);
        let frame = entry.advance(3.05);
        assert!(frame.overlay_hidden);
        assert!(!frame.entered);
        assert!(entry.advance(3.31).entered);
        assert!(entry.advance(3.4).overlay_hidden);
    }
}
