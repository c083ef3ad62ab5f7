use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::HtmlElement;

use super::pose::{Pose, POSE_PROPERTIES};
use crate::error::DomResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Finished,
}

type FrameFn = Box<dyn FnMut(f64) -> FrameControl>;

struct FrameLoop {
    frame: RefCell<Option<AnimationFrame>>,
    origin: Cell<Option<f64>>,
    stopped: Cell<bool>,
    on_frame: RefCell<FrameFn>,
}

impl FrameLoop {
    fn schedule(self: &Rc<Self>) {
        let next = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| next.tick(timestamp));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        if self.stopped.get() {
            return;
        }
        let origin = self.origin.get().unwrap_or(timestamp);
        self.origin.set(Some(origin));
        let elapsed = ((timestamp - origin) / 1000.0).max(0.0);
        let control = {
            let mut on_frame = self.on_frame.borrow_mut();
            (*on_frame)(elapsed)
        };
        match control {
            FrameControl::Continue if !self.stopped.get() => self.schedule(),
            _ => self.stopped.set(true),
        }
    }
}

/// Owner of a running frame loop. Dropping it cancels the pending frame, so a
/// torn-down view never receives another callback.
pub struct AnimationHandle {
    inner: Rc<FrameLoop>,
}

impl AnimationHandle {
    pub fn stop(&self) {
        self.inner.stopped.set(true);
        self.inner.frame.borrow_mut().take();
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Calls `on_frame` with seconds elapsed since the first frame, once per
/// animation frame, until it returns `Finished` or the handle is dropped.
pub fn run_frames(on_frame: impl FnMut(f64) -> FrameControl + 'static) -> AnimationHandle {
    let inner = Rc::new(FrameLoop {
        frame: RefCell::new(None),
        origin: Cell::new(None),
        stopped: Cell::new(false),
        on_frame: RefCell::new(Box::new(on_frame)),
    });
    inner.schedule();
    AnimationHandle { inner }
}

pub fn apply_pose(element: &HtmlElement, pose: &Pose) -> DomResult<()> {
    let style = element.style();
    for (property, value) in pose.css_properties() {
        style.set_property(property, &value)?;
    }
    Ok(())
}

/// Removes every inline property `apply_pose` writes.
pub fn clear_pose(element: &HtmlElement) -> DomResult<()> {
    let style = element.style();
    for property in POSE_PROPERTIES {
        style.remove_property(property)?;
    }
    Ok(())
}

pub fn set_display(element: &HtmlElement, display: &str) -> DomResult<()> {
    element.style().set_property("display", display)?;
    Ok(())
}
