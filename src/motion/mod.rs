pub mod driver;
pub mod easing;
pub mod pose;
pub mod timeline;

pub use driver::{apply_pose, clear_pose, run_frames, AnimationHandle, FrameControl};
pub use easing::Ease;
pub use pose::{Origin, Pose};
pub use timeline::{Position, Timeline, TweenSpec};
