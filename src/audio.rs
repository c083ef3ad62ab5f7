use log::{info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// What the media element should be told to do after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    /// Start playback. The id identifies this request when the browser
    /// answers later.
    Play(u32),
    Pause,
}

/// Play/pause toggle for the background track.
///
/// The displayed state flips as soon as the guest clicks. If the browser then
/// refuses to start playback the toggle falls back to `Paused`, but only when
/// that refusal belongs to the latest play request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AudioToggle {
    state: PlaybackState,
    requests: u32,
}

impl AudioToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn toggle(&mut self) -> AudioCommand {
        match self.state {
            PlaybackState::Paused => {
                self.requests = self.requests.wrapping_add(1);
                self.state = PlaybackState::Playing;
                info!("background audio requested");
                AudioCommand::Play(self.requests)
            }
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                info!("background audio paused");
                AudioCommand::Pause
            }
        }
    }

    /// The browser rejected play request `request`. Returns whether the state
    /// changed.
    pub fn play_rejected(&mut self, request: u32) -> bool {
        if request != self.requests || self.state != PlaybackState::Playing {
            return false;
        }
        warn!("playback blocked until the page has a user gesture");
        self.state = PlaybackState::Paused;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused() {
        assert_eq!(AudioToggle::new().state(), PlaybackState::Paused);
    }

    #[test]
    fn toggling_twice_pauses_again() {
        let mut audio = AudioToggle::new();
        assert!(matches!(audio.toggle(), AudioCommand::Play(_)));
        assert_eq!(audio.state(), PlaybackState::Playing);
        assert_eq!(audio.toggle(), AudioCommand::Pause);
        assert_eq!(audio.state(), PlaybackState::Paused);
    }

    #[test]
    fn rejected_play_falls_back_to_paused() {
        let mut audio = AudioToggle::new();
        let AudioCommand::Play(id) = audio.toggle() else { panic!("expected play") };
        assert!(audio.play_rejected(id));
        assert_eq!(audio.state(), PlaybackState::Paused);
        assert!(matches!(audio.toggle(), AudioCommand::Play(_)));
    }

    #[test]
    fn stale_rejection_is_ignored() {
        let mut audio = AudioToggle::new();
        let AudioCommand::Play(first) = audio.toggle() else { panic!("expected play") };
        audio.toggle();
        let AudioCommand::Play(second) = audio.toggle() else { panic!("expected play") };
        assert_ne!(first, second);
        assert!(!audio.play_rejected(first));
        assert_eq!(audio.state(), PlaybackState::Playing);
        assert!(audio.play_rejected(second));
    }

    #[test]
    fn rejection_after_pause_changes_nothing() {
        let mut audio = AudioToggle::new();
        let AudioCommand::Play(id) = audio.toggle() else { panic!("expected play") };
        audio.toggle();
        assert!(!audio.play_rejected(id));
        assert_eq!(audio.state(), PlaybackState::Paused);
    }
}
