//! Ambient audio controller.
//!
//! Playback starts on the first document interaction after content has
//! loaded. Muting only silences output; it never stops or starts playback.

use crate::config::AudioSettings;
use crate::error::PlaybackError;
use crate::surface::MuteIndicator;
use async_trait::async_trait;

/// Audio output the controller drives.
#[async_trait]
pub trait AudioBackend: Send {
    /// Apply source, volume and looping before any playback.
    fn configure(&mut self, settings: &AudioSettings);

    /// Begin playback.
    async fn play(&mut self) -> Result<(), PlaybackError>;

    /// Silence or restore output without touching playback.
    fn set_muted(&mut self, muted: bool);
}

/// Observable audio state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioState {
    pub is_playing: bool,
    pub is_muted: bool,
}

/// Coarse phase derived from [`AudioState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioPhase {
    Idle,
    Playing,
    Muted,
}

impl AudioState {
    pub fn phase(&self) -> AudioPhase {
        match (self.is_playing, self.is_muted) {
            (false, _) => AudioPhase::Idle,
            (true, false) => AudioPhase::Playing,
            (true, true) => AudioPhase::Muted,
        }
    }
}

/// Owner of the ambient playback state.
pub struct AudioController {
    backend: Box<dyn AudioBackend>,
    state: AudioState,
}

impl AudioController {
    pub fn new(mut backend: Box<dyn AudioBackend>, settings: &AudioSettings) -> Self {
        backend.configure(settings);
        Self {
            backend,
            state: AudioState::default(),
        }
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn phase(&self) -> AudioPhase {
        self.state.phase()
    }

    /// Start playback. Does nothing if already playing.
    ///
    /// On rejection the controller stays idle and the failure is logged.
    pub async fn start(&mut self) -> Result<(), PlaybackError> {
        if self.state.is_playing {
            return Ok(());
        }

        match self.backend.play().await {
            Ok(()) => {
                self.state.is_playing = true;
                tracing::debug!(muted = self.state.is_muted, "ambient audio started");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "audio playback failed");
                Err(e)
            }
        }
    }

    /// Flip the mute flag and return the indicator to show.
    pub fn toggle_mute(&mut self) -> MuteIndicator {
        self.state.is_muted = !self.state.is_muted;
        self.backend.set_muted(self.state.is_muted);
        MuteIndicator::for_muted(self.state.is_muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockAudio;

    #[test]
    fn test_configures_backend() {
        let audio = MockAudio::new();
        let _controller =
            AudioController::new(Box::new(audio.clone()), &AudioSettings::default());

        let settings = audio.settings().unwrap();
        assert!(settings.looping);
        assert_eq!(settings.volume, 0.6);
    }

    #[tokio::test]
    async fn test_start_and_mute() {
        let audio = MockAudio::new();
        let mut controller =
            AudioController::new(Box::new(audio.clone()), &AudioSettings::default());
        assert_eq!(controller.phase(), AudioPhase::Idle);

        controller.start().await.unwrap();
        assert_eq!(controller.phase(), AudioPhase::Playing);

        assert_eq!(controller.toggle_mute(), MuteIndicator::SOUND_OFF);
        assert_eq!(controller.phase(), AudioPhase::Muted);
        assert!(audio.is_muted());

        assert_eq!(controller.toggle_mute(), MuteIndicator::SOUND_ON);
        assert_eq!(controller.phase(), AudioPhase::Playing);
        assert_eq!(audio.play_calls(), 1);
    }

    #[tokio::test]
    async fn test_rejected_playback_stays_idle() {
        let audio = MockAudio::rejecting("autoplay blocked");
        let mut controller =
            AudioController::new(Box::new(audio.clone()), &AudioSettings::default());

        let err = controller.start().await.unwrap_err();
        assert!(matches!(err, PlaybackError::Rejected { .. }));
        assert_eq!(controller.phase(), AudioPhase::Idle);
    }

    #[tokio::test]
    async fn test_start_is_idempotent() {
        let audio = MockAudio::new();
        let mut controller =
            AudioController::new(Box::new(audio.clone()), &AudioSettings::default());

        controller.start().await.unwrap();
        controller.start().await.unwrap();
        assert_eq!(audio.play_calls(), 1);
    }
}
