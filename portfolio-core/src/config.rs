//! Page configuration.

use static_client::{BASE_URL_ENV, DEFAULT_BASE_URL};

/// Site identifier registered with the verification provider.
pub const DEFAULT_SITE_KEY: &str = "6LcTWBMqAAAAAEtY30zw0JD5hRFsjAu0ViwE3FiX";

/// Action name the verification token is issued for.
pub const FETCH_ACTION: &str = "fetch_json";

const DEFAULT_AUDIO_URL: &str =
    "https://storage.cloud.google.com/resume_connorisseur_com_music/Rainy_Music.mp3";

/// Ambient audio settings applied when the backend is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSettings {
    /// Track to play.
    pub source_url: String,

    /// Output volume in `0.0..=1.0`.
    pub volume: f32,

    /// Restart the track when it ends.
    pub looping: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_AUDIO_URL.to_string(),
            volume: 0.6,
            looping: true,
        }
    }
}

/// Configuration for a portfolio page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Root of the static resource server.
    pub base_url: String,

    /// Verification provider site key.
    pub site_key: String,

    /// Verification action name.
    pub action: String,

    /// Background audio.
    pub audio: AudioSettings,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            site_key: DEFAULT_SITE_KEY.to_string(),
            action: FETCH_ACTION.to_string(),
            audio: AudioSettings::default(),
        }
    }
}

impl PageConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from the environment, loading `.env` first if present.
    ///
    /// Reads `PORTFOLIO_BASE_URL`, `PORTFOLIO_SITE_KEY` and `PORTFOLIO_AUDIO_URL`;
    /// anything unset keeps its default.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.base_url = url;
        }
        if let Ok(key) = std::env::var("PORTFOLIO_SITE_KEY") {
            config.site_key = key;
        }
        if let Ok(url) = std::env::var("PORTFOLIO_AUDIO_URL") {
            config.audio.source_url = url;
        }
        config
    }

    /// Set the resource server root.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the verification site key.
    pub fn with_site_key(mut self, key: impl Into<String>) -> Self {
        self.site_key = key.into();
        self
    }

    /// Set the audio source.
    pub fn with_audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio.source_url = url.into();
        self
    }

    /// Set the audio volume, clamped to `0.0..=1.0`.
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.audio.volume = volume.clamp(0.0, 1.0);
        self
    }
}
