//! Page configuration.
//!
//! Every field has a default equal to the stock page behavior, so an absent
//! or partial `<script type="application/json" id="portfolio-config">` island
//! only overrides what it names. Keys are camelCase to match the markup side.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use motion::consts;
use motion::typewriter::{Delays, Playlist, PlaylistError, TypewriterCycle};
use serde::Deserialize;

use crate::state::toast::ToastTiming;

/// Id of the JSON configuration island in the page.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub typing_texts: Vec<String>,
    pub typing_speed_ms: u32,
    pub delete_speed_ms: u32,
    pub pause_duration_ms: u32,
    pub inter_word_delay_ms: u32,
    /// Clearance below the header for anchor jumps, in px.
    pub scroll_offset: f64,
    pub animation_threshold: f64,
    pub fade_root_margin: String,
    pub nav_highlight_margin: f64,
    pub active_link_class: String,
    pub parallax_factor: f64,
    pub skill_bar_delay_ms: u32,
    pub toast: ToastTiming,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            typing_texts: consts::DEFAULT_PLAYLIST.iter().map(|p| (*p).to_owned()).collect(),
            typing_speed_ms: consts::TYPING_DELAY_MS,
            delete_speed_ms: consts::DELETING_DELAY_MS,
            pause_duration_ms: consts::PAUSE_DELAY_MS,
            inter_word_delay_ms: consts::INTER_WORD_DELAY_MS,
            scroll_offset: consts::SCROLL_OFFSET_PX,
            animation_threshold: consts::FADE_THRESHOLD,
            fade_root_margin: consts::FADE_ROOT_MARGIN.to_owned(),
            nav_highlight_margin: consts::NAV_HIGHLIGHT_MARGIN_PX,
            active_link_class: "text-purple-600".to_owned(),
            parallax_factor: consts::PARALLAX_FACTOR,
            skill_bar_delay_ms: consts::SKILL_BAR_DELAY_MS,
            toast: ToastTiming::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration island; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn delays(&self) -> Delays {
        Delays {
            typing_ms: self.typing_speed_ms,
            deleting_ms: self.delete_speed_ms,
            pause_ms: self.pause_duration_ms,
            inter_word_ms: self.inter_word_delay_ms,
        }
    }

    /// Build the hero typewriter from the configured phrases and delays.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError`] when the phrase list or one of its entries is empty.
    pub fn typewriter(&self) -> Result<TypewriterCycle, PlaylistError> {
        let playlist = Playlist::new(self.typing_texts.iter().cloned())?;
        Ok(TypewriterCycle::new(playlist, self.delays()))
    }
}
