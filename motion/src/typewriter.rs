//! Typewriter cycle: types and deletes playlist phrases forever.
//!
//! DESIGN
//! ======
//! [`Cursor::advance`] is a pure transition over an immutable [`Playlist`];
//! [`TypewriterCycle`] owns one cursor and hands out [`Step`]s. The caller
//! renders `Step::text` and waits the delay chosen by `Step::delay` before the next tick, so
//! ticks never overlap and no timer lives in this crate.
//!
//! Lengths are counted in `char`s, not bytes.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::consts::{DEFAULT_PLAYLIST, DELETING_DELAY_MS, INTER_WORD_DELAY_MS, PAUSE_DELAY_MS, TYPING_DELAY_MS};

/// Error returned by [`Playlist::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaylistError {
    /// The playlist has no phrases.
    #[error("typewriter playlist is empty")]
    Empty,
    /// A phrase has no characters; typing it would overrun the cursor.
    #[error("typewriter playlist entry {0} is empty")]
    EmptyEntry(usize),
}

/// Ordered, cyclic, read-only list of phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    phrases: Vec<String>,
    lengths: Vec<usize>,
}

impl Playlist {
    /// Build a playlist, rejecting an empty list or any empty phrase.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError`] when the list or one of its entries is empty.
    pub fn new<I, S>(phrases: I) -> Result<Self, PlaylistError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(PlaylistError::Empty);
        }
        if let Some(idx) = phrases.iter().position(String::is_empty) {
            return Err(PlaylistError::EmptyEntry(idx));
        }
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self { phrases, lengths })
    }

    /// Number of phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always `false`; construction rejects empty playlists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrase at `index`, if any.
    #[must_use]
    pub fn phrase(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }

    /// Length of the phrase at `index` in characters (0 when out of range).
    #[must_use]
    pub fn char_len(&self, index: usize) -> usize {
        self.lengths.get(index).copied().unwrap_or(0)
    }

    /// Ticks needed to type and delete every phrase once.
    #[must_use]
    pub fn period(&self) -> usize {
        self.lengths.iter().map(|len| len * 2).sum()
    }

    /// First `chars` characters of the phrase at `index`.
    fn prefix(&self, index: usize, chars: usize) -> String {
        self.phrase(index)
            .map(|p| p.chars().take(chars).collect())
            .unwrap_or_default()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        let phrases: Vec<String> = DEFAULT_PLAYLIST.iter().map(|p| (*p).to_owned()).collect();
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        Self { phrases, lengths }
    }
}

/// Direction the cursor is currently moving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Typing,
    Deleting,
}

/// Tick delays in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delays {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    /// Used after the last character of a phrase is typed.
    pub pause_ms: u32,
    /// Used after the last character of a phrase is deleted.
    pub inter_word_ms: u32,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            typing_ms: TYPING_DELAY_MS,
            deleting_ms: DELETING_DELAY_MS,
            pause_ms: PAUSE_DELAY_MS,
            inter_word_ms: INTER_WORD_DELAY_MS,
        }
    }
}

/// What a delay was chosen for; lets callers and tests tell pauses apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelayKind {
    Typing,
    Deleting,
    Pause,
    InterWord,
}

impl DelayKind {
    #[must_use]
    pub fn millis(self, delays: &Delays) -> u32 {
        match self {
            Self::Typing => delays.typing_ms,
            Self::Deleting => delays.deleting_ms,
            Self::Pause => delays.pause_ms,
            Self::InterWord => delays.inter_word_ms,
        }
    }
}

/// Position of the typewriter within the playlist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub playlist_index: usize,
    pub char_count: usize,
    pub mode: Mode,
}

/// Output of one tick: the text to display and how long to wait.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub delay: DelayKind,
}

impl Cursor {
    /// Apply one tick and return the new cursor with the frame to render.
    #[must_use]
    pub fn advance(self, playlist: &Playlist) -> (Cursor, Step) {
        let len = playlist.char_len(self.playlist_index);
        let mut next = self;
        let delay = match self.mode {
            Mode::Typing => {
                next.char_count = (self.char_count + 1).min(len);
                if next.char_count == len {
                    next.mode = Mode::Deleting;
                    DelayKind::Pause
                } else {
                    DelayKind::Typing
                }
            }
            Mode::Deleting => {
                next.char_count = self.char_count.saturating_sub(1);
                if next.char_count == 0 {
                    next.mode = Mode::Typing;
                    next.playlist_index = (self.playlist_index + 1) % playlist.len().max(1);
                    DelayKind::InterWord
                } else {
                    DelayKind::Deleting
                }
            }
        };
        let text = playlist.prefix(self.playlist_index, next.char_count);
        (next, Step { text, delay })
    }
}

/// A playlist, its delays, and the live cursor.
#[derive(Clone, Debug)]
pub struct TypewriterCycle {
    playlist: Playlist,
    delays: Delays,
    cursor: Cursor,
}

impl TypewriterCycle {
    #[must_use]
    pub fn new(playlist: Playlist, delays: Delays) -> Self {
        Self { playlist, delays, cursor: Cursor::default() }
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Advance one tick. Returns the text to show and the wait before the next tick.
    pub fn tick(&mut self) -> (String, u32) {
        let step = self.step();
        let millis = step.delay.millis(&self.delays);
        (step.text, millis)
    }

    fn step(&mut self) -> Step {
        let (cursor, step) = self.cursor.advance(&self.playlist);
        self.cursor = cursor;
        step
    }
}

impl Default for TypewriterCycle {
    fn default() -> Self {
        Self::new(Playlist::default(), Delays::default())
    }
}

impl Iterator for TypewriterCycle {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        Some(self.step())
    }
}
