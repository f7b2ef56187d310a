//! Default timings and geometry for the page effects.

// ── Typewriter ──────────────────────────────────────────────────

/// Delay between typed characters, in milliseconds.
pub const TYPING_DELAY_MS: u32 = 100;

/// Delay between deleted characters, in milliseconds.
pub const DELETING_DELAY_MS: u32 = 50;

/// Hold time once a phrase is fully typed.
pub const PAUSE_DELAY_MS: u32 = 2000;

/// Gap between finishing a deletion and typing the next phrase.
pub const INTER_WORD_DELAY_MS: u32 = 500;

/// Phrases cycled by the hero typing effect.
pub const DEFAULT_PLAYLIST: [&str; 5] = [
    "Full Stack Developer",
    "UI/UX Designer",
    "Problem Solver",
    "Tech Enthusiast",
    "Creative Thinker",
];

// ── Scrolling ───────────────────────────────────────────────────

/// Extra clearance below the fixed header when jumping to an anchor, in px.
pub const SCROLL_OFFSET_PX: f64 = 80.0;

/// Slack above a section's top at which its nav link becomes active, in px.
pub const NAV_HIGHLIGHT_MARGIN_PX: f64 = 50.0;

/// Vertical translation per scrolled pixel for hero decorations.
pub const PARALLAX_FACTOR: f64 = 0.5;

// ── Reveal animations ───────────────────────────────────────────

/// Fraction of a section that must intersect before it fades in.
pub const FADE_THRESHOLD: f64 = 0.1;

/// Intersection root margin; shrinks the bottom edge so sections fade in a bit late.
pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Time a skill bar sits at 0% before growing to its target width.
pub const SKILL_BAR_DELAY_MS: u32 = 200;

// ── Notifications ───────────────────────────────────────────────

/// Time between inserting a toast and sliding it in.
pub const TOAST_SHOW_DELAY_MS: u32 = 100;

/// Time a toast stays on screen.
pub const TOAST_VISIBLE_MS: u32 = 3000;

/// Exit transition length before the toast is removed.
pub const TOAST_EXIT_MS: u32 = 300;
