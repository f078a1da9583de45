//! Page-level constants. Everything tunable about the landing page lives
//! here rather than scattered through the components.

/// localStorage key for the persisted theme choice.
pub const THEME_STORAGE_KEY: &str = "km-theme";

/// Autoplay cadence of the testimonial slider.
pub const AUTOPLAY_INTERVAL_MS: u32 = 4500;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 2600;

/// Fixed-header allowance subtracted when scrolling to an anchor target.
pub const HEADER_SCROLL_OFFSET: f64 = 70.0;

/// Scroll depth after which the sticky header casts its shadow.
pub const HEADER_SHADOW_THRESHOLD: f64 = 6.0;

/// Hero headline typed out by the typewriter.
pub const HERO_HEADLINE: &str = "Effortless hiring with human-friendly interviews";

/// Typewriter cadence per character.
pub const TYPEWRITER_TICK_MS: u32 = 40;

/// Shareable meeting link shown in the hero quick-actions card.
pub const DEMO_MEETING_LINK: &str = "https://meet.kindmeet.app/demo-room";

/// Delay between a successful demo submission and the modal closing.
pub const MODAL_CLOSE_DELAY_MS: u32 = 400;
