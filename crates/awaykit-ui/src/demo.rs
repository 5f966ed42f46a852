//! Copy and settings for the demo page, kept DOM-free so they test natively.

use awaykit_core::{DEFAULT_THRESHOLD, Direction, GestureConfig, GestureResult, SwipeScope};

/// Directions the demo swipe panel reacts to.
pub const DEMO_SWIPE_DIRECTIONS: [Direction; 1] = [Direction::Right];

/// Hint shown under the swipe label until the panel is swiped.
pub const SWIPE_HINT: &str = "Open the inspector and emulate a touch screen";

/// Heading for the click card.
#[must_use]
pub const fn click_label(selected: bool) -> &'static str {
    if selected { "Click Away" } else { "Click Me" }
}

/// Heading for the swipe panel.
#[must_use]
pub const fn swipe_label(swiped: bool) -> &'static str {
    if swiped { "Swiped" } else { "Swipe Right" }
}

/// Swipe settings the demo panel is rendered with.
///
/// # Errors
///
/// Propagates validation errors from [`GestureConfig::new`].
pub fn swipe_config() -> GestureResult<GestureConfig> {
    GestureConfig::new(
        DEFAULT_THRESHOLD,
        &DEMO_SWIPE_DIRECTIONS[..],
        SwipeScope::Element,
    )
}
