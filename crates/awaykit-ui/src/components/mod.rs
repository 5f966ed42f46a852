//! Yew components wrapping the awaykit detectors.

mod click_away;
mod dom;
mod swipe_away;

pub use click_away::{ClickAway, ClickAwayProps};
pub use swipe_away::{SwipeAway, SwipeAwayProps};
