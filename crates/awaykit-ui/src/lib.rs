#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Yew bindings for the awaykit detectors.
//! `ClickAway` and `SwipeAway` wrap browser listeners around the DOM-free detectors in
//! `awaykit-core`; the demo page wires both together.

pub mod demo;

pub use awaykit_core::{ClickTrigger, Direction, SwipeScope};

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
#[cfg(target_arch = "wasm32")]
pub use components::{ClickAway, SwipeAway};

#[cfg(test)]
mod tests {
    use crate::demo::{self, DEMO_SWIPE_DIRECTIONS};
    use crate::{Direction, SwipeScope};

    #[test]
    fn labels_follow_interaction_state() {
        assert_eq!(demo::click_label(false), "Click Me");
        assert_eq!(demo::click_label(true), "Click Away");
        assert_eq!(demo::swipe_label(false), "Swipe Right");
        assert_eq!(demo::swipe_label(true), "Swiped");
    }

    #[test]
    fn demo_swipe_config_is_valid() -> anyhow::Result<()> {
        let config = demo::swipe_config()?;
        assert_eq!(
            config.directions().iter().collect::<Vec<_>>(),
            DEMO_SWIPE_DIRECTIONS.to_vec()
        );
        assert_eq!(config.scope(), SwipeScope::Element);
        assert!(!config.directions().contains(Direction::Left));
        Ok(())
    }
}
