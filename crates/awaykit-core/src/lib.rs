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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! DOM-free click-away and swipe detection.
//!
//! Layout: `direction.rs` (directions, direction sets, points), `config.rs` (validated
//! detector configuration), `click.rs` (inside/outside classification), `swipe.rs` (touch
//! session state machine and detector), `error.rs` (error taxonomy).

pub mod click;
pub mod config;
pub mod direction;
pub mod error;
pub mod swipe;

pub use click::{Bounds, ClickRegion, ClickSide, OutsideClickDetector};
pub use config::{
    ClickTrigger, DEFAULT_DIRECTIONS, DEFAULT_THRESHOLD, EventSource, GestureConfig, SwipeScope,
};
pub use direction::{Direction, DirectionSet, Point};
pub use error::{GestureError, GestureResult};
pub use swipe::{SwipeDetector, SwipePhase, SwipeTracker, TouchInput, TouchSession};
