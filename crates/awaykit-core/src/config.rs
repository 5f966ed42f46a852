//! Detector configuration models and validation.
//!
//! # Design
//! - `GestureConfig` can only be built through validation, both from code and from JSON.
//! - Omitted JSON fields fall back to the same defaults the components use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::direction::{Direction, DirectionSet};
use crate::error::{GestureError, GestureResult};

/// Default swipe threshold in CSS pixels.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Default direction set (a left swipe).
pub const DEFAULT_DIRECTIONS: DirectionSet = DirectionSet::only(Direction::Left);

/// Where swipe listeners are attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeScope {
    /// Listen on a container element wrapping the children.
    #[default]
    Element,
    /// Listen on the global window; children render unwrapped.
    Viewport,
}

impl SwipeScope {
    /// Lowercase name used in configuration payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Viewport => "viewport",
        }
    }

    /// Event target this scope's listeners are registered on.
    #[must_use]
    pub const fn source(self) -> EventSource {
        match self {
            Self::Element => EventSource::Container,
            Self::Viewport => EventSource::Viewport,
        }
    }

    /// Whether listeners for this scope receive events dispatched on `source`.
    #[must_use]
    pub const fn listens_on(self, source: EventSource) -> bool {
        matches!(
            (self, source),
            (Self::Element, EventSource::Container) | (Self::Viewport, EventSource::Viewport)
        )
    }
}

impl fmt::Display for SwipeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwipeScope {
    type Err = GestureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "element" => Ok(Self::Element),
            "viewport" | "window" => Ok(Self::Viewport),
            _ => Err(GestureError::UnknownScope {
                value: value.to_string(),
            }),
        }
    }
}

/// Event target an input event was dispatched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventSource {
    /// The detector's own container element.
    Container,
    /// The global window.
    Viewport,
}

/// Validated swipe detector configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGestureConfig", into = "RawGestureConfig")]
pub struct GestureConfig {
    threshold: f64,
    directions: DirectionSet,
    scope: SwipeScope,
}

impl GestureConfig {
    /// Build a configuration, rejecting non-positive thresholds and empty direction sets.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidThreshold`] when `threshold` is not finite or not
    /// greater than zero, and [`GestureError::EmptyDirections`] when `directions` is empty.
    pub fn new(
        threshold: f64,
        directions: impl Into<DirectionSet>,
        scope: SwipeScope,
    ) -> GestureResult<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(GestureError::InvalidThreshold { value: threshold });
        }
        let directions = directions.into();
        if directions.is_empty() {
            return Err(GestureError::EmptyDirections);
        }
        Ok(Self {
            threshold,
            directions,
            scope,
        })
    }

    /// Decode a JSON payload such as `{"threshold": 80, "directions": ["right"]}`.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidConfig`] for malformed JSON or unknown fields, and
    /// the validation errors of [`GestureConfig::new`] for out-of-range values.
    pub fn from_json(payload: &str) -> GestureResult<Self> {
        let raw: RawGestureConfig =
            serde_json::from_str(payload).map_err(|err| GestureError::InvalidConfig {
                detail: err.to_string(),
            })?;
        Self::try_from(raw)
    }

    /// Minimum displacement, in pixels, that qualifies as a swipe.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Directions that can complete a swipe.
    #[must_use]
    pub const fn directions(&self) -> DirectionSet {
        self.directions
    }

    /// Listener placement.
    #[must_use]
    pub const fn scope(&self) -> SwipeScope {
        self.scope
    }

    /// Copy of this configuration with a different scope.
    #[must_use]
    pub const fn with_scope(mut self, scope: SwipeScope) -> Self {
        self.scope = scope;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            directions: DEFAULT_DIRECTIONS,
            scope: SwipeScope::Element,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawGestureConfig {
    threshold: f64,
    directions: DirectionSet,
    scope: SwipeScope,
}

impl Default for RawGestureConfig {
    fn default() -> Self {
        GestureConfig::default().into()
    }
}

impl TryFrom<RawGestureConfig> for GestureConfig {
    type Error = GestureError;

    fn try_from(raw: RawGestureConfig) -> Result<Self, Self::Error> {
        Self::new(raw.threshold, raw.directions, raw.scope)
    }
}

impl From<GestureConfig> for RawGestureConfig {
    fn from(config: GestureConfig) -> Self {
        Self {
            threshold: config.threshold,
            directions: config.directions,
            scope: config.scope,
        }
    }
}

/// DOM event a click-away detector listens for on the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickTrigger {
    /// `mousedown`, fired for mouse buttons only.
    #[default]
    MouseDown,
    /// `pointerdown`, fired for mouse, pen, and touch.
    PointerDown,
    /// `touchstart`, fired for touch contacts only.
    TouchStart,
}

impl ClickTrigger {
    /// DOM event name to register.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::PointerDown => "pointerdown",
            Self::TouchStart => "touchstart",
        }
    }
}

impl FromStr for ClickTrigger {
    type Err = GestureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mousedown" => Ok(Self::MouseDown),
            "pointerdown" => Ok(Self::PointerDown),
            "touchstart" => Ok(Self::TouchStart),
            _ => Err(GestureError::UnknownTrigger {
                value: value.to_string(),
            }),
        }
    }
}
