//! Swipe session tracking.
//!
//! # Design
//! - [`SwipeTracker`] is the per-touch state machine: Idle, Tracking, Armed.
//! - [`SwipeDetector`] adds the host callback, scope routing, and attach/detach so a host
//!   can mirror listener placement and teardown.
//! - Configuration changes are applied in place and never disturb an in-flight session,
//!   except a scope change, which relocates listeners and abandons the session.

use tracing::{debug, trace};

use crate::config::{EventSource, GestureConfig};
use crate::direction::{Direction, Point};

/// One touch event, reduced to what the tracker needs.
///
/// `None` points stand for events without an active touch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchInput {
    /// `touchstart` with the first touch point.
    Start(Option<Point>),
    /// `touchmove` with the first touch point.
    Move(Option<Point>),
    /// `touchend`.
    End,
}

/// Observable state of the current touch session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipePhase {
    /// No touch in progress.
    Idle,
    /// Touch in progress, threshold not crossed yet.
    Tracking,
    /// Threshold crossed; the callback fires on touch-end.
    Armed,
}

/// Bookkeeping for one touch-start to touch-end sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSession {
    origin: Point,
    crossed: Option<Direction>,
}

impl TouchSession {
    /// Where the touch started.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Whether a configured direction has crossed the threshold.
    #[must_use]
    pub const fn triggered(&self) -> bool {
        self.crossed.is_some()
    }
}

/// Per-detector swipe state machine.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    config: GestureConfig,
    session: Option<TouchSession>,
}

impl SwipeTracker {
    /// Idle tracker for `config`.
    #[must_use]
    pub const fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Swap the configuration; the current session keeps its origin and trigger state.
    pub const fn reconfigure(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Current session, if a touch is in progress.
    #[must_use]
    pub const fn session(&self) -> Option<&TouchSession> {
        self.session.as_ref()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SwipePhase {
        match self.session {
            None => SwipePhase::Idle,
            Some(TouchSession { crossed: None, .. }) => SwipePhase::Tracking,
            Some(TouchSession {
                crossed: Some(_), ..
            }) => SwipePhase::Armed,
        }
    }

    /// Begin a new session at `point`, replacing any session in progress.
    pub fn start(&mut self, point: Option<Point>) {
        let Some(origin) = point else {
            trace!("touch-start without touch point ignored");
            return;
        };
        trace!(x = origin.x, y = origin.y, "swipe session started");
        self.session = Some(TouchSession {
            origin,
            crossed: None,
        });
    }

    /// Feed a move; returns the direction that crossed on this event, if any.
    pub fn update(&mut self, point: Option<Point>) -> Option<Direction> {
        let current = point?;
        let session = self.session.as_mut()?;
        if session.crossed.is_some() {
            return None;
        }
        let threshold = self.config.threshold();
        let crossed = self
            .config
            .directions()
            .iter()
            .find(|direction| direction.displacement(session.origin, current) >= threshold)?;
        debug!(direction = crossed.as_str(), threshold, "swipe threshold crossed");
        session.crossed = Some(crossed);
        Some(crossed)
    }

    /// End the session; returns the winning direction when the swipe qualified.
    pub fn finish(&mut self) -> Option<Direction> {
        self.session.take().and_then(|session| session.crossed)
    }

    /// Drop the session without reporting anything.
    pub fn abandon(&mut self) {
        if self.session.take().is_some() {
            trace!("swipe session abandoned");
        }
    }

    /// Apply one input; returns the direction when this input completed a swipe.
    pub fn apply(&mut self, input: TouchInput) -> Option<Direction> {
        match input {
            TouchInput::Start(point) => {
                self.start(point);
                None
            }
            TouchInput::Move(point) => {
                self.update(point);
                None
            }
            TouchInput::End => self.finish(),
        }
    }
}

/// Swipe detector bound to a host callback.
///
/// The detector starts attached. Hosts mirror listener teardown with [`Self::detach`]
/// and route events with [`Self::handle_from`] when they dispatch from several targets.
pub struct SwipeDetector<F> {
    tracker: SwipeTracker,
    callback: Option<F>,
    attached: bool,
}

impl<F: FnMut()> SwipeDetector<F> {
    /// Attached detector for `config`.
    #[must_use]
    pub const fn new(config: GestureConfig, callback: Option<F>) -> Self {
        Self {
            tracker: SwipeTracker::new(config),
            callback,
            attached: true,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        self.tracker.config()
    }

    /// Current phase of the underlying session.
    #[must_use]
    pub const fn phase(&self) -> SwipePhase {
        self.tracker.phase()
    }

    /// Whether listeners are currently attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Replace the completion callback.
    pub fn set_callback(&mut self, callback: Option<F>) {
        self.callback = callback;
    }

    /// Apply a new configuration.
    ///
    /// Threshold and direction changes take effect on the next move. A scope change
    /// relocates listeners, so the in-flight session is abandoned.
    pub fn reconfigure(&mut self, config: GestureConfig) {
        if config.scope() != self.tracker.config().scope() {
            debug!(
                from = self.tracker.config().scope().as_str(),
                to = config.scope().as_str(),
                "swipe listeners relocated"
            );
            self.tracker.abandon();
        }
        self.tracker.reconfigure(config);
    }

    /// Re-attach after [`Self::detach`].
    pub const fn attach(&mut self) {
        self.attached = true;
    }

    /// Detach listeners; the in-flight session is abandoned and never fires.
    pub fn detach(&mut self) {
        self.tracker.abandon();
        self.attached = false;
    }

    /// Handle an input delivered by listeners already placed for the configured scope.
    ///
    /// Returns `true` when the callback fired.
    pub fn handle(&mut self, input: TouchInput) -> bool {
        if !self.attached {
            return false;
        }
        let Some(direction) = self.tracker.apply(input) else {
            return false;
        };
        debug!(direction = direction.as_str(), "swipe completed");
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
        true
    }

    /// Handle an input dispatched on `source`, ignoring sources outside the scope.
    pub fn handle_from(&mut self, source: EventSource, input: TouchInput) -> bool {
        if !self.tracker.config().scope().listens_on(source) {
            return false;
        }
        self.handle(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SwipeScope;
    use crate::direction::DirectionSet;

    fn config(directions: &[Direction]) -> GestureConfig {
        GestureConfig::new(100.0, DirectionSet::from(directions), SwipeScope::Element)
            .expect("valid config")
    }

    fn at(x: f64, y: f64) -> Option<Point> {
        Some(Point::new(x, y))
    }

    #[test]
    fn phases_follow_session() {
        let mut tracker = SwipeTracker::new(config(&[Direction::Left]));
        assert_eq!(tracker.phase(), SwipePhase::Idle);
        tracker.start(at(200.0, 0.0));
        assert_eq!(tracker.phase(), SwipePhase::Tracking);
        assert_eq!(tracker.update(at(150.0, 0.0)), None);
        assert_eq!(tracker.phase(), SwipePhase::Tracking);
        assert_eq!(tracker.update(at(100.0, 0.0)), Some(Direction::Left));
        assert_eq!(tracker.phase(), SwipePhase::Armed);
        assert_eq!(tracker.finish(), Some(Direction::Left));
        assert_eq!(tracker.phase(), SwipePhase::Idle);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut tracker = SwipeTracker::new(config(&[Direction::Right]));
        tracker.start(at(0.0, 0.0));
        assert_eq!(tracker.update(at(99.5, 0.0)), None);
        assert_eq!(tracker.update(at(100.0, 0.0)), Some(Direction::Right));
    }

    #[test]
    fn first_configured_direction_wins() {
        let mut tracker = SwipeTracker::new(config(&[Direction::Down, Direction::Left]));
        tracker.start(at(300.0, 100.0));
        assert_eq!(tracker.update(at(150.0, 260.0)), Some(Direction::Left));
        // Further movement never re-triggers within the session.
        assert_eq!(tracker.update(at(0.0, 500.0)), None);
        assert_eq!(tracker.finish(), Some(Direction::Left));
    }

    #[test]
    fn vertical_directions_use_y_axis() {
        let mut tracker = SwipeTracker::new(config(&[Direction::Up]));
        tracker.start(at(10.0, 400.0));
        assert_eq!(tracker.update(at(300.0, 350.0)), None);
        assert_eq!(tracker.update(at(10.0, 290.0)), Some(Direction::Up));
    }

    #[test]
    fn missing_points_are_no_ops() {
        let mut tracker = SwipeTracker::new(config(&[Direction::Left]));
        tracker.start(None);
        assert_eq!(tracker.phase(), SwipePhase::Idle);
        assert_eq!(tracker.update(at(0.0, 0.0)), None);

        tracker.start(at(200.0, 0.0));
        assert_eq!(tracker.update(None), None);
        assert_eq!(tracker.phase(), SwipePhase::Tracking);
    }

    #[test]
    fn restart_resets_session() {
        let mut tracker = SwipeTracker::new(config(&[Direction::Left]));
        tracker.start(at(200.0, 0.0));
        tracker.update(at(50.0, 0.0));
        assert_eq!(tracker.phase(), SwipePhase::Armed);
        tracker.start(at(400.0, 0.0));
        assert_eq!(tracker.phase(), SwipePhase::Tracking);
        assert_eq!(tracker.session().map(TouchSession::origin), at(400.0, 0.0));
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn reconfigure_keeps_session() {
        let mut tracker = SwipeTracker::new(config(&[Direction::Left]));
        tracker.start(at(200.0, 0.0));
        tracker.reconfigure(
            GestureConfig::new(20.0, DirectionSet::only(Direction::Left), SwipeScope::Element)
                .expect("valid config"),
        );
        assert_eq!(tracker.update(at(170.0, 0.0)), Some(Direction::Left));
    }

    #[test]
    fn detector_without_callback_still_reports() {
        let mut detector = SwipeDetector::<fn()>::new(config(&[Direction::Left]), None);
        detector.handle(TouchInput::Start(at(200.0, 0.0)));
        detector.handle(TouchInput::Move(at(50.0, 0.0)));
        assert!(detector.handle(TouchInput::End));
    }
}
