//! Click-away classification.
//!
//! The detector owns the host's notification callback and decides, per pointer-down,
//! whether the event landed inside the wrapped region. Hosts supply containment through
//! [`ClickRegion`], which keeps the decision independent of any DOM binding.

use tracing::trace;

use crate::direction::Point;

/// Region a pointer-down can land inside.
pub trait ClickRegion {
    /// Event target type the region is tested against.
    type Target: ?Sized;

    /// Whether `target` lies within this region.
    fn contains(&self, target: &Self::Target) -> bool;
}

/// Axis-aligned rectangle in viewport coordinates, for hosts without a node tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Bounds {
    /// Build a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

impl ClickRegion for Bounds {
    type Target = Point;

    fn contains(&self, target: &Point) -> bool {
        target.x >= self.left
            && target.x <= self.left + self.width
            && target.y >= self.top
            && target.y <= self.top + self.height
    }
}

/// Which side of the wrapped region a pointer-down landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickSide {
    /// Target is within the region.
    Inside,
    /// Target is outside the region, or there was no target.
    Outside,
}

impl ClickSide {
    /// Flag passed to the host callback.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        matches!(self, Self::Inside)
    }
}

/// Reports whether each pointer-down landed inside a wrapped region.
pub struct OutsideClickDetector<F> {
    callback: Option<F>,
}

impl<F: FnMut(bool)> OutsideClickDetector<F> {
    /// Detector notifying `callback` with `true` for inside clicks and `false` otherwise.
    #[must_use]
    pub const fn new(callback: Option<F>) -> Self {
        Self { callback }
    }

    /// Replace the notification callback; the next event reaches the new one.
    pub fn set_callback(&mut self, callback: Option<F>) {
        self.callback = callback;
    }

    /// Classify one pointer-down.
    ///
    /// Returns `None` without notifying when the region is not resolvable yet (the wrapped
    /// element has not mounted). A missing target counts as outside.
    pub fn handle<R: ClickRegion>(
        &mut self,
        region: Option<&R>,
        target: Option<&R::Target>,
    ) -> Option<ClickSide> {
        let Some(region) = region else {
            trace!("click region unresolved; pointer-down ignored");
            return None;
        };
        let side = match target {
            Some(target) if region.contains(target) => ClickSide::Inside,
            _ => ClickSide::Outside,
        };
        if let Some(callback) = self.callback.as_mut() {
            callback(side.is_inside());
        }
        Some(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn card() -> Bounds {
        Bounds::new(10.0, 10.0, 100.0, 50.0)
    }

    #[test]
    fn reports_inside_and_outside() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut detector =
            OutsideClickDetector::new(Some(move |inside: bool| sink.borrow_mut().push(inside)));

        let region = card();
        assert_eq!(
            detector.handle(Some(&region), Some(&Point::new(50.0, 30.0))),
            Some(ClickSide::Inside)
        );
        assert_eq!(
            detector.handle(Some(&region), Some(&Point::new(200.0, 30.0))),
            Some(ClickSide::Outside)
        );
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn unresolved_region_is_ignored() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut detector =
            OutsideClickDetector::new(Some(move |_: bool| *counter.borrow_mut() += 1));

        assert_eq!(
            detector.handle::<Bounds>(None, Some(&Point::new(1.0, 1.0))),
            None
        );
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn missing_target_counts_as_outside() {
        let mut detector = OutsideClickDetector::<fn(bool)>::new(None);
        assert_eq!(
            detector.handle(Some(&card()), None),
            Some(ClickSide::Outside)
        );
    }

    #[test]
    fn replaced_callback_receives_next_event() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let region = card();

        let sink: Rc<RefCell<Vec<bool>>> = Rc::clone(&first);
        let mut detector: OutsideClickDetector<Box<dyn FnMut(bool)>> =
            OutsideClickDetector::new(Some(Box::new(move |inside: bool| {
                sink.borrow_mut().push(inside);
            })));
        detector.handle(Some(&region), Some(&Point::new(20.0, 20.0)));

        let sink = Rc::clone(&second);
        detector.set_callback(Some(Box::new(move |inside: bool| {
            sink.borrow_mut().push(inside);
        })));
        detector.handle(Some(&region), Some(&Point::new(500.0, 20.0)));

        assert_eq!(*first.borrow(), vec![true]);
        assert_eq!(*second.borrow(), vec![false]);
    }
}
