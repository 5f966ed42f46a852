//! Browser glue shared by the components.

use awaykit_core::{ClickRegion, Point};
use wasm_bindgen::JsCast;
use web_sys::{Event, Node, TouchEvent};

/// Rendered subtree of a wrapped element.
pub(super) struct DomRegion(pub(super) Node);

impl ClickRegion for DomRegion {
    type Target = Node;

    fn contains(&self, target: &Node) -> bool {
        self.0.contains(Some(target))
    }
}

/// Node an event was dispatched on, when it is one.
pub(super) fn target_node(event: &Event) -> Option<Node> {
    event.target()?.dyn_into::<Node>().ok()
}

/// Client coordinates of the first active touch point.
pub(super) fn first_touch(event: &Event) -> Option<Point> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(Point::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}
