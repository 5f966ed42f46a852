use std::cell::RefCell;
use std::rc::Rc;

use awaykit_core::{
    DEFAULT_THRESHOLD, Direction, EventSource, GestureConfig, SwipeDetector, SwipeScope,
    TouchInput,
};
use gloo::console;
use gloo::events::EventListener;
use web_sys::{Event, EventTarget, HtmlElement};
use yew::prelude::*;

use super::dom::first_touch;

type SharedDetector = Rc<RefCell<SwipeDetector<Box<dyn FnMut()>>>>;

/// Fires a callback when a touch drag travels far enough in a configured direction.
#[derive(Properties, PartialEq)]
pub struct SwipeAwayProps {
    /// Content rendered inside (or, for the viewport scope, without) the swipe area.
    #[prop_or_default]
    pub children: Children,
    /// Invoked once per qualifying swipe, on touch-end.
    #[prop_or_default]
    pub callback: Option<Callback<()>>,
    /// Minimum travel in CSS pixels.
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
    /// Listen on a wrapping container or on the whole window.
    #[prop_or_default]
    pub scope: SwipeScope,
    /// Directions that complete a swipe.
    #[prop_or_else(default_directions)]
    pub directions: Vec<Direction>,
    /// Classes for the wrapping container; unused for the viewport scope.
    #[prop_or_default]
    pub class: Classes,
}

fn default_directions() -> Vec<Direction> {
    vec![Direction::Left]
}

/// Swipe detector around its children.
///
/// Threshold, direction, and callback changes reach the live detector without
/// re-registering listeners; a scope change moves the listeners and drops any swipe in
/// progress. Invalid settings leave the detector inert.
#[function_component(SwipeAway)]
pub fn swipe_away(props: &SwipeAwayProps) -> Html {
    let container = use_node_ref();
    let config = GestureConfig::new(
        props.threshold,
        props.directions.as_slice(),
        props.scope,
    );
    let initial = config.clone().unwrap_or_default();
    let detector: SharedDetector = use_mut_ref(move || SwipeDetector::new(initial, None));

    {
        let detector = detector.clone();
        use_effect_with_deps(
            move |(config, callback)| {
                let mut detector = detector.borrow_mut();
                match config {
                    Ok(config) => detector.reconfigure(*config),
                    Err(err) => {
                        console::warn!("swipe detector disabled", err.to_string());
                    }
                }
                detector.set_callback(callback.clone().map(|callback| {
                    Box::new(move || callback.emit(())) as Box<dyn FnMut()>
                }));
                || ()
            },
            (config.clone(), props.callback.clone()),
        );
    }

    {
        let container = container.clone();
        use_effect_with_deps(
            move |scope| {
                let target = match scope {
                    Some(SwipeScope::Element) => {
                        container.cast::<HtmlElement>().map(EventTarget::from)
                    }
                    Some(SwipeScope::Viewport) => web_sys::window().map(EventTarget::from),
                    None => None,
                };
                if scope.is_some() && target.is_none() {
                    console::warn!("swipe detector inactive: no event target available");
                }
                let listeners = target
                    .zip(*scope)
                    .map(|(target, scope)| listen(&target, scope.source(), &detector));
                if listeners.is_some() {
                    detector.borrow_mut().attach();
                }
                move || {
                    drop(listeners);
                    detector.borrow_mut().detach();
                }
            },
            config.ok().map(|config| config.scope()),
        );
    }

    if props.scope == SwipeScope::Viewport {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! {
            <div ref={container} class={props.class.clone()}>
                { for props.children.iter() }
            </div>
        }
    }
}

/// Register touch listeners on `target`, tagging each event with `source` so events from
/// listeners left over from a previous scope are ignored by the detector.
fn listen(
    target: &EventTarget,
    source: EventSource,
    detector: &SharedDetector,
) -> [EventListener; 3] {
    let on = |name: &'static str, input: fn(&Event) -> TouchInput| {
        let detector = Rc::clone(detector);
        EventListener::new(target, name, move |event| {
            detector.borrow_mut().handle_from(source, input(event));
        })
    };
    [
        on("touchstart", |event| TouchInput::Start(first_touch(event))),
        on("touchmove", |event| TouchInput::Move(first_touch(event))),
        on("touchend", |_| TouchInput::End),
    ]
}
