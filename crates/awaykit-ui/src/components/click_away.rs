use awaykit_core::{ClickTrigger, OutsideClickDetector};
use gloo::console;
use gloo::events::EventListener;
use yew::prelude::*;
use yew::virtual_dom::VNode;

use super::dom::{DomRegion, target_node};

/// Reports whether each pointer-down on the page landed inside the wrapped child.
#[derive(Properties, PartialEq)]
pub struct ClickAwayProps {
    /// Single element to watch. Extra children are dropped.
    pub children: Children,
    /// Receives `true` for presses inside the child and `false` for presses elsewhere.
    #[prop_or_default]
    pub callback: Option<Callback<bool>>,
    /// Window event treated as a press.
    #[prop_or_default]
    pub trigger: ClickTrigger,
}

/// Click-away detector around a single child element.
///
/// The window listener lives as long as the component; until the child has mounted,
/// presses are ignored.
#[function_component(ClickAway)]
pub fn click_away(props: &ClickAwayProps) -> Html {
    let node_ref = use_node_ref();

    // A new callback or trigger replaces the window listener, so presses always reach the
    // latest callback.
    {
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |(callback, trigger)| {
                let listener = web_sys::window().map(|window| {
                    let mut detector = OutsideClickDetector::new(
                        callback
                            .clone()
                            .map(|callback| move |inside: bool| callback.emit(inside)),
                    );
                    EventListener::new(&window, trigger.event_name(), move |event| {
                        let region = node_ref.cast::<web_sys::Node>().map(DomRegion);
                        let target = target_node(event);
                        detector.handle(region.as_ref(), target.as_ref());
                    })
                });
                if listener.is_none() {
                    console::warn!("click-away inactive: no window available");
                }
                move || drop(listener)
            },
            (props.callback.clone(), props.trigger),
        );
    }

    let mut children = props.children.iter();
    let Some(child) = children.next() else {
        return html! {};
    };
    if children.next().is_some() {
        console::warn!("ClickAway expects a single child; extra children are not rendered");
    }
    with_node_ref(child, node_ref)
}

/// Point `node_ref` at the child's root element without touching its other attributes.
fn with_node_ref(child: Html, node_ref: NodeRef) -> Html {
    match child {
        VNode::VTag(mut tag) => {
            tag.node_ref = node_ref;
            VNode::VTag(tag)
        }
        // Text, fragments, and components have no single root element to annotate.
        other => html! {
            <span ref={node_ref} style="display: contents;">{ other }</span>
        },
    }
}
