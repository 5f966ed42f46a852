use crate::components::{ClickAway, SwipeAway};
use crate::demo::{DEMO_SWIPE_DIRECTIONS, SWIPE_HINT, click_label, swipe_label};
use yew::prelude::*;

#[function_component(AwayDemo)]
fn away_demo() -> Html {
    let selected = use_state(|| false);
    let swiped = use_state(|| false);

    let on_click = {
        let selected = selected.clone();
        Callback::from(move |inside: bool| selected.set(inside))
    };
    let on_swipe = {
        let swiped = swiped.clone();
        Callback::from(move |()| swiped.set(true))
    };

    html! {
        <main class="away-demo">
            <ClickAway callback={on_click}>
                <div class={classes!("click-me", (*selected).then_some("selected"))}>
                    <h2 class="label">{ click_label(*selected) }</h2>
                </div>
            </ClickAway>

            <SwipeAway
                directions={DEMO_SWIPE_DIRECTIONS.to_vec()}
                callback={on_swipe}
                class={classes!("swipe-me", (*swiped).then_some("swiped"))}
            >
                <h2 class="label">
                    { swipe_label(*swiped) }
                    if !*swiped {
                        <br />
                        <small>{ SWIPE_HINT }</small>
                    }
                </h2>
            </SwipeAway>
        </main>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AwayDemo>::with_root(root).render();
    } else {
        yew::Renderer::<AwayDemo>::new().render();
    }
}
