use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::scroll::scroll_to_top;

/// Scroll depth after which the button appears.
const SHOW_AFTER_PX: f64 = 300.0;

/// Floating button that appears after scrolling down and returns to the top.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let visible = visible.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    visible.set(scroll_y > SHOW_AFTER_PX);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button
            class={classes!("back-to-top", visible.then_some("show"))}
            {onclick}
            aria-label="Back to top"
        >
            {"↑"}
        </button>
    }
}
