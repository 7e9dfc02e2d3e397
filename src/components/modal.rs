use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::payment_form::PaymentForm;
use crate::state::modal::ModalState;
use crate::state::pricing::{BillingPeriod, Plan};

#[derive(Properties, PartialEq)]
pub struct PurchaseModalProps {
    pub state: ModalState,
    pub on_close: Callback<()>,
    pub on_select_plan: Callback<Plan>,
    pub on_purchase_complete: Callback<()>,
}

/// Purchase modal. Closes on the close button, a click on the backdrop
/// itself, or Escape while open; all three paths are idempotent.
#[function_component(PurchaseModal)]
pub fn purchase_modal(props: &PurchaseModalProps) -> Html {
    // Escape listener only lives while the modal is open.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
                if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let listener =
                            Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                                if e.key() == "Escape" {
                                    on_close.emit(());
                                }
                            });
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                        cleanup = Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                listener.as_ref().unchecked_ref(),
                            );
                        });
                    }
                }
                move || cleanup()
            },
            props.state.is_open(),
        );
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            // Only the backdrop itself, not clicks inside the dialog.
            if let (Some(target), Some(current)) = (e.target(), e.current_target()) {
                if target == current {
                    on_close.emit(());
                }
            }
        })
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let plan_options = Plan::ALL.iter().map(|&plan| {
        let onclick = {
            let on_select_plan = props.on_select_plan.clone();
            Callback::from(move |_: MouseEvent| on_select_plan.emit(plan))
        };
        let active = props.state.plan() == Some(plan);
        html! {
            <div class={classes!("plan-option", active.then_some("active"))} {onclick}>
                <span>{ plan.label() }</span>
                <span>{ format!("${}/mo", plan.price(BillingPeriod::Monthly)) }</span>
            </div>
        }
    });

    html! {
        <div
            class={classes!("modal-overlay", props.state.is_open().then_some("active"))}
            onclick={on_backdrop_click}
        >
            <div class="modal" role="dialog" aria-modal="true" aria-label="Complete your purchase">
                <button class="modal-close" onclick={on_close_click} aria-label="Close">
                    {"×"}
                </button>
                <h2>{"Complete your purchase"}</h2>
                <div class="plan-options">
                    { for plan_options }
                </div>
                <PaymentForm
                    plan={props.state.plan()}
                    on_success={props.on_purchase_complete.clone()}
                />
            </div>
        </div>
    }
}
