use chrono::Datelike;
use gloo_timers::future::TimeoutFuture;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::form::{Field, PaymentFormState};
use crate::state::pricing::Plan;
use crate::utils::tracking::track_event;

/// Stand-in for the payment gateway round trip.
const PROCESSING_DELAY_MS: u32 = 2_000;

pub enum FormAction {
    Input(Field, String),
    Blur { field: Field, month: u32, year: u32 },
    Submit { month: u32, year: u32 },
    Finished { success: bool },
}

impl Reducible for PaymentFormState {
    type Action = FormAction;

    fn reduce(self: std::rc::Rc<Self>, action: FormAction) -> std::rc::Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Input(field, value) => next.set_value(field, value),
            FormAction::Blur { field, month, year } => {
                next.validate_field(field, month, year);
            }
            FormAction::Submit { month, year } => {
                next.begin_submit(month, year);
            }
            FormAction::Finished { success } => next.finish_submit(success),
        }
        next.into()
    }
}

fn current_month_year() -> (u32, u32) {
    let now = chrono::Local::now();
    (now.month(), now.year().rem_euclid(100) as u32)
}

fn dom_id(field: Field) -> &'static str {
    match field {
        Field::FullName => "checkout-name",
        Field::Email => "checkout-email",
        Field::CardNumber => "checkout-card",
        Field::ExpiryDate => "checkout-expiry",
        Field::Cvv => "checkout-cvv",
    }
}

fn field_row(
    form: &UseReducerHandle<PaymentFormState>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
) -> Html {
    let state = form.field(field);
    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Input(field, input.value()));
        })
    };
    let onblur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let (month, year) = current_month_year();
            form.dispatch(FormAction::Blur { field, month, year });
        })
    };

    html! {
        <div class="form-group">
            <label for={dom_id(field)}>{ label }</label>
            <input
                id={dom_id(field)}
                type={if field == Field::Email { "email" } else { "text" }}
                value={state.value.clone()}
                class={classes!(state.error.is_some().then_some("error"))}
                {placeholder}
                {oninput}
                {onblur}
            />
            if let Some(error) = &state.error {
                <div class="field-error">{ error.clone() }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaymentFormProps {
    /// Plan preselected in the modal, for the tracking payload.
    pub plan: Option<Plan>,
    /// Fired after a successful purchase; the page closes the modal and
    /// shows the confirmation toast.
    pub on_success: Callback<()>,
}

/// Checkout form. Validation runs per field on blur and for the whole form
/// on submit; `submitting` blocks re-entry while the simulated payment is in
/// flight and is cleared on every exit path.
#[function_component(PaymentForm)]
pub fn payment_form(props: &PaymentFormProps) -> Html {
    let form = use_reducer(PaymentFormState::default);

    // The reducer alone decides whether a submission starts; this effect
    // reacts to the `submitting` flag it sets and runs the completion.
    {
        let submitting = form.submitting;
        let dispatcher = form.dispatcher();
        let plan = props.plan;
        let on_success = props.on_success.clone();
        use_effect_with_deps(
            move |in_flight: &bool| {
                if *in_flight {
                    track_event(
                        "checkout_submit",
                        json!({ "plan": plan.map(Plan::label) }),
                    );
                    spawn_local(async move {
                        TimeoutFuture::new(PROCESSING_DELAY_MS).await;
                        dispatcher.dispatch(FormAction::Finished { success: true });
                        on_success.emit(());
                    });
                }
                || ()
            },
            submitting,
        );
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (month, year) = current_month_year();
            form.dispatch(FormAction::Submit { month, year });
        })
    };

    html! {
        <form class="payment-form" {onsubmit}>
            { field_row(&form, Field::FullName, "Full name", "Ada Lovelace") }
            { field_row(&form, Field::Email, "Email", "you@example.com") }
            { field_row(&form, Field::CardNumber, "Card number", "4111 1111 1111 1111") }
            <div class="form-row">
                { field_row(&form, Field::ExpiryDate, "Expiry", "MM/YY") }
                { field_row(&form, Field::Cvv, "CVV", "123") }
            </div>
            <button type="submit" class="btn btn-primary" disabled={form.submitting}>
                if form.submitting {
                    <i class="fas fa-spinner fa-spin"></i>{" Processing..."}
                } else {
                    {"Complete purchase"}
                }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    fn filled() -> PaymentFormState {
        let mut form = PaymentFormState::default();
        form.set_value(Field::FullName, "Ada Lovelace".into());
        form.set_value(Field::Email, "ada@example.com".into());
        form.set_value(Field::CardNumber, "4111 1111 1111 1111".into());
        form.set_value(Field::ExpiryDate, "12/29".into());
        form.set_value(Field::Cvv, "123".into());
        form
    }

    #[test]
    fn submit_action_is_the_sole_gate_for_the_completion_path() {
        // A valid form: the dispatched action sets `submitting`, which is
        // what triggers the async completion.
        let state = Rc::new(filled()).reduce(FormAction::Submit { month: 6, year: 26 });
        assert!(state.submitting);

        // A second submit while in flight changes nothing.
        let state = Rc::clone(&state).reduce(FormAction::Submit { month: 6, year: 26 });
        assert!(state.submitting);

        let state = state.reduce(FormAction::Finished { success: true });
        assert!(!state.submitting);
        assert!(state.email.value.is_empty());
    }

    #[test]
    fn rejected_submit_never_raises_the_submitting_flag() {
        let state =
            Rc::new(PaymentFormState::default()).reduce(FormAction::Submit { month: 6, year: 26 });
        assert!(!state.submitting, "invalid form must not start a submission");
        assert!(state.full_name.error.is_some());
    }
}
