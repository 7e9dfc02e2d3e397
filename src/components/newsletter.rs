use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::form::is_valid_email;
use crate::utils::api::Api;
use crate::utils::tracking::track_event;

#[derive(Properties, PartialEq)]
pub struct NewsletterProps {
    /// Success and failure are both surfaced through the page toast.
    pub on_toast: Callback<String>,
}

/// Footer newsletter signup. The one form on the page with a real network
/// path; the toast reports the outcome either way and the field keeps its
/// value on failure.
#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterProps) -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let oninput = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let address = (*email).clone();
            if !is_valid_email(&address) {
                error.set(Some("Enter a valid email address".to_string()));
                return;
            }
            submitting.set(true);

            let email = email.clone();
            let submitting = submitting.clone();
            let on_toast = on_toast.clone();
            spawn_local(async move {
                let delivered = match Api::post("/api/newsletter").json(&json!({ "email": address }))
                {
                    Ok(request) => request
                        .send()
                        .await
                        .map(|response| response.ok())
                        .unwrap_or(false),
                    Err(_) => false,
                };
                track_event("newsletter_submit", json!({ "delivered": delivered }));
                if delivered {
                    email.set(String::new());
                    on_toast.emit("You're on the list! Check your inbox soon.".to_string());
                } else {
                    on_toast.emit("Subscription failed. Please try again.".to_string());
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="newsletter-form" {onsubmit}>
            <div>
                <input
                    type="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    class={classes!(error.is_some().then_some("error"))}
                    {oninput}
                    aria-label="Email address"
                />
                if let Some(message) = &*error {
                    <div class="field-error">{ message.clone() }</div>
                }
            </div>
            <button type="submit" class="btn btn-secondary" disabled={*submitting}>
                if *submitting {
                    {"Subscribing..."}
                } else {
                    {"Subscribe"}
                }
            </button>
        </form>
    }
}
