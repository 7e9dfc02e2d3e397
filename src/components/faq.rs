use serde_json::json;
use yew::prelude::*;

use crate::state::faq::FaqState;
use crate::utils::tracking::track_event;

const FAQ_ITEMS: [(&str, &str); 5] = [
    (
        "What exactly do I get when I buy LaunchLink?",
        "You get the full template source, every section shown on this page, \
         lifetime updates, and a step-by-step setup guide. Deploy it anywhere \
         that serves static files.",
    ),
    (
        "Can I use LaunchLink for client projects?",
        "The Professional and Enterprise plans include a commercial license, \
         so you can ship unlimited client projects. The Starter plan covers \
         personal use only.",
    ),
    (
        "Do I need to know how to code?",
        "No. Every link, color, and section is configured from a single file. \
         If you can edit text, you can customize LaunchLink.",
    ),
    (
        "Is there a refund policy?",
        "Yes, 14 days, no questions asked. If the template is not a fit, \
         write to support and we refund the purchase in full.",
    ),
    (
        "How do updates work?",
        "Every purchase includes lifetime updates. New sections and fixes \
         land in your account dashboard and an email lets you know.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("active"))}>
            <button class="faq-question" {onclick} aria-expanded={props.open.to_string()}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ props.answer.clone() }</p>
            </div>
        </div>
    }
}

/// FAQ accordion. Exactly one item can be open; opening another closes the
/// previous one, and clicking the open item collapses it.
#[function_component(Faq)]
pub fn faq() -> Html {
    let state = use_state(FaqState::default);

    let items = FAQ_ITEMS.iter().enumerate().map(|(index, (question, answer))| {
        let on_toggle = {
            let state = state.clone();
            Callback::from(move |_| {
                let mut next = (*state).clone();
                next.toggle(index);
                track_event("faq_toggle", json!({ "item": index, "open": next.is_open(index) }));
                state.set(next);
            })
        };
        html! {
            <FaqItem
                key={index}
                question={*question}
                answer={*answer}
                open={state.is_open(index)}
                {on_toggle}
            />
        }
    });

    html! {
        <div class="faq-list">
            { for items }
        </div>
    }
}
