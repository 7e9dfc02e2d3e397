use serde_json::json;
use yew::prelude::*;

use crate::state::pricing::{BillingPeriod, Plan};
use crate::utils::tracking::track_event;

fn plan_features(plan: Plan) -> &'static [&'static str] {
    match plan {
        Plan::Starter => &[
            "One published page",
            "All core sections",
            "Light & dark themes",
            "Email support",
        ],
        Plan::Professional => &[
            "Unlimited pages",
            "Commercial license",
            "Custom domain setup",
            "Priority support",
            "Analytics events",
        ],
        Plan::Enterprise => &[
            "Everything in Professional",
            "White-label builds",
            "Team seats",
            "Dedicated onboarding",
        ],
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    /// A plan card's buy button opens the purchase modal with that plan.
    pub on_buy: Callback<Plan>,
}

/// Pricing section: monthly/annual switch plus one card per plan.
#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let period = use_state(BillingPeriod::default);

    let onchange = {
        let period = period.clone();
        Callback::from(move |_: Event| {
            let next = period.toggled();
            track_event("pricing_period", json!({ "annual": next.is_annual() }));
            period.set(next);
        })
    };

    let cards = Plan::ALL.iter().map(|&plan| {
        let onclick = {
            let on_buy = props.on_buy.clone();
            Callback::from(move |_: MouseEvent| {
                track_event("plan_selected", json!({ "plan": plan.label() }));
                on_buy.emit(plan);
            })
        };
        let features = plan_features(plan).iter().map(|f| html! { <li>{ *f }</li> });
        html! {
            <div class={classes!("pricing-card", plan.is_featured().then_some("featured"))}>
                <h3 class="pricing-title">{ plan.label() }</h3>
                <div class="pricing-amount">
                    { format!("${}", plan.price(*period)) }
                    <span class="pricing-cadence">{"/mo"}</span>
                </div>
                if period.is_annual() {
                    <p class="pricing-note">{"billed annually"}</p>
                }
                <ul class="pricing-features">
                    { for features }
                </ul>
                <button class="btn btn-primary btn-pricing" {onclick}>
                    { format!("Get {}", plan.label()) }
                </button>
            </div>
        }
    });

    html! {
        <>
            <div class="pricing-switcher">
                <span class={classes!("switcher-label", (!period.is_annual()).then_some("active"))}>
                    {"Monthly"}
                </span>
                <input
                    type="checkbox"
                    id="pricing-period"
                    checked={period.is_annual()}
                    {onchange}
                    aria-label="Bill annually"
                />
                <span class={classes!("switcher-label", period.is_annual().then_some("active"))}>
                    {"Annual"}<span class="switcher-hint">{" (save 20%)"}</span>
                </span>
            </div>
            <div class="pricing-grid">
                { for cards }
            </div>
        </>
    }
}
