use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="hero">
            <div class="container">
                <h1>{"Page not found"}</h1>
                <p>{"The link you followed doesn't exist."}</p>
                <Link<Route> to={Route::Landing} classes="btn btn-primary">
                    {"Back to the page"}
                </Link<Route>>
            </div>
        </section>
    }
}
