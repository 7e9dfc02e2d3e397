use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::state::theme::Theme;

/// Scroll depth after which the navbar casts a shadow.
const SHADOW_AFTER_PX: f64 = 10.0;

/// Anchor targets shown in the menu, in page order.
const NAV_SECTIONS: [(&str, &str); 5] = [
    ("features", "Features"),
    ("demo", "Demo"),
    ("links", "Links"),
    ("pricing", "Pricing"),
    ("faq", "FAQ"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub menu_open: bool,
    pub theme: Theme,
    pub on_menu_toggle: Callback<()>,
    pub on_theme_toggle: Callback<()>,
    /// Nav-link click: the page closes the menu and scrolls to the section.
    pub on_nav: Callback<String>,
    pub on_buy: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state(|| false);

    // Shadow once the page is scrolled away from the very top.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(scroll_y > SHADOW_AFTER_PX);
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

    let on_menu_toggle = {
        let cb = props.on_menu_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_theme_toggle = {
        let cb = props.on_theme_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_buy = {
        let cb = props.on_buy.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let nav_links = NAV_SECTIONS.iter().map(|(id, label)| {
        let on_nav = props.on_nav.clone();
        let id = id.to_string();
        let onclick = Callback::from(move |_: MouseEvent| on_nav.emit(id.clone()));
        html! {
            <button class="nav-link" {onclick}>{ *label }</button>
        }
    });

    html! {
        <header class={classes!("navbar", scrolled.then_some("scrolled"))}>
            <div class="container navbar-inner">
                <span class="logo">{"LaunchLink"}</span>
                <nav class={classes!("nav-menu", props.menu_open.then_some("active"))}>
                    { for nav_links }
                    <button class="theme-toggle" onclick={on_theme_toggle} aria-label="Toggle theme">
                        <i class={match props.theme {
                            Theme::Light => "fas fa-moon",
                            Theme::Dark => "fas fa-sun",
                        }}></i>
                    </button>
                    <button class="btn btn-primary" onclick={on_buy}>{"Get LaunchLink"}</button>
                </nav>
                <button
                    class={classes!("menu-toggle", props.menu_open.then_some("active"))}
                    onclick={on_menu_toggle}
                    aria-expanded={props.menu_open.to_string()}
                    aria-label="Toggle navigation menu"
                >
                    <i class={if props.menu_open { "fas fa-times" } else { "fas fa-bars" }}></i>
                </button>
            </div>
        </header>
    }
}
