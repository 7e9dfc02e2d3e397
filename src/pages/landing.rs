use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::carousel::TestimonialCarousel;
use crate::components::counters::CounterStat;
use crate::components::faq::Faq;
use crate::components::links::LinkGrid;
use crate::components::modal::PurchaseModal;
use crate::components::navbar::Navbar;
use crate::components::newsletter::NewsletterForm;
use crate::components::pricing::Pricing;
use crate::components::reveal::ScrollReveal;
use crate::components::toast::{Toast, ToastAction};
use crate::components::video::VideoEmbed;
use crate::state::modal::ModalState;
use crate::state::pricing::Plan;
use crate::state::reveal::{VisitedSections, SECTION_THRESHOLD};
use crate::state::scroll_lock::{LockOwner, ScrollLock};
use crate::state::theme::{self, Theme};
use crate::state::toast::{ToastState, AUTO_DISMISS_MS};
use crate::utils::observer::VisibilityObserver;
use crate::utils::scroll::{scroll_to_section, scroll_to_top};
use crate::utils::tracking::track_event;

fn load_theme() -> Theme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(theme::STORAGE_KEY).ok().flatten());
    match stored {
        Some(value) => Theme::parse(&value),
        None => Theme::default(),
    }
}

struct FeatureCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [FeatureCard; 6] = [
    FeatureCard {
        icon: "fas fa-bolt",
        title: "Live in minutes",
        description: "One config file drives every section. No build step to learn.",
    },
    FeatureCard {
        icon: "fas fa-moon",
        title: "Dark mode built in",
        description: "Your visitors' preference is remembered across visits.",
    },
    FeatureCard {
        icon: "fas fa-credit-card",
        title: "Checkout included",
        description: "Sell plans straight from the page with a validated checkout flow.",
    },
    FeatureCard {
        icon: "fas fa-filter",
        title: "Smart link hub",
        description: "Group every link you share behind category filters.",
    },
    FeatureCard {
        icon: "fas fa-gauge-high",
        title: "Fast by default",
        description: "Images lazy-load and the page ships as a single small bundle.",
    },
    FeatureCard {
        icon: "fas fa-chart-line",
        title: "Analytics ready",
        description: "Every CTA, filter, and section view emits a trackable event.",
    },
];

/// The landing page. Owns the page-level state the sections share: menu,
/// modal, theme, toast, the body scroll lock, and section-view tracking.
#[function_component(Landing)]
pub fn landing() -> Html {
    let menu_open = use_state(|| false);
    let modal = use_state(ModalState::default);
    let theme = use_state(load_theme);
    let toast = use_reducer(ToastState::default);
    let toast_timer = use_mut_ref(|| None::<Timeout>);
    let toast_generation = use_mut_ref(|| 0u64);
    let video_playing = use_state(|| false);
    let pending_demo_play = use_mut_ref(|| false);

    // Scroll to top only on initial mount.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Apply and persist the theme on every change. Storage failures are
    // swallowed; the in-memory theme still applies for the session.
    {
        let theme = *theme;
        use_effect_with_deps(
            move |current: &Theme| {
                if let Some(window) = web_sys::window() {
                    if let Some(root) =
                        window.document().and_then(|doc| doc.document_element())
                    {
                        let _ = root.set_attribute("data-theme", current.as_str());
                    }
                    if let Ok(Some(storage)) = window.local_storage() {
                        let _ = storage.set_item(theme::STORAGE_KEY, current.as_str());
                    }
                }
                || ()
            },
            theme,
        );
    }

    // Body scroll lock, shared by the menu and the modal. The body stays
    // locked while either owner holds it.
    {
        let deps = (*menu_open, modal.is_open());
        use_effect_with_deps(
            move |(menu_open, modal_open): &(bool, bool)| {
                let mut lock = ScrollLock::default();
                lock.set(LockOwner::Menu, *menu_open);
                lock.set(LockOwner::Modal, *modal_open);
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|doc| doc.body())
                {
                    let overflow = if lock.locked() { "hidden" } else { "" };
                    let _ = body.style().set_property("overflow", overflow);
                }
                || ()
            },
            deps,
        );
    }

    // Track each section the first time it becomes half visible.
    use_effect_with_deps(
        move |_| {
            let visited = Rc::new(std::cell::RefCell::new(VisitedSections::default()));
            let observer = VisibilityObserver::new(SECTION_THRESHOLD, move |entry, _| {
                if !entry.is_intersecting() {
                    return;
                }
                if let Some(id) = entry.target().get_attribute("id") {
                    if visited.borrow_mut().visit(&id) {
                        track_event("section_view", json!({ "section": id }));
                    }
                }
            });
            if let (Some(observer), Some(document)) =
                (observer.as_ref(), web_sys::window().and_then(|w| w.document()))
            {
                if let Ok(sections) = document.query_selector_all("section[id]") {
                    for index in 0..sections.length() {
                        if let Some(element) = sections
                            .get(index)
                            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                        {
                            observer.observe(&element);
                        }
                    }
                }
            }
            move || drop(observer)
        },
        (),
    );

    // Demo CTA: scroll to the demo section, then start the video once the
    // smooth scroll actually arrives (scrollend), not after a guessed delay.
    {
        let video_playing = video_playing.clone();
        let pending_demo_play = pending_demo_play.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if std::mem::take(&mut *pending_demo_play.borrow_mut()) {
                            video_playing.set(true);
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scrollend",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scrollend",
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

    let show_toast = {
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        let toast_generation = toast_generation.clone();
        Callback::from(move |message: String| {
            let generation = {
                let mut current = toast_generation.borrow_mut();
                *current += 1;
                *current
            };
            toast.dispatch(ToastAction::Show { message, generation });
            // Replacing the handle cancels any pending dismiss.
            let dispatcher = toast.dispatcher();
            *toast_timer.borrow_mut() = Some(Timeout::new(AUTO_DISMISS_MS, move || {
                dispatcher.dispatch(ToastAction::Dismiss(generation));
            }));
        })
    };
    let close_toast = {
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |_| {
            toast_timer.borrow_mut().take();
            toast.dispatch(ToastAction::Close);
        })
    };

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let on_nav = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: String| {
            menu_open.set(false);
            scroll_to_section(&section);
        })
    };
    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            track_event("theme_toggle", json!({ "theme": next.as_str() }));
            theme.set(next);
        })
    };

    let open_modal = {
        let modal = modal.clone();
        let menu_open = menu_open.clone();
        Rc::new(move |source: &str| {
            track_event("cta_click", json!({ "source": source }));
            // The modal takes over the scroll lock; the menu closes with it.
            menu_open.set(false);
            let mut next = *modal;
            next.open();
            modal.set(next);
        })
    };
    let open_modal_nav: Callback<()> = {
        let open_modal = open_modal.clone();
        Callback::from(move |_| open_modal("header"))
    };
    let open_modal_hero: Callback<MouseEvent> = {
        let open_modal = open_modal.clone();
        Callback::from(move |_| open_modal("hero"))
    };
    let open_modal_with_plan = {
        let modal = modal.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |plan: Plan| {
            menu_open.set(false);
            let mut next = *modal;
            next.open_with(plan);
            modal.set(next);
        })
    };
    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_| {
            let mut next = *modal;
            next.close();
            modal.set(next);
        })
    };
    let select_plan = {
        let modal = modal.clone();
        Callback::from(move |plan: Plan| {
            let mut next = *modal;
            next.select_plan(plan);
            modal.set(next);
        })
    };
    let on_purchase_complete = {
        let modal = modal.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |_| {
            track_event("purchase_complete", json!({}));
            let mut next = *modal;
            next.close();
            modal.set(next);
            show_toast
                .emit("Purchase complete! A confirmation email is on its way.".to_string());
            scroll_to_top();
        })
    };

    let on_demo = {
        let pending_demo_play = pending_demo_play.clone();
        Callback::from(move |_: MouseEvent| {
            track_event("demo_cta", json!({}));
            *pending_demo_play.borrow_mut() = true;
            scroll_to_section("demo");
        })
    };
    let on_video_play = {
        let video_playing = video_playing.clone();
        Callback::from(move |_| {
            track_event("video_play", json!({}));
            video_playing.set(true);
        })
    };

    let feature_cards = FEATURES.iter().map(|feature| {
        html! {
            <ScrollReveal class="feature-card">
                <i class={feature.icon}></i>
                <h3>{ feature.title }</h3>
                <p>{ feature.description }</p>
            </ScrollReveal>
        }
    });

    html! {
        <>
            <Navbar
                menu_open={*menu_open}
                theme={*theme}
                on_menu_toggle={on_menu_toggle}
                on_theme_toggle={on_theme_toggle}
                on_nav={on_nav}
                on_buy={open_modal_nav}
            />

            <section id="hero" class="hero">
                <div class="container">
                    <h1>{"One link for everything you make"}</h1>
                    <p class="hero-subtitle">
                        {"LaunchLink turns your bio link into a product showcase: \
                          links, demo, checkout, and testimonials on one fast page."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" onclick={open_modal_hero}>
                            {"Get LaunchLink"}
                        </button>
                        <button class="btn btn-secondary" onclick={on_demo}>
                            {"Watch the demo"}
                        </button>
                    </div>
                    <div class="hero-stats">
                        <CounterStat target={12500} suffix="+" label="creators on board" />
                        <CounterStat target={98} suffix="%" label="satisfaction score" />
                        <CounterStat target={40} suffix="+" label="ready-made sections" />
                    </div>
                </div>
            </section>

            <section id="features">
                <div class="container">
                    <h2>{"Everything a product page needs"}</h2>
                    <div class="feature-grid">
                        { for feature_cards }
                    </div>
                </div>
            </section>

            <section id="demo" class="demo-section">
                <div class="container">
                    <h2>{"See it in action"}</h2>
                    <VideoEmbed playing={*video_playing} on_play={on_video_play} />
                </div>
            </section>

            <section id="links">
                <div class="container">
                    <h2>{"Your links, organized"}</h2>
                    <LinkGrid />
                </div>
            </section>

            <section id="testimonials">
                <div class="container">
                    <h2>{"Loved by creators"}</h2>
                    <TestimonialCarousel />
                </div>
            </section>

            <section id="pricing">
                <div class="container">
                    <h2>{"Simple pricing"}</h2>
                    <Pricing on_buy={open_modal_with_plan} />
                </div>
            </section>

            <section id="faq">
                <div class="container">
                    <h2>{"Frequently asked questions"}</h2>
                    <Faq />
                </div>
            </section>

            <section id="newsletter">
                <div class="container">
                    <h2>{"Get template updates"}</h2>
                    <NewsletterForm on_toast={show_toast.clone()} />
                </div>
            </section>

            <footer>
                <div class="container">
                    <p>{"© 2026 LaunchLink. Crafted for creators."}</p>
                </div>
            </footer>

            <PurchaseModal
                state={*modal}
                on_close={close_modal}
                on_select_plan={select_plan}
                on_purchase_complete={on_purchase_complete}
            />
            <Toast message={toast.message().map(str::to_string)} on_close={close_toast} />
            <BackToTop />
        </>
    }
}
