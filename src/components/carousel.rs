use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::state::carousel::{CarouselAction, CarouselState, AUTO_ADVANCE_MS};

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        quote: "Set up my whole page in an evening. The first week it paid for itself twice over.",
        author: "Marina Costa",
        role: "Illustrator",
    },
    Testimonial {
        quote: "I replaced three different tools with LaunchLink. My audience finally has one link that just works.",
        author: "Devon Reid",
        role: "Podcast host",
    },
    Testimonial {
        quote: "The checkout flow converts noticeably better than the page builder I used before.",
        author: "Yuki Tanaka",
        role: "Course creator",
    },
    Testimonial {
        quote: "Clean, fast, and the dark mode alone got me compliments from half my followers.",
        author: "Priya Raman",
        role: "Streamer",
    },
    Testimonial {
        quote: "Support answered in an hour and the refund policy made it a zero-risk buy.",
        author: "Tomás Ferreira",
        role: "Newsletter writer",
    },
];

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: std::rc::Rc<Self>, action: CarouselAction) -> std::rc::Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

/// Testimonials slider. Manual navigation clamps at the edges, the 5s
/// auto-advance wraps, and hovering the track or controls pauses the timer
/// (cancel-and-restart, so a resume always waits a full period).
#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel() -> Html {
    let carousel = use_reducer(|| CarouselState::new(TESTIMONIALS.len(), viewport_width()));
    let auto_timer = use_mut_ref(|| None::<Interval>);

    // Recompute the page size when the viewport changes.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        dispatcher.dispatch(CarouselAction::Resize(viewport_width()));
                    });
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "resize",
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

    let start_auto = {
        let auto_timer = auto_timer.clone();
        let dispatcher = carousel.dispatcher();
        std::rc::Rc::new(move || {
            let dispatcher = dispatcher.clone();
            *auto_timer.borrow_mut() = Some(Interval::new(AUTO_ADVANCE_MS, move || {
                dispatcher.dispatch(CarouselAction::Tick);
            }));
        })
    };

    // Auto-advance runs from mount until unmount, minus hover pauses.
    {
        let start_auto = start_auto.clone();
        let auto_timer = auto_timer.clone();
        use_effect_with_deps(
            move |_| {
                start_auto();
                move || {
                    auto_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let pause = {
        let auto_timer = auto_timer.clone();
        Callback::from(move |_: MouseEvent| {
            auto_timer.borrow_mut().take();
        })
    };
    let resume = {
        let start_auto = start_auto.clone();
        Callback::from(move |_: MouseEvent| start_auto())
    };

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let slide_style = format!("flex: 0 0 {}%", carousel.slide_width_percent());
    let track_style = format!("transform: translateX(-{}%)", carousel.offset_percent());

    let slides = TESTIMONIALS.iter().map(|t| {
        html! {
            <div class="testimonial-card" style={slide_style.clone()}>
                <blockquote>
                    <p>{ t.quote }</p>
                    <footer>
                        <strong>{ t.author }</strong>
                        <span class="testimonial-role">{ format!(" — {}", t.role) }</span>
                    </footer>
                </blockquote>
            </div>
        }
    });

    html! {
        <div class="carousel">
            <div
                class="carousel-viewport"
                onmouseenter={pause.clone()}
                onmouseleave={resume.clone()}
            >
                <div class="carousel-track" style={track_style}>
                    { for slides }
                </div>
            </div>
            <div
                class="carousel-controls"
                onmouseenter={pause}
                onmouseleave={resume}
            >
                <button
                    class={classes!("carousel-btn", (!carousel.can_go_prev()).then_some("disabled"))}
                    disabled={!carousel.can_go_prev()}
                    onclick={on_prev}
                    aria-label="Previous testimonials"
                >
                    {"‹"}
                </button>
                <button
                    class={classes!("carousel-btn", (!carousel.can_go_next()).then_some("disabled"))}
                    disabled={!carousel.can_go_next()}
                    onclick={on_next}
                    aria-label="Next testimonials"
                >
                    {"›"}
                </button>
            </div>
        </div>
    }
}
