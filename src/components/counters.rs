use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::utils::observer::VisibilityObserver;

/// Total animation time for one counter.
const COUNT_DURATION_MS: f64 = 2_000.0;

/// Frame period for the counting animation.
const TICK_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct CounterStatProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

/// Statistic that counts up from zero the first time it becomes visible.
/// Runs at most once; the final frame always shows the exact target.
#[function_component(CounterStat)]
pub fn counter_stat(props: &CounterStatProps) -> Html {
    let node = use_node_ref();
    let value = use_state(|| 0u32);
    let target = props.target;

    {
        let node = node.clone();
        let value = value.clone();
        use_effect_with_deps(
            move |_| {
                let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let started = Rc::new(Cell::new(false));

                let observer = {
                    let interval = interval.clone();
                    VisibilityObserver::new(0.0, move |entry, observer| {
                        if !entry.is_intersecting() || started.get() {
                            return;
                        }
                        started.set(true);
                        observer.unobserve(&entry.target());

                        let begun = js_sys::Date::now();
                        let value = value.clone();
                        let interval_handle = interval.clone();
                        *interval.borrow_mut() = Some(Interval::new(TICK_MS, move || {
                            let progress = (js_sys::Date::now() - begun) / COUNT_DURATION_MS;
                            if progress >= 1.0 {
                                value.set(target);
                                interval_handle.borrow_mut().take();
                            } else {
                                value.set((target as f64 * progress) as u32);
                            }
                        }));
                    })
                };
                if let (Some(observer), Some(element)) =
                    (observer.as_ref(), node.cast::<web_sys::Element>())
                {
                    observer.observe(&element);
                }

                move || {
                    interval.borrow_mut().take();
                    drop(observer);
                }
            },
            (),
        );
    }

    html! {
        <div class="benefit-stat" ref={node}>
            <div class="stat-number">{ *value }{ props.suffix.clone() }</div>
            <div class="stat-label">{ props.label.clone() }</div>
        </div>
    }
}
