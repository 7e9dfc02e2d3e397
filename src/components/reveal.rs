use yew::prelude::*;

use crate::state::reveal::REVEAL_THRESHOLD;
use crate::utils::observer::VisibilityObserver;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Wrapper that fades its children in the first time they cross the
/// visibility threshold. The `animated` class sticks and the element is
/// unobserved, so scrolling away and back never re-triggers the work.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let observer = VisibilityObserver::new(REVEAL_THRESHOLD, |entry, observer| {
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1("animated");
                        observer.unobserve(&target);
                    }
                });
                if let (Some(observer), Some(element)) =
                    (observer.as_ref(), node.cast::<web_sys::Element>())
                {
                    observer.observe(&element);
                }
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
