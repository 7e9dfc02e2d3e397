use yew::prelude::*;

use crate::utils::observer::VisibilityObserver;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image whose `src` is only attached once the element first scrolls into
/// view. The observer detaches itself after that first load.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loaded = use_state(|| false);

    {
        let node = node.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let observer = VisibilityObserver::new(0.0, move |entry, observer| {
                    if entry.is_intersecting() {
                        loaded.set(true);
                        observer.unobserve(&entry.target());
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

    let src = loaded.then(|| props.src.clone());
    html! {
        <img ref={node} {src} alt={props.alt.clone()} class={props.class.clone()} />
    }
}
