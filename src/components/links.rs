use serde_json::json;
use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::state::filter::{FilterState, ALL};
use crate::utils::tracking::track_event;

struct LinkCard {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    href: &'static str,
    image: &'static str,
}

const FILTERS: [(&str, &str); 4] = [
    (ALL, "All"),
    ("social", "Social"),
    ("store", "Store"),
    ("content", "Content"),
];

const LINKS: [LinkCard; 6] = [
    LinkCard {
        title: "YouTube channel",
        description: "Weekly build-in-public videos.",
        category: "social",
        href: "https://youtube.com/@launchlink",
        image: "assets/links/youtube.svg",
    },
    LinkCard {
        title: "X / Twitter",
        description: "Daily progress threads.",
        category: "social",
        href: "https://x.com/launchlink",
        image: "assets/links/x.svg",
    },
    LinkCard {
        title: "Template store",
        description: "All LaunchLink themes in one place.",
        category: "store",
        href: "https://store.launchlink.app",
        image: "assets/links/store.svg",
    },
    LinkCard {
        title: "Merch drop",
        description: "Limited run, ships worldwide.",
        category: "store",
        href: "https://store.launchlink.app/merch",
        image: "assets/links/merch.svg",
    },
    LinkCard {
        title: "The newsletter archive",
        description: "Every past issue, free to read.",
        category: "content",
        href: "https://launchlink.app/archive",
        image: "assets/links/archive.svg",
    },
    LinkCard {
        title: "Starter guide",
        description: "From zero to a live page in 10 minutes.",
        category: "content",
        href: "https://launchlink.app/guide",
        image: "assets/links/guide.svg",
    },
];

/// Filterable link grid: one exclusive category filter, cards hidden rather
/// than unmounted so images keep their loaded state.
#[function_component(LinkGrid)]
pub fn link_grid() -> Html {
    let filter = use_state(FilterState::default);

    let buttons = FILTERS.iter().map(|(id, label)| {
        let onclick = {
            let filter = filter.clone();
            let id = id.to_string();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*filter).clone();
                next.select(&id);
                track_event("filter_change", json!({ "filter": id }));
                filter.set(next);
            })
        };
        html! {
            <button
                class={classes!("filter-btn", filter.is_active(id).then_some("active"))}
                {onclick}
            >
                { *label }
            </button>
        }
    });

    let cards = LINKS.iter().map(|card| {
        html! {
            <a
                class={classes!("link-card", (!filter.shows(card.category)).then_some("filtered-out"))}
                href={card.href}
                target="_blank"
                rel="noopener"
            >
                <LazyImage src={card.image} alt={card.title} />
                <h3>{ card.title }</h3>
                <p>{ card.description }</p>
            </a>
        }
    });

    html! {
        <>
            <div class="filter-bar">
                { for buttons }
            </div>
            <div class="link-grid">
                { for cards }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_image_ships_with_the_repo() {
        for card in &LINKS {
            let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(card.image);
            assert!(path.exists(), "missing asset: {}", card.image);
        }
    }

    #[test]
    fn every_card_category_has_a_filter_button() {
        for card in &LINKS {
            assert!(
                FILTERS.iter().any(|(id, _)| *id == card.category),
                "category {} has no filter",
                card.category
            );
        }
    }
}
