use yew::prelude::*;

/// Demo walkthrough video. Autoplay is on because the embed only appears
/// after an explicit user action.
const EMBED_URL: &str = "https://www.youtube.com/embed/ScMzIvxBSi4?autoplay=1";

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    pub playing: bool,
    pub on_play: Callback<()>,
}

/// Thumbnail placeholder that swaps to the real iframe embed on demand.
/// Controlled by the page so the demo CTA can start playback remotely.
#[function_component(VideoEmbed)]
pub fn video_embed(props: &VideoEmbedProps) -> Html {
    let onclick = {
        let on_play = props.on_play.clone();
        Callback::from(move |_: MouseEvent| on_play.emit(()))
    };

    html! {
        <div class="video-placeholder">
            if props.playing {
                <iframe
                    src={EMBED_URL}
                    title="LaunchLink demo"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                />
            } else {
                <button class="video-thumbnail" {onclick} aria-label="Play demo video">
                    {"▶"}
                </button>
            }
        </div>
    }
}
