use yew::prelude::*;

use crate::state::toast::ToastState;

pub enum ToastAction {
    /// Display a message; `generation` ties it to the dismiss timer the
    /// caller schedules alongside.
    Show { message: String, generation: u64 },
    /// Timer fired. Ignored when a newer show replaced the message.
    Dismiss(u64),
    /// Close button.
    Close,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: ToastAction) -> std::rc::Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Show { message, generation } => next.show(message, generation),
            ToastAction::Dismiss(generation) => next.dismiss(generation),
            ToastAction::Close => next.hide(),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
    pub on_close: Callback<()>,
}

/// Single-slot notification view. The landing page owns the message and the
/// auto-dismiss timer; this only renders the slot and forwards the close
/// button.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!("toast", props.message.is_some().then_some("show"))}
            role="status"
            aria-live="polite"
        >
            <span class="toast-message">{ props.message.clone().unwrap_or_default() }</span>
            <button class="toast-close" {onclick} aria-label="Close notification">{"×"}</button>
        </div>
    }
}
