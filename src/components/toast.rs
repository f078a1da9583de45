use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
}

/// Passive display for the page toast. The owning page holds the message
/// state and the dismissal timeout so that showing a new toast replaces
/// the pending one.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <div
            class={classes!("toast", if props.message.is_some() { "show" } else { "" })}
            role="status"
            aria-live="polite"
        >
            { props.message.clone().unwrap_or_default() }
        </div>
    }
}
