use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct CopyMeetingLinkProps {
    pub on_toast: Callback<String>,
}

/// Shareable meeting link with a copy button. Clipboard access can be
/// denied, so the failure path gets its own toast instead of an error.
#[function_component(CopyMeetingLink)]
pub fn copy_meeting_link(props: &CopyMeetingLinkProps) -> Html {
    let onclick = {
        let on_toast = props.on_toast.clone();
        Callback::from(move |_: MouseEvent| {
            let link = config::DEMO_MEETING_LINK.trim();
            if link.is_empty() {
                return;
            }
            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                let on_toast = on_toast.clone();
                spawn_local(async move {
                    match JsFuture::from(clipboard.write_text(link)).await {
                        Ok(_) => on_toast.emit("Link copied to clipboard".to_string()),
                        Err(_) => {
                            on_toast.emit("Unable to copy. Long-press to copy.".to_string())
                        }
                    }
                });
            }
        })
    };

    html! {
        <div class="meet-link-row">
            <code class="meet-link">{config::DEMO_MEETING_LINK}</code>
            <button class="copy-link" {onclick}>{"Copy link"}</button>
        </div>
    }
}
