use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::forms::DemoForm;

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_toast: Callback<String>,
}

#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    // Escape closes the modal while it is on screen
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let destructor: Box<dyn FnOnce()> = match (
                    *open,
                    web_sys::window().and_then(|w| w.document()),
                ) {
                    (true, Some(document)) => {
                        let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                            if event.key() == "Escape" {
                                on_close.emit(());
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);
                        document
                            .add_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true" aria-label="Request a live demo">
            <div class="modal">
                <button class="modal-close" aria-label="Close" onclick={on_close_click}>
                    {"×"}
                </button>
                <h3>{"Request a live demo"}</h3>
                <p class="modal-lead">
                    {"Tell us a little about your team and we'll set up a walkthrough."}
                </p>
                <DemoForm
                    on_toast={props.on_toast.clone()}
                    on_done={props.on_close.clone()}
                />
            </div>
        </div>
    }
}
