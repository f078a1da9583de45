use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wraps a section that fades in the first time it scrolls into view.
/// The observer lets go of the element after the first intersection.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let observer: Rc<RefCell<Option<IntersectionObserver>>> =
                    Rc::new(RefCell::new(None));
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                                if entry.is_intersecting() {
                                    let target = entry.target();
                                    let _ = target.class_list().add_1("visible");
                                    observer.unobserve(&target);
                                }
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(0.12));
                let created = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                );
                if let (Ok(created), Some(element)) = (created, node.cast::<Element>()) {
                    created.observe(&element);
                    *observer.borrow_mut() = Some(created);
                }
                callback.forget();

                move || {
                    if let Some(observer) = observer.borrow_mut().take() {
                        observer.disconnect();
                    }
                }
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
