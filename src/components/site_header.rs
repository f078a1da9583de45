use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::theme_toggle::{Theme, ThemeToggle};
use crate::config;
use crate::utils::scroll::scroll_to_section;

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("features", "Features"),
    ("testimonials", "Testimonials"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<Theme>,
    pub on_request_demo: Callback<()>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let shadowed = use_state(|| false);
    let drawer_open = use_state(|| false);

    // Shadow under the sticky header once the page scrolls
    {
        let shadowed = shadowed.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let shadowed = shadowed.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    shadowed.set(scroll_y > config::HEADER_SHADOW_THRESHOLD);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Initial state, in case the page restores mid-scroll
                    if let Ok(scroll_y) = window.scroll_y() {
                        shadowed.set(scroll_y > config::HEADER_SHADOW_THRESHOLD);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Escape closes the drawer while it is open
    {
        let drawer_open_handle = drawer_open.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let destructor: Box<dyn FnOnce()> = match (
                    *open,
                    web_sys::window().and_then(|w| w.document()),
                ) {
                    (true, Some(document)) => {
                        let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                            if event.key() == "Escape" {
                                drawer_open_handle.set(false);
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
            *drawer_open,
        );
    }

    let toggle_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| {
            drawer_open.set(!*drawer_open);
        })
    };

    let on_nav = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |section_id: &'static str| {
            scroll_to_section(section_id);
            drawer_open.set(false);
        })
    };

    let on_demo_click = {
        let drawer_open = drawer_open.clone();
        let on_request_demo = props.on_request_demo.clone();
        Callback::from(move |_: MouseEvent| {
            drawer_open.set(false);
            on_request_demo.emit(());
        })
    };

    let nav_links = |class: &'static str| -> Html {
        let on_nav = on_nav.clone();
        html! {
            { for NAV_SECTIONS.iter().map(|(id, label)| {
                let on_nav = on_nav.clone();
                let id = *id;
                html! {
                    <a
                        class={class}
                        href={format!("#{}", id)}
                        onclick={Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_nav.emit(id);
                        })}
                    >
                        {*label}
                    </a>
                }
            }) }
        }
    };

    html! {
        <header class={classes!("header", if *shadowed { "shadowed" } else { "" })}>
            <div class="header-inner">
                <a class="logo" href="#" onclick={{
                    let on_nav = on_nav.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_nav.emit("top");
                    })
                }}>
                    {"KindMeet"}
                </a>
                <nav class="nav-desktop">
                    { nav_links("nav-link") }
                </nav>
                <div class="header-actions">
                    <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                    <button class="btn-login" onclick={on_demo_click.clone()}>{"Request demo"}</button>
                    <button
                        class={classes!("burger", if *drawer_open { "active" } else { "" })}
                        aria-label="Menu"
                        aria-expanded={drawer_open.to_string()}
                        onclick={toggle_drawer}
                    >
                        <span></span><span></span><span></span>
                    </button>
                </div>
            </div>
            <div class={classes!("drawer", if *drawer_open { "open" } else { "" })}>
                { nav_links("drawer-link") }
                <button class="drawer-link" onclick={on_demo_click}>{"Request demo"}</button>
            </div>
        </header>
    }
}
