use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: String,
}

/// Types the headline out one character per tick, then drops the interval
/// and the caret styling.
#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let typed_chars = use_state(|| 0usize);
    let interval_handle = use_mut_ref(|| Option::<Interval>::None);
    let total = props.text.chars().count();
    let done = *typed_chars >= total;

    {
        let typed_chars = typed_chars.clone();
        let interval_handle = interval_handle.clone();
        use_effect_with_deps(
            move |_| {
                let mut typed = 0usize;
                *interval_handle.borrow_mut() =
                    Some(Interval::new(config::TYPEWRITER_TICK_MS, move || {
                        typed += 1;
                        typed_chars.set(typed);
                    }));
                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    // The ticking closure only advances state; cancellation happens out
    // here once the full text is on screen.
    {
        let interval_handle = interval_handle.clone();
        use_effect_with_deps(
            move |finished: &bool| {
                if *finished {
                    interval_handle.borrow_mut().take();
                }
                || ()
            },
            done,
        );
    }

    let shown: String = props.text.chars().take(*typed_chars).collect();
    html! {
        <h1 class={classes!("typewriter", if done { "done" } else { "" })}>{shown}</h1>
    }
}
