use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys;
use yew::prelude::*;

use super::theme_toggle::Theme;

#[wasm_bindgen]
extern "C" {
    /// Container handle returned by `tsParticles.load`.
    type ParticlesContainer;

    #[wasm_bindgen(js_namespace = tsParticles, js_name = load, catch)]
    fn ts_particles_load(id: &str, options: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ParticlesContainer);
}

fn particles_options(theme: Theme) -> serde_json::Value {
    // Link lines pick up the theme so they stay visible on both backgrounds.
    let link_color = match theme {
        Theme::Dark => "#ffffff",
        Theme::Light => "#000000",
    };
    json!({
        "fpsLimit": 30,
        "interactivity": {
            "events": { "onHover": { "enable": true, "mode": "repulse" } },
            "modes": { "repulse": { "distance": 100 } }
        },
        "particles": {
            "number": { "value": 50 },
            "size": { "value": 3 },
            "move": { "speed": 0.6 },
            "color": { "value": "#FAEA93" },
            "links": {
                "enable": true,
                "distance": 120,
                "opacity": 0.2,
                "color": { "value": link_color }
            }
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct ParticlesBackgroundProps {
    pub theme: Theme,
}

#[function_component(ParticlesBackground)]
pub fn particles_background(props: &ParticlesBackgroundProps) -> Html {
    let container = use_mut_ref(|| Option::<ParticlesContainer>::None);

    {
        let container = container.clone();
        use_effect_with_deps(
            move |theme: &Theme| {
                let theme = *theme;
                if let Some(previous) = container.borrow_mut().take() {
                    previous.destroy();
                }
                {
                    let container = container.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let options = particles_options(theme).to_string();
                        let options = match js_sys::JSON::parse(&options) {
                            Ok(options) => options,
                            Err(err) => {
                                gloo_console::error!("invalid particles options", err);
                                return;
                            }
                        };
                        match ts_particles_load("particles", &options) {
                            Ok(promise) => match JsFuture::from(promise).await {
                                Ok(loaded) => {
                                    let mut slot = container.borrow_mut();
                                    // A theme switch can land while a load is in
                                    // flight; the newest container wins.
                                    if let Some(previous) = slot.take() {
                                        previous.destroy();
                                    }
                                    *slot = Some(loaded.unchecked_into());
                                }
                                Err(err) => {
                                    gloo_console::error!("particles failed to load", err);
                                }
                            },
                            Err(err) => {
                                gloo_console::error!("tsParticles is not available", err);
                            }
                        }
                    });
                }
                let container = container.clone();
                move || {
                    if let Some(current) = container.borrow_mut().take() {
                        current.destroy();
                    }
                }
            },
            props.theme,
        );
    }

    html! {
        <div id="particles" class="particles" aria-hidden="true"></div>
    }
}
