use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::js_sys;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::utils::validation::{is_filled, is_valid_email};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = canvasConfetti, catch)]
    fn canvas_confetti(options: &JsValue) -> Result<(), JsValue>;
}

// The confetti bundle comes off a CDN; treat a missing global as "no
// confetti today" rather than an error.
fn fire_confetti() {
    let options = serde_json::json!({
        "particleCount": 100,
        "spread": 70,
        "origin": { "y": 0.6 }
    })
    .to_string();
    if let Ok(options) = js_sys::JSON::parse(&options) {
        let _ = canvas_confetti(&options);
    }
}

fn field_class(invalid: bool) -> Classes {
    classes!("field", if invalid { "invalid" } else { "" })
}

#[derive(Serialize)]
struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_toast: Callback<String>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let name_invalid = use_state(|| false);
    let email_invalid = use_state(|| false);
    let message_invalid = use_state(|| false);

    let on_name_input = {
        let name = name.clone();
        let name_invalid = name_invalid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            name_invalid.set(!is_filled(&value));
            name.set(value);
        })
    };

    let on_email_input = {
        let email = email.clone();
        let email_invalid = email_invalid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            email_invalid.set(!(is_filled(&value) && is_valid_email(&value)));
            email.set(value);
        })
    };

    let on_message_input = {
        let message = message.clone();
        let message_invalid = message_invalid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let value = input.value();
            message_invalid.set(!is_filled(&value));
            message.set(value);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let name_invalid = name_invalid.clone();
        let email_invalid = email_invalid.clone();
        let message_invalid = message_invalid.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_ok = is_filled(&name);
            let email_ok = is_filled(&email) && is_valid_email(&email);
            let message_ok = is_filled(&message);
            name_invalid.set(!name_ok);
            email_invalid.set(!email_ok);
            message_invalid.set(!message_ok);
            if name_ok && email_ok && message_ok {
                let submission = ContactSubmission {
                    name: (*name).clone(),
                    email: (*email).clone(),
                    message: (*message).clone(),
                };
                match serde_json::to_string(&submission) {
                    // There is no backend; the console stands in for it.
                    Ok(payload) => gloo_console::log!("contact submission", payload),
                    Err(err) => gloo_console::error!("submission serialization", err.to_string()),
                }
                on_toast.emit("Thanks! We will reach out soon.".to_string());
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            } else {
                on_toast.emit("Please fix the highlighted fields.".to_string());
            }
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class={field_class(*name_invalid)}>
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    value={(*name).clone()}
                    oninput={on_name_input}
                    required=true
                />
            </div>
            <div class={field_class(*email_invalid)}>
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    required=true
                />
            </div>
            <div class={field_class(*message_invalid)}>
                <label for="contact-message">{"How can we help?"}</label>
                <textarea
                    id="contact-message"
                    value={(*message).clone()}
                    oninput={on_message_input}
                    required=true
                />
            </div>
            <button class="btn" type="submit">{"Send message"}</button>
        </form>
    }
}

#[derive(Serialize)]
struct DemoRequest {
    name: String,
    email: String,
    company: String,
}

#[derive(Properties, PartialEq)]
pub struct DemoFormProps {
    pub on_toast: Callback<String>,
    /// Fired shortly after a successful submission so the hosting modal
    /// can close itself.
    pub on_done: Callback<()>,
}

#[function_component(DemoForm)]
pub fn demo_form(props: &DemoFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let name_invalid = use_state(|| false);
    let email_invalid = use_state(|| false);
    let company_invalid = use_state(|| false);

    let on_name_input = {
        let name = name.clone();
        let name_invalid = name_invalid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            name_invalid.set(!is_filled(&value));
            name.set(value);
        })
    };

    let on_email_input = {
        let email = email.clone();
        let email_invalid = email_invalid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            email_invalid.set(!(is_filled(&value) && is_valid_email(&value)));
            email.set(value);
        })
    };

    let on_company_input = {
        let company = company.clone();
        let company_invalid = company_invalid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            company_invalid.set(!is_filled(&value));
            company.set(value);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let company = company.clone();
        let name_invalid = name_invalid.clone();
        let email_invalid = email_invalid.clone();
        let company_invalid = company_invalid.clone();
        let on_toast = props.on_toast.clone();
        let on_done = props.on_done.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_ok = is_filled(&name);
            let email_ok = is_filled(&email) && is_valid_email(&email);
            let company_ok = is_filled(&company);
            name_invalid.set(!name_ok);
            email_invalid.set(!email_ok);
            company_invalid.set(!company_ok);
            if name_ok && email_ok && company_ok {
                let request = DemoRequest {
                    name: (*name).clone(),
                    email: (*email).clone(),
                    company: (*company).clone(),
                };
                match serde_json::to_string(&request) {
                    Ok(payload) => gloo_console::log!("demo request", payload),
                    Err(err) => gloo_console::error!("submission serialization", err.to_string()),
                }
                on_toast.emit("Thanks! We will reach out soon.".to_string());
                fire_confetti();
                name.set(String::new());
                email.set(String::new());
                company.set(String::new());
                let on_done = on_done.clone();
                // Let the toast land before the modal disappears
                Timeout::new(config::MODAL_CLOSE_DELAY_MS, move || {
                    on_done.emit(());
                })
                .forget();
            } else {
                on_toast.emit("Please fix the highlighted fields.".to_string());
            }
        })
    };

    html! {
        <form class="demo-form" {onsubmit}>
            <div class={field_class(*name_invalid)}>
                <label for="demo-name">{"Name"}</label>
                <input
                    id="demo-name"
                    type="text"
                    value={(*name).clone()}
                    oninput={on_name_input}
                    required=true
                />
            </div>
            <div class={field_class(*email_invalid)}>
                <label for="demo-email">{"Work email"}</label>
                <input
                    id="demo-email"
                    type="email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    required=true
                />
            </div>
            <div class={field_class(*company_invalid)}>
                <label for="demo-company">{"Company"}</label>
                <input
                    id="demo-company"
                    type="text"
                    value={(*company).clone()}
                    oninput={on_company_input}
                    required=true
                />
            </div>
            <button class="btn" type="submit">{"Request demo"}</button>
        </form>
    }
}
