use gloo_timers::callback::Timeout;
use web_sys::js_sys;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::carousel::{Testimonial, TestimonialSlider};
use crate::components::copy_link::CopyMeetingLink;
use crate::components::faq::FaqItem;
use crate::components::forms::ContactForm;
use crate::components::magnetic::MagneticButton;
use crate::components::modal::DemoModal;
use crate::components::particles::ParticlesBackground;
use crate::components::reveal::Reveal;
use crate::components::site_header::SiteHeader;
use crate::components::theme_toggle::{apply_theme, detect_initial_theme, Theme};
use crate::components::toast::Toast;
use crate::components::typewriter::Typewriter;
use crate::config;
use crate::utils::scroll::scroll_to_section;

const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        quote: "We cut our time-to-offer in half. Candidates keep telling us the \
                interviews felt like conversations, not interrogations.",
        author: "Maya Lindqvist",
        role: "Head of Talent, Fathom Labs",
    },
    Testimonial {
        quote: "The structured rooms keep every panel on script. Our hiring bar \
                finally means the same thing across offices.",
        author: "Jordan Okafor",
        role: "Engineering Director, Plexa",
    },
    Testimonial {
        quote: "Scheduling used to eat a full day a week. Now it's a link in an \
                email and everyone just shows up.",
        author: "Sofia Reyes",
        role: "Recruiting Ops, Northbeam Health",
    },
    Testimonial {
        quote: "KindMeet is the only interview tool our candidates have ever \
                complimented unprompted.",
        author: "Tom Arnarson",
        role: "Co-founder, Driftline",
    },
    Testimonial {
        quote: "We onboarded forty interviewers in an afternoon. The product gets \
                out of the way, which is the highest praise I have.",
        author: "Priya Natarajan",
        role: "VP People, Coralbridge",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_state(detect_initial_theme);
    let toast_message = use_state(|| Option::<String>::None);
    let toast_timer = use_mut_ref(|| Option::<Timeout>::None);
    let demo_open = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Apply the theme on mount and on every toggle
    {
        use_effect_with_deps(
            move |theme: &Theme| {
                apply_theme(*theme);
                || ()
            },
            *theme,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| {
            theme.set(next);
        })
    };

    let show_toast = {
        let toast_message = toast_message.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |message: String| {
            toast_message.set(Some(message));
            let toast_message = toast_message.clone();
            // A fresh toast replaces the pending dismissal
            *toast_timer.borrow_mut() =
                Some(Timeout::new(config::TOAST_DURATION_MS, move || {
                    toast_message.set(None);
                }));
        })
    };

    let open_demo = {
        let demo_open = demo_open.clone();
        Callback::from(move |_: ()| {
            demo_open.set(true);
        })
    };

    let close_demo = {
        let demo_open = demo_open.clone();
        Callback::from(move |_: ()| {
            demo_open.set(false);
        })
    };

    let open_demo_click = {
        let demo_open = demo_open.clone();
        Callback::from(move |_: MouseEvent| {
            demo_open.set(true);
        })
    };

    let on_see_features = Callback::from(move |_: MouseEvent| {
        scroll_to_section("features");
    });

    let on_quick_schedule = {
        let show_toast = show_toast.clone();
        Callback::from(move |_: MouseEvent| {
            show_toast.emit("Scheduling wizard coming soon".to_string());
        })
    };

    let on_preview_room = {
        let show_toast = show_toast.clone();
        Callback::from(move |_: MouseEvent| {
            show_toast.emit("Launching preview (mock)".to_string());
        })
    };

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div id="top" class="landing-page">
            <ParticlesBackground theme={*theme} />
            <SiteHeader
                theme={*theme}
                on_toggle_theme={on_toggle_theme}
                on_request_demo={open_demo.clone()}
            />
            <main>
                <section class="hero">
                    <Typewriter text={config::HERO_HEADLINE.to_string()} />
                    <p class="hero-subtitle">
                        {"Structured interview rooms, kinder candidate experiences, and \
                          scheduling that takes care of itself."}
                    </p>
                    <div class="hero-cta-group">
                        <MagneticButton class={classes!("hero-cta")} onclick={open_demo_click.clone()}>
                            {"Request a demo"}
                        </MagneticButton>
                        <MagneticButton class={classes!("btn-outline")} onclick={on_see_features}>
                            {"See how it works"}
                        </MagneticButton>
                    </div>
                    <div class="quick-actions">
                        <button class="btn-ghost" onclick={on_quick_schedule}>
                            {"Schedule interviews"}
                        </button>
                        <button class="btn-ghost" onclick={on_preview_room}>
                            {"Preview a room"}
                        </button>
                    </div>
                    <CopyMeetingLink on_toast={show_toast.clone()} />
                </section>

                <section id="features" class="features-section">
                    <h2>{"Why teams switch"}</h2>
                    <div class="feature-grid">
                        <Reveal class={classes!("feature-card")}>
                            <h3>{"Rooms that run themselves"}</h3>
                            <p>{"Agendas, scorecards, and timers live inside the call. \
                                 Interviewers stop winging it without noticing they stopped."}</p>
                        </Reveal>
                        <Reveal class={classes!("feature-card")}>
                            <h3>{"One link, zero back-and-forth"}</h3>
                            <p>{"Candidates pick a slot from your panel's real availability. \
                                 Reschedules propagate before anyone has to apologize."}</p>
                        </Reveal>
                        <Reveal class={classes!("feature-card")}>
                            <h3>{"Feedback while it's fresh"}</h3>
                            <p>{"Structured scorecards open the moment a room ends, so \
                                 debriefs compare notes instead of recollections."}</p>
                        </Reveal>
                        <Reveal class={classes!("feature-card")}>
                            <h3>{"Kind by default"}</h3>
                            <p>{"Prep packets, named panelists, and no surprise whiteboards. \
                                 Candidates walk in knowing what to expect."}</p>
                        </Reveal>
                    </div>
                </section>

                <section id="testimonials" class="testimonials-section">
                    <Reveal>
                        <h2>{"Loved by hiring teams"}</h2>
                        <TestimonialSlider slides={TESTIMONIALS.to_vec()} />
                    </Reveal>
                </section>

                <section id="faq" class="faq-section">
                    <Reveal>
                        <h2>{"Frequently asked questions"}</h2>
                        <FaqItem question="Do candidates need to install anything?">
                            <p>{"No. Interview rooms open in the browser from a single link, \
                                 on any device with a camera."}</p>
                        </FaqItem>
                        <FaqItem question="Does KindMeet replace our ATS?">
                            <p>{"It sits alongside it. Scorecards and scheduling sync back to \
                                 the systems you already use."}</p>
                        </FaqItem>
                        <FaqItem question="How long does rollout take?">
                            <p>{"Most teams run their first structured interview the same week. \
                                 Templates cover the common loops out of the box."}</p>
                        </FaqItem>
                        <FaqItem question="What about recordings and privacy?">
                            <p>{"Recording is off by default and always announced. Data stays \
                                 in your region and leaves when you do."}</p>
                        </FaqItem>
                    </Reveal>
                </section>

                <section id="contact" class="contact-section">
                    <Reveal>
                        <h2>{"Talk to us"}</h2>
                        <ContactForm on_toast={show_toast.clone()} />
                    </Reveal>
                </section>
            </main>

            <footer class="footer">
                <span>{format!("© {} KindMeet", year)}</span>
                <span class="footer-tag">{"Human-friendly interviews"}</span>
            </footer>

            <DemoModal
                open={*demo_open}
                on_close={close_demo}
                on_toast={show_toast.clone()}
            />
            <Toast message={(*toast_message).clone()} />
        </div>
    }
}
