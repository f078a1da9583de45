use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

/// Slide position state for the testimonial slider. Indexes wrap on both
/// ends, so any integer is a valid navigation target.
pub struct Carousel {
    slide_count: usize,
    active_index: usize,
}

impl Carousel {
    /// Returns `None` when there are no slides; the slider is simply not
    /// wired up in that case.
    pub fn new(slide_count: usize) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        Some(Self {
            slide_count,
            active_index: 0,
        })
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Moves to `index` modulo the slide count, so `go_to(-1)` lands on the
    /// last slide. Returns the new active index.
    pub fn go_to(&mut self, index: i32) -> usize {
        self.active_index = index.rem_euclid(self.slide_count as i32) as usize;
        self.active_index
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.active_index as i32 + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.active_index as i32 - 1)
    }
}

/// Owner of the autoplay timer. There is never more than one live handle:
/// every start path takes the previous handle first, and dropping a handle
/// cancels its timer.
pub struct Autoplay<H> {
    handle: Option<H>,
    active: bool,
}

impl<H> Autoplay<H> {
    /// Autoplay begins in the running state; the first `resume` call
    /// schedules the actual timer.
    pub fn new() -> Self {
        Self {
            handle: None,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancels the timer if one is live. Calling this while already paused
    /// is a no-op.
    pub fn pause(&mut self) {
        self.active = false;
        self.handle = None;
    }

    /// Starts a timer unless one is already live. Calling this while
    /// already running is a no-op.
    pub fn resume(&mut self, start: impl FnOnce() -> H) {
        self.active = true;
        if self.handle.is_none() {
            self.handle = Some(start());
        }
    }

    /// Manual-navigation reset: stop whatever timer is live, then start a
    /// fresh one. Leaves the paused flag untouched.
    pub fn restart(&mut self, start: impl FnOnce() -> H) {
        self.handle = None;
        self.handle = Some(start());
    }
}

impl<H> Default for Autoplay<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct TestimonialSliderProps {
    pub slides: Vec<Testimonial>,
}

fn spawn_autoplay(
    carousel: Rc<RefCell<Option<Carousel>>>,
    active_index: UseStateHandle<usize>,
) -> Interval {
    Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
        if let Some(carousel) = carousel.borrow_mut().as_mut() {
            active_index.set(carousel.next());
        }
    })
}

#[function_component(TestimonialSlider)]
pub fn testimonial_slider(props: &TestimonialSliderProps) -> Html {
    let carousel = use_mut_ref(|| Carousel::new(props.slides.len()));
    let autoplay = use_mut_ref(Autoplay::<Interval>::new);
    let active_index = use_state(|| 0usize);

    // Start autoplay on mount, cancel the timer when the slider unmounts.
    // Without slides there is no carousel and nothing to schedule.
    {
        let carousel = carousel.clone();
        let autoplay = autoplay.clone();
        let active_index = active_index.clone();
        use_effect_with_deps(
            move |_| {
                if carousel.borrow().is_some() {
                    let carousel = carousel.clone();
                    let active_index = active_index.clone();
                    autoplay
                        .borrow_mut()
                        .resume(move || spawn_autoplay(carousel, active_index));
                }
                move || {
                    autoplay.borrow_mut().pause();
                }
            },
            (),
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        let autoplay = autoplay.clone();
        let active_index = active_index.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(c) = carousel.borrow_mut().as_mut() {
                active_index.set(c.prev());
            }
            let carousel = carousel.clone();
            let active_index = active_index.clone();
            autoplay
                .borrow_mut()
                .restart(move || spawn_autoplay(carousel, active_index));
        })
    };

    let on_next = {
        let carousel = carousel.clone();
        let autoplay = autoplay.clone();
        let active_index = active_index.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(c) = carousel.borrow_mut().as_mut() {
                active_index.set(c.next());
            }
            let carousel = carousel.clone();
            let active_index = active_index.clone();
            autoplay
                .borrow_mut()
                .restart(move || spawn_autoplay(carousel, active_index));
        })
    };

    let on_dot = {
        let carousel = carousel.clone();
        let autoplay = autoplay.clone();
        let active_index = active_index.clone();
        Callback::from(move |index: usize| {
            if let Some(c) = carousel.borrow_mut().as_mut() {
                active_index.set(c.go_to(index as i32));
            }
            let carousel = carousel.clone();
            let active_index = active_index.clone();
            autoplay
                .borrow_mut()
                .restart(move || spawn_autoplay(carousel, active_index));
        })
    };

    let on_mouse_enter = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| {
            autoplay.borrow_mut().pause();
        })
    };

    let on_mouse_leave = {
        let carousel = carousel.clone();
        let autoplay = autoplay.clone();
        let active_index = active_index.clone();
        Callback::from(move |_: MouseEvent| {
            let carousel = carousel.clone();
            let active_index = active_index.clone();
            autoplay
                .borrow_mut()
                .resume(move || spawn_autoplay(carousel, active_index));
        })
    };

    if props.slides.is_empty() {
        return html! {};
    }

    html! {
        <div class="slider" onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}>
            <div
                class="slides"
                style={format!("transform: translateX(-{}%);", *active_index * 100)}
            >
                { for props.slides.iter().map(|t| html! {
                    <figure class="slide">
                        <blockquote>{t.quote}</blockquote>
                        <figcaption>
                            <span class="slide-author">{t.author}</span>
                            <span class="slide-role">{t.role}</span>
                        </figcaption>
                    </figure>
                }) }
            </div>
            <button class="slider-arrow slider-prev" aria-label="Previous testimonial"
                onclick={on_prev}>{"‹"}</button>
            <button class="slider-arrow slider-next" aria-label="Next testimonial"
                onclick={on_next}>{"›"}</button>
            <div class="dots">
                { for (0..props.slides.len()).map(|i| {
                    let on_dot = on_dot.clone();
                    html! {
                        <button
                            class={classes!("dot", if i == *active_index { "active" } else { "" })}
                            aria-label={format!("Go to testimonial {}", i + 1)}
                            onclick={Callback::from(move |_: MouseEvent| on_dot.emit(i))}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct TickerGuard {
        live: Rc<Cell<usize>>,
    }

    impl Drop for TickerGuard {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    fn start_ticker(live: &Rc<Cell<usize>>) -> impl FnOnce() -> TickerGuard {
        let live = live.clone();
        move || {
            live.set(live.get() + 1);
            TickerGuard { live }
        }
    }

    #[test]
    fn go_to_always_lands_in_range() {
        for slide_count in 1..=7 {
            let mut carousel = Carousel::new(slide_count).unwrap();
            for index in -30..30 {
                let landed = carousel.go_to(index);
                assert!(landed < slide_count, "index {index} left the range");
            }
        }
    }

    #[test]
    fn go_to_is_periodic_in_the_slide_count() {
        for slide_count in 1..=6i32 {
            let mut carousel = Carousel::new(slide_count as usize).unwrap();
            for index in -12..12 {
                let direct = carousel.go_to(index);
                for k in [-3, -1, 1, 4] {
                    assert_eq!(direct, carousel.go_to(index + k * slide_count));
                }
            }
        }
    }

    #[test]
    fn negative_index_wraps_to_last_slide() {
        let mut carousel = Carousel::new(5).unwrap();
        assert_eq!(carousel.go_to(-1), 4);
    }

    #[test]
    fn next_cycles_back_to_the_start() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.go_to(2);
        let start = carousel.active_index();
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.active_index(), start);
    }

    #[test]
    fn prev_from_first_slide_wraps_to_last() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.prev(), 2);
    }

    #[test]
    fn no_slides_means_no_carousel() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn starts_on_the_first_slide_with_autoplay_running() {
        let carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.slide_count(), 3);

        let autoplay = Autoplay::<TickerGuard>::new();
        assert!(autoplay.is_active());
    }

    #[test]
    fn pause_is_idempotent() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = Autoplay::new();
        autoplay.resume(start_ticker(&live));
        assert_eq!(live.get(), 1);

        autoplay.pause();
        assert_eq!(live.get(), 0);
        assert!(!autoplay.is_active());

        autoplay.pause();
        assert_eq!(live.get(), 0);
        assert!(!autoplay.is_active());
    }

    #[test]
    fn resume_does_not_stack_timers() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = Autoplay::new();
        autoplay.resume(start_ticker(&live));
        autoplay.resume(start_ticker(&live));
        assert_eq!(live.get(), 1);
        assert!(autoplay.is_active());
    }

    #[test]
    fn rapid_manual_advances_keep_a_single_timer() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = Autoplay::new();
        autoplay.resume(start_ticker(&live));

        autoplay.restart(start_ticker(&live));
        autoplay.restart(start_ticker(&live));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn restart_resets_the_timer_even_while_paused() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = Autoplay::new();
        autoplay.pause();

        autoplay.restart(start_ticker(&live));
        assert_eq!(live.get(), 1);
        // The paused flag is a separate concern from the reset side effect.
        assert!(!autoplay.is_active());
    }

    #[test]
    fn hover_pause_then_leave_restores_a_single_running_timer() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = Autoplay::new();
        autoplay.resume(start_ticker(&live));

        autoplay.pause();
        assert_eq!(live.get(), 0);

        autoplay.resume(start_ticker(&live));
        assert_eq!(live.get(), 1);
        assert!(autoplay.is_active());
        assert!(autoplay.is_running());
    }

    #[test]
    fn manual_advance_then_direct_jump() {
        let live = Rc::new(Cell::new(0));
        let mut carousel = Carousel::new(5).unwrap();
        let mut autoplay = Autoplay::new();
        autoplay.resume(start_ticker(&live));

        // Next button: advance, then reset the timer.
        assert_eq!(carousel.next(), 1);
        autoplay.restart(start_ticker(&live));
        assert_eq!(live.get(), 1);

        // Dot selection far out of range wraps back around.
        assert_eq!(carousel.go_to(10), 0);
        autoplay.restart(start_ticker(&live));
        assert_eq!(live.get(), 1);
    }
}
