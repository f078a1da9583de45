use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config;

/// Smooth-scrolls the window so `section_id` sits just below the fixed
/// header. Unknown ids are ignored.
pub fn scroll_to_section(section_id: &str) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let target = window
        .document()
        .and_then(|doc| doc.get_element_by_id(section_id));
    if let Some(target) = target {
        let offset = target.get_bounding_client_rect().top()
            + window.page_y_offset().unwrap_or(0.0)
            - config::HEADER_SCROLL_OFFSET;
        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
