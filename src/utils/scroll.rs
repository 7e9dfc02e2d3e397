use web_sys::{ScrollBehavior, ScrollToOptions};

/// Height of the fixed navbar; anchored sections scroll to just below it.
const NAVBAR_OFFSET: f64 = 80.0;

/// Smooth-scrolls so the section with `id` lands below the navbar.
/// No-ops when the section is missing from the page.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        return;
    };
    let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
        - NAVBAR_OFFSET;

    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scrolls back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
