//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Shared by the context menus, resize handles and toasts so positioning and
//! one-shot `<style>` injection are not re-implemented per component.

use web_sys::{Document, HtmlElement, Window};

/// Format a length for inline styles.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Current viewport size in CSS pixels.  Falls back to zero when the values
/// are unavailable, which makes every clamp a no-op instead of an error.
pub fn window_inner_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Move a `position: fixed` element to the given screen point.
pub fn set_position(el: &HtmlElement, x: f64, y: f64) {
    let style = el.style();
    let _ = style.set_property("left", &px(x));
    let _ = style.set_property("top", &px(y));
}

/// Inject a `<style>` block into `<head>` exactly once per page, keyed by
/// element id.
pub fn ensure_style_block(document: &Document, id: &str, css: &str) {
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let style = match document.create_element("style") {
        Ok(el) => el,
        Err(_) => return,
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    if let Ok(Some(head)) = document.query_selector("head") {
        let _ = head.append_child(&style);
    } else if let Some(body) = document.body() {
        let _ = body.append_child(&style);
    }
}
