//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs
//! that fade out after a few seconds.

#[derive(Debug, Clone, Copy)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[allow(dead_code)]
pub fn success(msg: &str) {
    show(msg, ToastKind::Success);
}

#[allow(dead_code)]
pub fn error(msg: &str) {
    show(msg, ToastKind::Error);
}

pub fn info(msg: &str) {
    show(msg, ToastKind::Info);
}

/// No-op outside the browser so reducers that raise toasts stay testable on
/// the host target.
#[cfg(not(target_arch = "wasm32"))]
pub fn show(_message: &str, _kind: ToastKind) {}

#[cfg(target_arch = "wasm32")]
pub fn show(message: &str, kind: ToastKind) {
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{Document, Element, HtmlElement};

    fn ensure_root(document: &Document) -> Option<Element> {
        if let Some(el) = document.get_element_by_id("toast-root") {
            return Some(el);
        }
        let root = document.create_element("div").ok()?;
        root.set_id("toast-root");
        root.set_class_name("toast-root");
        document.body()?.append_child(&root).ok()?;
        Some(root)
    }

    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(root) = ensure_root(&document) else { return };

    let Ok(toast) = document.create_element("div") else { return };
    toast.set_class_name("toast");
    let modifier = match kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
        ToastKind::Info => "toast-info",
    };
    let _ = toast.class_list().add_1(modifier);
    toast.set_text_content(Some(message));

    // Prepend so the newest appears on top.
    let _ = root.prepend_with_node_1(&toast);

    // Auto-remove after 4s.
    let toast_clone: HtmlElement = toast.unchecked_into();
    let cb = Closure::once_into_js(move || {
        let _ = toast_clone
            .parent_node()
            .map(|p| p.remove_child(&toast_clone));
    });
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 4000);

    crate::dom_utils::ensure_style_block(
        &document,
        "toast-styles",
        "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
.toast-error{background:#dc2626}
.toast-info{background:#2563eb}
@keyframes toast-in{to{opacity:1}}
",
    );
}
