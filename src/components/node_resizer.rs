//! Corner resize handles.
//!
//! The rendering layer owns the node boxes; it calls [`attach`] once per
//! selected node container and gets four absolutely-positioned corner
//! squares whose mousedown starts a resize drag.  From there the window
//! listeners in `drag_controller` take over, so the gesture survives the
//! pointer leaving the handle.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::models::HandleCorner;

/// CSS cursor for a corner handle.
pub fn cursor_for(corner: HandleCorner) -> &'static str {
    match corner {
        HandleCorner::TopLeft => "nw-resize",
        HandleCorner::TopRight => "ne-resize",
        HandleCorner::BottomLeft => "sw-resize",
        HandleCorner::BottomRight => "se-resize",
    }
}

#[cfg(target_arch = "wasm32")]
pub fn attach(document: &Document, container: &Element, node_id: &str) -> Result<(), JsValue> {
    use crate::constants::RESIZE_HANDLE_SIZE;
    use crate::dom_utils;
    use crate::messages::Message;
    use crate::models::DragMode;
    use crate::state::dispatch_global_message;

    ensure_styles(document);

    for corner in HandleCorner::ALL {
        let handle: HtmlElement = document.create_element("div")?.dyn_into()?;
        handle.set_class_name("resize-handle");

        let style = handle.style();
        style.set_property("cursor", cursor_for(corner))?;
        // Handles straddle the border: half in, half out.
        let offset = dom_utils::px(-(RESIZE_HANDLE_SIZE / 2.0));
        match corner {
            HandleCorner::TopLeft => {
                style.set_property("top", &offset)?;
                style.set_property("left", &offset)?;
            }
            HandleCorner::TopRight => {
                style.set_property("top", &offset)?;
                style.set_property("right", &offset)?;
            }
            HandleCorner::BottomLeft => {
                style.set_property("bottom", &offset)?;
                style.set_property("left", &offset)?;
            }
            HandleCorner::BottomRight => {
                style.set_property("bottom", &offset)?;
                style.set_property("right", &offset)?;
            }
        }

        let id = node_id.to_string();
        let on_mousedown = Closure::wrap(Box::new(move |event: MouseEvent| {
            // Keep the gesture ours: no node move, no selection change.
            event.stop_propagation();
            event.prevent_default();
            dispatch_global_message(Message::StartDrag {
                node_id: id.clone(),
                mode: DragMode::Resize(corner),
            });
        }) as Box<dyn FnMut(MouseEvent)>);
        handle
            .add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref())?;
        on_mousedown.forget();

        container.append_child(&handle)?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn ensure_styles(document: &Document) {
    use crate::constants::RESIZE_HANDLE_SIZE;

    let css = format!(
        "
.resize-handle{{position:absolute;width:{size}px;height:{size}px;background:#fff;border:1px solid #2563eb;border-radius:2px;z-index:10}}
",
        size = RESIZE_HANDLE_SIZE
    );
    crate::dom_utils::ensure_style_block(document, "resize-handle-styles", &css);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_corner_gets_its_diagonal_cursor() {
        assert_eq!(cursor_for(HandleCorner::TopLeft), "nw-resize");
        assert_eq!(cursor_for(HandleCorner::TopRight), "ne-resize");
        assert_eq!(cursor_for(HandleCorner::BottomLeft), "sw-resize");
        assert_eq!(cursor_for(HandleCorner::BottomRight), "se-resize");
    }
}
