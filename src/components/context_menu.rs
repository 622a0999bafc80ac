//! Context menus for the canvas background and for individual nodes.
//!
//! Positioning is two-phase: the menu is appended hidden, measured, then
//! revealed at a clamped anchor so it never overflows the viewport.  Only
//! one menu is open at a time; a mousedown outside it or Escape dismisses
//! it, and the dismiss listeners live only while a menu is open.

use crate::constants::MENU_CURSOR_GAP;

/// Pick the top-left corner for a menu of `width` x `height` opened at a
/// pointer event.  The menu sits just past the cursor on each axis and flips
/// to the other side independently per axis when it would overflow.
pub fn clamped_anchor(
    event_x: f64,
    event_y: f64,
    width: f64,
    height: f64,
    window_w: f64,
    window_h: f64,
) -> (f64, f64) {
    let x = if event_x + MENU_CURSOR_GAP + width > window_w {
        event_x - MENU_CURSOR_GAP - width
    } else {
        event_x + MENU_CURSOR_GAP
    };
    let y = if event_y + MENU_CURSOR_GAP + height > window_h {
        event_y - MENU_CURSOR_GAP - height
    } else {
        event_y + MENU_CURSOR_GAP
    };
    (x, y)
}

#[cfg(target_arch = "wasm32")]
pub use imp::{close, open_background_menu, open_node_menu};

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::cell::RefCell;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, KeyboardEvent, MouseEvent};

    use crate::dom_utils;
    use crate::messages::Message;
    use crate::models::NodeType;
    use crate::state::{dispatch_global_message, APP_STATE};

    use super::clamped_anchor;

    /// One entry in a menu.  The action runs on click, after which the menu
    /// closes itself.
    pub struct MenuItem {
        pub label: String,
        pub action: Box<dyn Fn()>,
        /// Destructive entries get warn styling.
        pub danger: bool,
    }

    impl MenuItem {
        fn new(label: &str, action: impl Fn() + 'static) -> Self {
            Self { label: label.to_string(), action: Box::new(action), danger: false }
        }

        fn danger(mut self) -> Self {
            self.danger = true;
            self
        }
    }

    struct DismissListeners {
        mousedown: Closure<dyn FnMut(MouseEvent)>,
        keydown: Closure<dyn FnMut(KeyboardEvent)>,
        installed: bool,
    }

    thread_local! {
        static OPEN_MENU: RefCell<Option<HtmlElement>> = RefCell::new(None);
        static DISMISS: RefCell<Option<DismissListeners>> = RefCell::new(None);
    }

    /// Canvas background menu: node placement at the pointer.
    pub fn open_background_menu(document: &Document, client_x: f64, client_y: f64) {
        let place = |node_type: NodeType| {
            move || {
                dispatch_global_message(Message::AddNodeAtPointer {
                    node_type,
                    client_x,
                    client_y,
                    label: None,
                });
            }
        };
        let items = vec![
            MenuItem::new("Add Trigger Node", place(NodeType::Trigger)),
            MenuItem::new("Add Action Node", place(NodeType::Action)),
            MenuItem::new("Add Note", place(NodeType::Note)),
        ];
        open(document, client_x, client_y, items);
    }

    /// Per-node menu: label editing and removal.
    pub fn open_node_menu(document: &Document, node_id: &str, client_x: f64, client_y: f64) {
        let edit_id = node_id.to_string();
        let remove_id = node_id.to_string();
        let items = vec![
            MenuItem::new("Edit Label…", move || edit_label(&edit_id)),
            MenuItem::new("Remove Node", move || {
                dispatch_global_message(Message::RemoveNode { node_id: remove_id.clone() });
            })
            .danger(),
        ];
        open(document, client_x, client_y, items);
    }

    fn edit_label(node_id: &str) {
        let Some(window) = web_sys::window() else { return };
        let Ok(Some(label)) = window.prompt_with_message("Node label:") else { return };
        // Clone the node out of the borrow, then dispatch unborrowed.
        let updated = APP_STATE.with(|state| {
            state
                .borrow()
                .nodes
                .iter()
                .find(|n| n.id == node_id)
                .cloned()
                .map(|mut node| {
                    node.data.label = Some(label.clone());
                    node
                })
        });
        if let Some(node) = updated {
            dispatch_global_message(Message::Nodes {
                op: crate::messages::GraphOp::Update,
                payload: vec![node],
            });
        }
    }

    /// Build, measure, clamp, reveal.  Any previously open menu closes
    /// first.
    pub fn open(document: &Document, client_x: f64, client_y: f64, items: Vec<MenuItem>) {
        close();
        ensure_styles(document);

        let Ok(menu) = document.create_element("div") else { return };
        menu.set_class_name("context-menu");
        let Ok(menu) = menu.dyn_into::<HtmlElement>() else { return };
        // Hidden during the measurement pass so the flip never flashes.
        let _ = menu.style().set_property("visibility", "hidden");

        for item in items {
            let Ok(entry) = document.create_element("div") else { continue };
            entry.set_class_name("context-menu-item");
            if item.danger {
                let _ = entry.class_list().add_1("context-menu-item-danger");
            }
            entry.set_text_content(Some(&item.label));

            let action = item.action;
            let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
                event.stop_propagation();
                action();
                close();
            }) as Box<dyn FnMut(MouseEvent)>);
            let _ = entry
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();

            let _ = menu.append_child(&entry);
        }

        let Some(body) = document.body() else { return };
        if body.append_child(&menu).is_err() {
            return;
        }

        // Measure the rendered size, then clamp against the viewport.
        let rect = menu.get_bounding_client_rect();
        let (window_w, window_h) = match web_sys::window() {
            Some(w) => dom_utils::window_inner_size(&w),
            None => (0.0, 0.0),
        };
        let (x, y) = clamped_anchor(client_x, client_y, rect.width(), rect.height(), window_w, window_h);
        dom_utils::set_position(&menu, x, y);
        let _ = menu.style().set_property("visibility", "visible");

        OPEN_MENU.with(|cell| *cell.borrow_mut() = Some(menu));
        install_dismiss_listeners(document);
    }

    /// Remove the open menu (if any) and unwire the dismiss listeners.
    pub fn close() {
        let menu = OPEN_MENU.with(|cell| cell.borrow_mut().take());
        if let Some(menu) = menu {
            menu.remove();
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    remove_dismiss_listeners(&document);
                }
            }
        }
    }

    fn make_dismiss_listeners() -> DismissListeners {
        let mousedown = Closure::wrap(Box::new(move |event: MouseEvent| {
            let inside = OPEN_MENU.with(|cell| {
                let menu = cell.borrow();
                let Some(menu) = menu.as_ref() else { return false };
                event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .map(|node| menu.contains(Some(&node)))
                    .unwrap_or(false)
            });
            if !inside {
                close();
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                close();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        DismissListeners { mousedown, keydown, installed: false }
    }

    fn install_dismiss_listeners(document: &Document) {
        DISMISS.with(|cell| {
            let mut slot = cell.borrow_mut();
            let listeners = slot.get_or_insert_with(make_dismiss_listeners);
            if listeners.installed {
                return;
            }
            let wired = document
                .add_event_listener_with_callback(
                    "mousedown",
                    listeners.mousedown.as_ref().unchecked_ref(),
                )
                .and_then(|_| {
                    document.add_event_listener_with_callback(
                        "keydown",
                        listeners.keydown.as_ref().unchecked_ref(),
                    )
                });
            match wired {
                Ok(()) => listeners.installed = true,
                Err(e) => crate::console_warn!("Failed to wire menu dismissal: {:?}", e),
            }
        });
    }

    fn remove_dismiss_listeners(document: &Document) {
        DISMISS.with(|cell| {
            let mut slot = cell.borrow_mut();
            let Some(listeners) = slot.as_mut() else { return };
            if !listeners.installed {
                return;
            }
            let _ = document.remove_event_listener_with_callback(
                "mousedown",
                listeners.mousedown.as_ref().unchecked_ref(),
            );
            let _ = document.remove_event_listener_with_callback(
                "keydown",
                listeners.keydown.as_ref().unchecked_ref(),
            );
            listeners.installed = false;
        });
    }

    fn ensure_styles(document: &Document) {
        dom_utils::ensure_style_block(
            document,
            "context-menu-styles",
            "
.context-menu{position:fixed;min-width:160px;background:#fff;border:1px solid #d1d5db;border-radius:4px;box-shadow:0 4px 12px rgba(0,0,0,.15);z-index:10000;font-family:Arial,Helvetica,sans-serif;font-size:13px;padding:4px 0}
.context-menu-item{padding:6px 14px;cursor:pointer;white-space:nowrap;user-select:none}
.context-menu-item:hover{background:#f3f4f6}
.context-menu-item-danger{color:#dc2626}
",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_sits_just_past_the_cursor_when_it_fits() {
        let (x, y) = clamped_anchor(100.0, 200.0, 180.0, 90.0, 1920.0, 1080.0);
        assert_eq!((x, y), (100.0 + MENU_CURSOR_GAP, 200.0 + MENU_CURSOR_GAP));
    }

    #[test]
    fn menu_flips_left_near_the_right_edge() {
        let event_x = 1920.0 - 10.0;
        let (x, _) = clamped_anchor(event_x, 100.0, 180.0, 90.0, 1920.0, 1080.0);
        assert_eq!(x, event_x - MENU_CURSOR_GAP - 180.0);
    }

    #[test]
    fn menu_flips_up_near_the_bottom_edge() {
        let event_y = 1080.0 - 5.0;
        let (_, y) = clamped_anchor(100.0, event_y, 180.0, 90.0, 1920.0, 1080.0);
        assert_eq!(y, event_y - MENU_CURSOR_GAP - 90.0);
    }

    #[test]
    fn axes_flip_independently() {
        // Bottom-right corner: both axes flip.
        let (x, y) = clamped_anchor(1915.0, 1075.0, 180.0, 90.0, 1920.0, 1080.0);
        assert!(x < 1915.0);
        assert!(y < 1075.0);
        // Right edge only: x flips, y does not.
        let (x, y) = clamped_anchor(1915.0, 10.0, 180.0, 90.0, 1920.0, 1080.0);
        assert!(x < 1915.0);
        assert_eq!(y, 10.0 + MENU_CURSOR_GAP);
    }
}
