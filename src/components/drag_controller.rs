//! Window-level listener lifecycle for the drag state machine.
//!
//! While a drag is live, mousemove/mouseup/Escape are captured at the window
//! so the gesture keeps tracking even when the pointer leaves the node that
//! started it.  The reducers decide *when* to wire and unwire (via
//! `Command::update_ui`); this module owns *how*.
//!
//! The closures are created once and kept alive in a thread-local for the
//! page's lifetime.  Entering and leaving the DRAGGING state only attaches
//! and detaches them, so a closure is never dropped while the browser is
//! inside it (mouseup tears the listeners down from within its own handler).

/// Attach the window listeners.  Idempotent: re-entering DRAGGING while
/// already wired is a no-op.
pub fn enter_dragging() {
    #[cfg(target_arch = "wasm32")]
    imp::install();
}

/// Detach the window listeners.  Idempotent.
pub fn exit_dragging() {
    #[cfg(target_arch = "wasm32")]
    imp::remove();
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::cell::RefCell;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{KeyboardEvent, MouseEvent};

    use crate::messages::Message;
    use crate::state::dispatch_global_message;

    struct Listeners {
        mousemove: Closure<dyn FnMut(MouseEvent)>,
        mouseup: Closure<dyn FnMut(MouseEvent)>,
        keydown: Closure<dyn FnMut(KeyboardEvent)>,
        installed: bool,
    }

    thread_local! {
        static LISTENERS: RefCell<Option<Listeners>> = RefCell::new(None);
    }

    fn make_listeners() -> Listeners {
        let mousemove = Closure::wrap(Box::new(move |event: MouseEvent| {
            dispatch_global_message(Message::UpdateDrag {
                movement_x: event.movement_x() as f64,
                movement_y: event.movement_y() as f64,
            });
        }) as Box<dyn FnMut(MouseEvent)>);

        let mouseup = Closure::wrap(Box::new(move |_event: MouseEvent| {
            dispatch_global_message(Message::StopDrag);
        }) as Box<dyn FnMut(MouseEvent)>);

        let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                dispatch_global_message(Message::CancelDrag);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        Listeners { mousemove, mouseup, keydown, installed: false }
    }

    pub(super) fn install() {
        let Some(window) = web_sys::window() else { return };
        LISTENERS.with(|cell| {
            let mut slot = cell.borrow_mut();
            let listeners = slot.get_or_insert_with(make_listeners);
            if listeners.installed {
                return;
            }
            let wired = window
                .add_event_listener_with_callback(
                    "mousemove",
                    listeners.mousemove.as_ref().unchecked_ref(),
                )
                .and_then(|_| {
                    window.add_event_listener_with_callback(
                        "mouseup",
                        listeners.mouseup.as_ref().unchecked_ref(),
                    )
                })
                .and_then(|_| {
                    window.add_event_listener_with_callback(
                        "keydown",
                        listeners.keydown.as_ref().unchecked_ref(),
                    )
                });
            match wired {
                Ok(()) => listeners.installed = true,
                Err(e) => crate::console_warn!("Failed to wire drag listeners: {:?}", e),
            }
        });
    }

    pub(super) fn remove() {
        let Some(window) = web_sys::window() else { return };
        LISTENERS.with(|cell| {
            let mut slot = cell.borrow_mut();
            let Some(listeners) = slot.as_mut() else { return };
            if !listeners.installed {
                return;
            }
            let _ = window.remove_event_listener_with_callback(
                "mousemove",
                listeners.mousemove.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "mouseup",
                listeners.mouseup.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "keydown",
                listeners.keydown.as_ref().unchecked_ref(),
            );
            listeners.installed = false;
        });
    }
}
