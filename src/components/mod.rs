//! DOM-facing components.  Everything here is glue between browser events
//! and the message dispatch; no graph logic lives in this layer.

pub mod context_menu;
pub mod drag_controller;
pub mod node_resizer;
