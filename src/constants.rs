// Default values for the designer - these are the single source of truth for defaults

// Node visual defaults
pub const DEFAULT_NODE_WIDTH: f64 = 320.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 50.0;
pub const MIN_NODE_WIDTH: f64 = 80.0;
pub const MIN_NODE_HEIGHT: f64 = 40.0;

// Coordinate mapping
// Zoom is clamped to this floor before any division so a malformed viewport
// (zoom == 0) can never produce NaN/Infinity positions.
pub const ZOOM_EPSILON: f64 = 1e-6;

// Context menu placement: gap between the pointer and the menu edge, in
// screen pixels.
pub const MENU_CURSOR_GAP: f64 = 2.0;

// Resize handles
pub const RESIZE_HANDLE_SIZE: f64 = 8.0;
