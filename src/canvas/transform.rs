//! Screen <-> canvas coordinate mapping.
//!
//! Node positions are stored in canvas (world) space; pointer events arrive
//! in screen pixels.  The mapping depends only on the viewport descriptor
//! supplied by the rendering layer.

use crate::constants::ZOOM_EPSILON;
use crate::models::{NodeType, Position, Viewport};

/// Zoom factor that is safe to divide by.  A zero, negative or non-finite
/// zoom collapses to the epsilon floor rather than poisoning positions with
/// NaN/Infinity.
pub fn effective_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() {
        zoom.max(ZOOM_EPSILON)
    } else {
        1.0
    }
}

/// Map a screen-space point into canvas space.
pub fn canvas_position(screen: Position, viewport: &Viewport) -> Position {
    let zoom = effective_zoom(viewport.zoom);
    Position {
        x: (screen.x - viewport.x) / zoom,
        y: (screen.y - viewport.y) / zoom,
    }
}

/// Inverse of [`canvas_position`].
pub fn screen_position(canvas: Position, viewport: &Viewport) -> Position {
    let zoom = effective_zoom(viewport.zoom);
    Position {
        x: canvas.x * zoom + viewport.x,
        y: canvas.y * zoom + viewport.y,
    }
}

/// Canvas position for a node placed at a pointer event: the mapped point
/// plus the node type's anchor correction, so the default box is centred
/// under the cursor.
pub fn place_at_pointer(node_type: NodeType, screen: Position, viewport: &Viewport) -> Position {
    let mapped = canvas_position(screen, viewport);
    let (off_x, off_y) = node_type.anchor_offset();
    Position {
        x: mapped.x + off_x,
        y: mapped.y + off_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_viewport_maps_one_to_one() {
        let vp = Viewport::default();
        let p = canvas_position(Position::new(500.0, 300.0), &vp);
        assert_eq!(p, Position::new(500.0, 300.0));
    }

    #[test]
    fn pan_and_zoom_are_applied() {
        let vp = Viewport { x: 100.0, y: 50.0, zoom: 2.0 };
        let p = canvas_position(Position::new(500.0, 300.0), &vp);
        assert_eq!(p, Position::new(200.0, 125.0));
    }

    #[test]
    fn zero_zoom_is_clamped_not_divided() {
        let vp = Viewport { x: 0.0, y: 0.0, zoom: 0.0 };
        let p = canvas_position(Position::new(10.0, 10.0), &vp);
        assert!(p.x.is_finite());
        assert!(p.y.is_finite());
    }

    #[test]
    fn non_finite_zoom_falls_back_to_unity() {
        assert_eq!(effective_zoom(f64::NAN), 1.0);
        assert_eq!(effective_zoom(f64::INFINITY), 1.0);
        assert_eq!(effective_zoom(0.5), 0.5);
    }

    #[test]
    fn placement_centres_the_default_box_under_the_pointer() {
        // viewport (0,0,1), click at (500,300), anchor offset (-160,-25)
        let vp = Viewport::default();
        let p = place_at_pointer(NodeType::Trigger, Position::new(500.0, 300.0), &vp);
        assert_eq!(p, Position::new(340.0, 275.0));
    }

    #[test]
    fn screen_round_trip_is_stable() {
        let vp = Viewport { x: -40.0, y: 12.5, zoom: 0.75 };
        let original = Position::new(333.0, -27.0);
        let back = screen_position(canvas_position(original, &vp), &vp);
        assert!((back.x - original.x).abs() < 1e-9);
        assert!((back.y - original.y).abs() < 1e-9);
    }
}
