//! Canvas-space concerns: coordinate mapping and the rendering-layer
//! contract.  The actual drawing of nodes/edges and the pan/zoom gesture
//! handling live in the external rendering layer.

pub mod sink;
pub mod transform;
