//! Per-frame update systems that are not part of the camera itself.

/// Debug text overlays: cursor position, path time and FPS readouts.
pub mod debug_overlay;
