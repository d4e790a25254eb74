//! Rails camera for the demo scene.
//!
//! Drives the camera along a fixed cyclic waypoint path while blending
//! mouse-look into the view direction, with a capture toggle that freezes
//! the ride for UI interaction.

/// Rails camera resource, capture state machine and controller system.
pub mod rails_camera;
