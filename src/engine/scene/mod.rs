//! Static demo scene content.

/// The two demo cubes the ride circles around.
pub mod cubes;

/// Ground grid and world axis overlay.
pub mod grid;
