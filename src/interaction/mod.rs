//! Pointer-driven camera controls.

mod controls;

pub use controls::OrbitControls;
