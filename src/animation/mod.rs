//! Per-frame animation of the plant model.

mod sway;

pub use sway::SwayAnimation;
