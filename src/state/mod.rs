pub mod touch;
pub mod transform;
pub mod viewport;

pub use touch::{Gesture, TouchSnapshot, TouchTracker};
pub use transform::{Bounds, DrawParams};
pub use viewport::{ImageSize, Viewport, cover_scale};
