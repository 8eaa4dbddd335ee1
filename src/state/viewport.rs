use serde::{Deserialize, Serialize};

/// Pixel size of the drawable surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Natural size of the loaded bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    /// `None` for empty or non-finite dimensions, which would make the cover
    /// scale infinite.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }
}

/// Smallest scale at which `image` still covers all of `viewport`.
pub fn cover_scale(viewport: Viewport, image: ImageSize) -> f64 {
    let width_scale = viewport.width / image.width;
    let height_scale = viewport.height / image.height;
    width_scale.max(height_scale)
}
