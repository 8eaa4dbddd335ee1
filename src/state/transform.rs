// Scale + translation of the image inside the viewport.
//
// Derived quantities (computed size, pan bounds) are recomputed from the
// current viewport and image on every call and never stored.
use serde::{Deserialize, Serialize};

use super::viewport::{ImageSize, Viewport, cover_scale};
use crate::geometry::Point;

/// Allowed range for the image's top-left corner. `max_x`/`max_y` are always 0
/// so the image can never expose the viewport's top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawParams {
    pub scale: f64,
    pub min_scale: f64,
    pub x: f64,
    pub y: f64,
}

impl DrawParams {
    /// Cover-fit scale, centered on both axes.
    pub fn centered(viewport: Viewport, image: ImageSize) -> Self {
        let min_scale = cover_scale(viewport, image);
        let mut params = Self {
            scale: min_scale,
            min_scale,
            x: 0.0,
            y: 0.0,
        };
        params.reset_centered(viewport, image);
        params
    }

    pub fn compute_width(&self, image: ImageSize) -> f64 {
        self.scale * image.width
    }

    pub fn compute_height(&self, image: ImageSize) -> f64 {
        self.scale * image.height
    }

    pub fn bounds(&self, viewport: Viewport, image: ImageSize) -> Bounds {
        Bounds {
            min_x: -(self.compute_width(image) - viewport.width),
            max_x: 0.0,
            min_y: -(self.compute_height(image) - viewport.height),
            max_y: 0.0,
        }
    }

    pub fn reset_centered(&mut self, viewport: Viewport, image: ImageSize) {
        self.scale = self.min_scale;
        let bounds = self.bounds(viewport, image);
        self.x = bounds.min_x / 2.0;
        self.y = bounds.min_y / 2.0;
    }

    /// Leaves `scale` alone; the next [`clamp`](Self::clamp) raises it if needed.
    pub fn recompute_min_scale(&mut self, viewport: Viewport, image: ImageSize) {
        self.min_scale = cover_scale(viewport, image);
    }

    pub fn pan_by(&mut self, delta: Point, viewport: Viewport, image: ImageSize) {
        if !delta.is_finite() {
            return;
        }
        self.x += delta.x;
        self.y += delta.y;
        self.clamp(viewport, image);
    }

    /// Scale by `factor` keeping `center` stationary, then carry the pinch
    /// midpoint's own movement (`drift`).
    pub fn zoom_about(
        &mut self,
        factor: f64,
        center: Point,
        drift: Point,
        viewport: Viewport,
        image: ImageSize,
    ) {
        if !(factor.is_finite() && factor > 0.0 && center.is_finite() && drift.is_finite()) {
            return;
        }
        self.scale_about(factor, center, drift);
        self.clamp(viewport, image);
    }

    fn scale_about(&mut self, factor: f64, center: Point, drift: Point) {
        self.x = factor * self.x + center.x * (1.0 - factor) + drift.x;
        self.y = factor * self.y + center.y * (1.0 - factor) + drift.y;
        self.scale *= factor;
    }

    /// Restores `scale >= min_scale` and keeps the top-left inside [`Bounds`].
    pub fn clamp(&mut self, viewport: Viewport, image: ImageSize) {
        if self.scale < self.min_scale {
            self.scale = self.min_scale;
        }
        let bounds = self.bounds(viewport, image);
        if self.x > bounds.max_x {
            self.x = bounds.max_x;
        } else if self.x < bounds.min_x {
            self.x = bounds.min_x;
        }
        if self.y > bounds.max_y {
            self.y = bounds.max_y;
        } else if self.y < bounds.min_y {
            self.y = bounds.min_y;
        }
    }
}
