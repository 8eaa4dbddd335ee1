//! Gesture-to-transform engine.
//!
//! `CropEngine` owns the viewport, the loaded image size, the transform and
//! the touch tracker. Every handler runs tracker update, transform mutation
//! and clamp in that order, and reports whether a redraw is due. It never
//! touches a real surface, so hosts decide how and when to paint.

use crate::geometry::Point;
use crate::render::Frame;
use crate::state::{DrawParams, Gesture, ImageSize, TouchSnapshot, TouchTracker, Viewport};
use crate::util::clog;

#[derive(Debug, Clone, Default)]
pub struct CropEngine {
    viewport: Viewport,
    image: Option<ImageSize>,
    params: Option<DrawParams>,
    tracker: TouchTracker,
}

impl CropEngine {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn image(&self) -> Option<ImageSize> {
        self.image
    }

    pub fn params(&self) -> Option<&DrawParams> {
        self.params.as_ref()
    }

    pub fn touch(&self) -> Option<&TouchSnapshot> {
        self.tracker.snapshot()
    }

    pub fn is_ready(&self) -> bool {
        self.image.is_some() && self.params.is_some()
    }

    pub fn is_touching(&self) -> bool {
        self.tracker.is_touching()
    }

    /// Installs a new image and recenters at cover fit.
    pub fn set_image(&mut self, image: ImageSize) -> bool {
        let params = DrawParams::centered(self.viewport, image);
        clog(&format!(
            "image {}x{} min_scale={:.4}",
            image.width, image.height, params.min_scale
        ));
        self.image = Some(image);
        self.params = Some(params);
        true
    }

    pub fn reset(&mut self) -> bool {
        match (self.image, self.params.as_mut()) {
            (Some(image), Some(params)) => {
                params.reset_centered(self.viewport, image);
                true
            }
            _ => false,
        }
    }

    /// Drops image and transform. Returns whether anything was loaded.
    pub fn clear(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.image = None;
        self.params = None;
        true
    }

    /// Recomputes the cover scale and reclamps without recentering.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        match (self.image, self.params.as_mut()) {
            (Some(image), Some(params)) => {
                params.recompute_min_scale(viewport, image);
                params.clamp(viewport, image);
                clog(&format!(
                    "resize {}x{} min_scale={:.4}",
                    viewport.width, viewport.height, params.min_scale
                ));
                true
            }
            _ => false,
        }
    }

    /// Top-left of the surface in the coordinate space touch points arrive in.
    pub fn set_surface_origin(&mut self, origin: Point) {
        self.tracker.set_offset(origin.negated());
    }

    /// Gesture start. Ignored until an image is ready; returns whether it was accepted.
    pub fn touch_start(&mut self, points: &[Point]) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.tracker.start(points);
        true
    }

    pub fn touch_move(&mut self, points: &[Point]) -> bool {
        let Some(gesture) = self.tracker.move_to(points) else {
            return false;
        };
        let (Some(image), Some(params)) = (self.image, self.params.as_mut()) else {
            return false;
        };
        match gesture {
            Gesture::Pan(delta) => params.pan_by(delta, self.viewport, image),
            Gesture::Zoom {
                factor,
                center,
                drift,
            } => params.zoom_about(factor, center, drift, self.viewport, image),
        }
        true
    }

    /// Fingers lifted. Without a loaded image any gesture in progress is dropped.
    pub fn touch_end(&mut self, remaining: &[Point]) {
        if !self.is_ready() {
            self.tracker.end(&[]);
            return;
        }
        self.tracker.end(remaining);
    }

    pub fn frame(&self) -> Option<Frame> {
        match (self.image, self.params.as_ref()) {
            (Some(image), Some(params)) => Some(Frame::new(params, image, self.viewport)),
            _ => None,
        }
    }
}
