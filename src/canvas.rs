// Browser drawing surface backed by a <canvas> element.
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlImageElement};

use crate::error::{CutterError, Result, describe_js};
use crate::geometry::Point;
use crate::render::{DrawSurface, Frame};
use crate::state::Viewport;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Creates a canvas sized to `container` and appends it.
    pub fn create(document: &Document, container: &HtmlElement) -> Result<Self> {
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| CutterError::Surface(describe_js(&e)))?
            .dyn_into()
            .map_err(|_| CutterError::Surface("created element is not a canvas".to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| CutterError::Surface(describe_js(&e)))?
            .ok_or_else(|| CutterError::Surface("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CutterError::Surface("unexpected context type".to_string()))?;
        let surface = Self { canvas, ctx };
        surface.fit_to(container);
        container
            .append_child(&surface.canvas)
            .map_err(|e| CutterError::Surface(describe_js(&e)))?;
        Ok(surface)
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Matches the backing store to the container's client size.
    pub fn fit_to(&self, container: &HtmlElement) -> Viewport {
        let width = container.client_width().max(0) as u32;
        let height = container.client_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.viewport()
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    /// Top-left corner in client coordinates.
    pub fn origin(&self) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }

    pub fn to_data_url(&self, mime: &str) -> Result<String> {
        self.canvas
            .to_data_url_with_type(mime)
            .map_err(|e| CutterError::Export(describe_js(&e)))
    }

    pub fn remove(&self) {
        self.canvas.remove();
    }
}

impl DrawSurface for CanvasSurface {
    type Image = HtmlImageElement;

    fn clear(&mut self, viewport: Viewport) {
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn draw(&mut self, image: &HtmlImageElement, frame: &Frame) -> Result<()> {
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                frame.x,
                frame.y,
                frame.width,
                frame.height,
            )
            .map_err(|e| CutterError::Surface(describe_js(&e)))
    }
}
