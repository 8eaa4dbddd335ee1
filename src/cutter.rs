//! Picture cutter widget: a canvas inside a container element that the user
//! pans and pinch-zooms, and whose visible region can be exported.
//!
//! `PictureCutter` wires the browser pieces together: it creates the
//! [`CanvasSurface`], subscribes to touch input through a
//! [`PointerSubscription`], feeds the points to the [`CropEngine`] and
//! repaints after every change. Every operation other than construction
//! silently does nothing when the widget is not ready.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, EventTarget, HtmlElement, HtmlImageElement, TouchEvent};

use crate::canvas::CanvasSurface;
use crate::engine::CropEngine;
use crate::error::{CutterError, Result, describe_js};
use crate::pointer::{PointerScopes, PointerSubscription, TouchPhase, touch_points};
use crate::render::{DrawSurface, render};
use crate::state::{DrawParams, ImageSize, Viewport};
use crate::util::{clog, cwarn};

/// Where the widget lives: an element, or a CSS selector resolved on install.
#[derive(Clone, Debug)]
pub enum Container {
    Element(HtmlElement),
    Selector(String),
}

impl From<HtmlElement> for Container {
    fn from(el: HtmlElement) -> Self {
        Container::Element(el)
    }
}

impl From<&str> for Container {
    fn from(selector: &str) -> Self {
        Container::Selector(selector.to_string())
    }
}

impl From<String> for Container {
    fn from(selector: String) -> Self {
        Container::Selector(selector)
    }
}

pub type ErrorCallback = Rc<dyn Fn(CutterError)>;
pub type LoadedCallback = Rc<dyn Fn(ImageSize)>;

struct Inner {
    container: Option<HtmlElement>,
    surface: Option<CanvasSurface>,
    image: Option<HtmlImageElement>,
    engine: CropEngine,
    export_type: String,
    // bumped whenever the image changes so late decodes can tell they are stale
    load_token: u64,
    on_error: Option<ErrorCallback>,
    on_loaded: Option<LoadedCallback>,
}

impl Inner {
    fn is_ready(&self) -> bool {
        self.container.is_some()
            && self.surface.is_some()
            && self.image.is_some()
            && self.engine.is_ready()
    }

    fn redraw(&mut self) {
        if let (Some(surface), Some(image), Some(frame)) =
            (self.surface.as_mut(), self.image.as_ref(), self.engine.frame())
        {
            render(surface, image, &frame);
        }
    }

    /// Returns the installed size, or `None` when the image has no dimensions.
    fn apply_image(&mut self, image: HtmlImageElement) -> Option<ImageSize> {
        let Some(size) = ImageSize::new(image.natural_width() as f64, image.natural_height() as f64)
        else {
            cwarn("ignoring image with empty dimensions");
            return None;
        };
        self.load_token += 1;
        self.image = Some(image);
        self.engine.set_image(size);
        self.redraw();
        Some(size)
    }

    fn loaded(&self, size: ImageSize) -> Option<(LoadedCallback, ImageSize)> {
        self.on_loaded.clone().map(|cb| (cb, size))
    }

    fn report(&self, err: CutterError) -> Option<(ErrorCallback, CutterError)> {
        cwarn(&err.to_string());
        self.on_error.clone().map(|cb| (cb, err))
    }

    fn on_touch(weak: &Weak<RefCell<Inner>>, phase: TouchPhase, e: &TouchEvent) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let Ok(mut inner) = inner.try_borrow_mut() else {
            return;
        };
        let Some(points) = inner
            .surface
            .as_ref()
            .and_then(|surface| touch_points(e, surface.element()))
        else {
            return;
        };
        match phase {
            TouchPhase::Start => {
                if !inner.is_ready() {
                    return;
                }
                // keep the page from scrolling under the gesture
                e.prevent_default();
                if let Some(origin) = inner.surface.as_ref().map(CanvasSurface::origin) {
                    inner.engine.set_surface_origin(origin);
                }
                inner.engine.touch_start(&points);
            }
            TouchPhase::Move => {
                if inner.engine.touch_move(&points) && inner.is_ready() {
                    inner.redraw();
                }
            }
            TouchPhase::End => inner.engine.touch_end(&points),
        }
    }
}

pub struct PictureCutter {
    inner: Rc<RefCell<Inner>>,
    pointer: Option<PointerSubscription>,
}

impl PictureCutter {
    /// Fails with [`CutterError::Configuration`] when no container is given
    /// or the selector matches nothing.
    pub fn new(container: Option<Container>) -> Result<Self> {
        let container = container
            .ok_or_else(|| CutterError::Configuration("no element".to_string()))?;
        let container = resolve(&document()?, container)?;
        let mut cutter = Self {
            inner: Rc::new(RefCell::new(Inner {
                container: Some(container),
                surface: None,
                image: None,
                engine: CropEngine::new(Viewport::default()),
                export_type: "image/png".to_string(),
                load_token: 0,
                on_error: None,
                on_loaded: None,
            })),
            pointer: None,
        };
        cutter.install()?;
        Ok(cutter)
    }

    pub fn is_ready(&self) -> bool {
        self.inner.borrow().is_ready()
    }

    pub fn is_touching(&self) -> bool {
        self.inner.borrow().engine.is_touching()
    }

    pub fn transform(&self) -> Option<DrawParams> {
        self.inner.borrow().engine.params().copied()
    }

    pub fn set_export_type(&self, mime: impl Into<String>) {
        self.inner.borrow_mut().export_type = mime.into();
    }

    /// Called when an image source passed to [`set_image_data`](Self::set_image_data) fails to load.
    pub fn set_on_error(&self, cb: impl Fn(CutterError) + 'static) {
        self.inner.borrow_mut().on_error = Some(Rc::new(cb));
    }

    /// Called once an image is installed and drawn, from either
    /// [`set_image`](Self::set_image) or a finished [`set_image_data`](Self::set_image_data).
    pub fn set_on_loaded(&self, cb: impl Fn(ImageSize) + 'static) {
        self.inner.borrow_mut().on_loaded = Some(Rc::new(cb));
    }

    fn install(&mut self) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        let Some(container) = inner.container.clone() else {
            return Ok(());
        };
        if inner.surface.is_some() {
            return Ok(());
        }
        let document = document()?;
        let surface = CanvasSurface::create(&document, &container)?;
        let scopes = PointerScopes {
            start: surface.element().clone().unchecked_into::<EventTarget>(),
            track: document.unchecked_into::<EventTarget>(),
        };
        let viewport = surface.viewport();
        inner.surface = Some(surface);
        inner.engine.resize(viewport);
        if inner.is_ready() {
            inner.engine.reset();
            inner.redraw();
        }
        drop(inner);

        let weak = Rc::downgrade(&self.inner);
        let handler = Rc::new(move |phase: TouchPhase, e: &TouchEvent| {
            Inner::on_touch(&weak, phase, e);
        });
        self.pointer = Some(PointerSubscription::attach(scopes, handler)?);
        clog(&format!("installed {}x{}", viewport.width, viewport.height));
        Ok(())
    }

    /// Installs a decoded image, centered at cover fit.
    pub fn set_image(&self, image: HtmlImageElement) {
        let loaded = {
            let mut inner = self.inner.borrow_mut();
            inner.apply_image(image).and_then(|size| inner.loaded(size))
        };
        if let Some((cb, size)) = loaded {
            cb(size);
        }
    }

    /// Loads an image from a URL or data URL in the background, then behaves
    /// like [`set_image`](Self::set_image). A newer image or a clear made in
    /// the meantime wins over this load.
    pub fn set_image_data(&self, source: &str) {
        let token = {
            let mut inner = self.inner.borrow_mut();
            inner.load_token += 1;
            inner.load_token
        };
        let image = match HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                cwarn(&format!("could not create image: {}", describe_js(&e)));
                return;
            }
        };
        image.set_src(source);
        let weak = Rc::downgrade(&self.inner);
        let source = source.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            let pending: js_sys::Promise = image.decode();
            let decoded = JsFuture::from(pending).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut inner = inner.borrow_mut();
            if inner.load_token != token {
                clog(&format!("dropping stale load of {source}"));
                return;
            }
            let outcome = match decoded {
                Ok(_) => inner
                    .apply_image(image)
                    .ok_or_else(|| CutterError::Decode(format!("{source}: empty image"))),
                Err(e) => Err(CutterError::Decode(format!("{source}: {}", describe_js(&e)))),
            };
            // callbacks run after the borrow ends so they may call back into the cutter
            match outcome {
                Ok(size) => {
                    let pending = inner.loaded(size);
                    drop(inner);
                    if let Some((cb, size)) = pending {
                        cb(size);
                    }
                }
                Err(err) => {
                    let pending = inner.report(err);
                    drop(inner);
                    if let Some((cb, err)) = pending {
                        cb(err);
                    }
                }
            }
        });
    }

    /// Encodes the current view with the configured export type.
    pub fn get_image_data(&self) -> Option<String> {
        let inner = self.inner.borrow();
        if !inner.is_ready() {
            return None;
        }
        let surface = inner.surface.as_ref()?;
        match surface.to_data_url(&inner.export_type) {
            Ok(data) => Some(data),
            Err(err) => {
                cwarn(&err.to_string());
                None
            }
        }
    }

    pub fn get_image(&self) -> Option<HtmlImageElement> {
        let data = self.get_image_data()?;
        let image = HtmlImageElement::new().ok()?;
        image.set_src(&data);
        Some(image)
    }

    pub fn reset(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.is_ready() && inner.engine.reset() {
            inner.redraw();
        }
    }

    /// Drops the image and blanks the surface. Any [`set_image_data`](Self::set_image_data)
    /// still decoding is cancelled even when nothing is loaded yet; the rest is
    /// a no-op until the widget is ready.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.load_token += 1;
        if !inner.is_ready() {
            return;
        }
        inner.engine.clear();
        inner.image = None;
        let viewport = inner.engine.viewport();
        if let Some(surface) = inner.surface.as_mut() {
            surface.clear(viewport);
        }
        clog("cleared");
    }

    /// Re-reads the container size; keeps the current pan and zoom where valid.
    pub fn resize(&self) {
        let mut inner = self.inner.borrow_mut();
        let (Some(container), Some(surface)) = (inner.container.as_ref(), inner.surface.as_ref())
        else {
            return;
        };
        let viewport = surface.fit_to(container);
        if inner.engine.resize(viewport) && inner.is_ready() {
            inner.redraw();
        }
    }

    /// Optionally moves to a new container (tearing the old surface down first),
    /// then recreates the surface and listeners.
    pub fn reinstall(&mut self, container: Option<Container>) -> Result<()> {
        if let Some(container) = container {
            let container = resolve(&document()?, container)?;
            self.destroy();
            self.inner.borrow_mut().container = Some(container);
        }
        self.install()
    }

    /// Clears, detaches listeners and removes the canvas. Safe to call twice.
    pub fn destroy(&mut self) {
        self.clear();
        if let Some(mut pointer) = self.pointer.take() {
            pointer.detach();
        }
        if let Some(surface) = self.inner.borrow_mut().surface.take() {
            surface.remove();
            clog("destroyed");
        }
    }
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CutterError::Surface("no document".to_string()))
}

fn resolve(document: &Document, container: Container) -> Result<HtmlElement> {
    match container {
        Container::Element(el) => Ok(el),
        Container::Selector(selector) => document
            .query_selector(&selector)
            .map_err(|e| CutterError::Configuration(describe_js(&e)))?
            .ok_or_else(|| CutterError::Configuration(format!("no element matches `{selector}`")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| CutterError::Configuration(format!("`{selector}` is not an HTML element"))),
    }
}
