// Touch input source with two registration scopes: gestures start on the
// surface, but move/end are tracked wider so a drag keeps working after the
// finger leaves the canvas.
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, TouchEvent, TouchList};

use crate::error::{CutterError, Result, describe_js};
use crate::geometry::Point;
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

#[derive(Clone)]
pub struct PointerScopes {
    /// Receives `touchstart`.
    pub start: EventTarget,
    /// Receives `touchmove`, `touchend` and `touchcancel`.
    pub track: EventTarget,
}

pub type TouchHandler = Rc<dyn Fn(TouchPhase, &TouchEvent)>;

type TouchClosure = Closure<dyn FnMut(TouchEvent)>;

pub struct PointerSubscription {
    scopes: PointerScopes,
    start_cb: TouchClosure,
    move_cb: TouchClosure,
    end_cb: TouchClosure,
    attached: bool,
}

impl PointerSubscription {
    pub fn attach(scopes: PointerScopes, handler: TouchHandler) -> Result<Self> {
        let wrap = |phase: TouchPhase| {
            let handler = handler.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| handler(phase, &e)) as Box<dyn FnMut(_)>)
        };
        let mut sub = Self {
            scopes,
            start_cb: wrap(TouchPhase::Start),
            move_cb: wrap(TouchPhase::Move),
            end_cb: wrap(TouchPhase::End),
            attached: false,
        };
        let listen = |target: &EventTarget, name: &str, cb: &TouchClosure| {
            target
                .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
                .map_err(|e| CutterError::Surface(describe_js(&e)))
        };
        // flag first so a partial failure is still torn down on drop
        sub.attached = true;
        listen(&sub.scopes.start, "touchstart", &sub.start_cb)?;
        listen(&sub.scopes.track, "touchmove", &sub.move_cb)?;
        listen(&sub.scopes.track, "touchend", &sub.end_cb)?;
        listen(&sub.scopes.track, "touchcancel", &sub.end_cb)?;
        clog("touch listeners attached");
        Ok(sub)
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        let unlisten = |target: &EventTarget, name: &str, cb: &TouchClosure| {
            let _ = target.remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        };
        unlisten(&self.scopes.start, "touchstart", &self.start_cb);
        unlisten(&self.scopes.track, "touchmove", &self.move_cb);
        unlisten(&self.scopes.track, "touchend", &self.end_cb);
        unlisten(&self.scopes.track, "touchcancel", &self.end_cb);
        self.attached = false;
        clog("touch listeners detached");
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

/// One finger from a touch list, tagged with whether it went down on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub point: Point,
    pub on_surface: bool,
}

impl Contact {
    pub fn new(point: Point, on_surface: bool) -> Self {
        Self { point, on_surface }
    }
}

/// Fingers still down on the surface, or `None` when the event only concerns
/// fingers elsewhere on the page and must not reach the tracker.
pub fn surface_points(active: &[Contact], changed: &[Contact]) -> Option<Vec<Point>> {
    if !changed.iter().any(|c| c.on_surface) {
        return None;
    }
    Some(active.iter().filter(|c| c.on_surface).map(|c| c.point).collect())
}

fn contacts(list: &TouchList, surface: &EventTarget) -> Vec<Contact> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| {
            let point = Point::new(t.client_x() as f64, t.client_y() as f64);
            Contact::new(point, t.target().as_ref() == Some(surface))
        })
        .collect()
}

/// Contacts of `event` that belong to `surface`, in client coordinates.
pub fn touch_points(event: &TouchEvent, surface: &EventTarget) -> Option<Vec<Point>> {
    surface_points(
        &contacts(&event.touches(), surface),
        &contacts(&event.changed_touches(), surface),
    )
}
