//! Browser implementations of the host traits.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, SvgElement, Window};

use super::host::{ListenerId, Rect, RenderSurface, Scheduler, Target, TimerId};
use super::style::StyleProps;

/// Selectors are resolved under `root`, so several pages can mount side by
/// side without seeing each other's elements.
pub struct DomSurface {
    window: Window,
    root: Element,
    listeners: RefCell<HashMap<ListenerId, (&'static str, Closure<dyn FnMut()>)>>,
    next_listener: Cell<u32>,
}

impl DomSurface {
    pub fn scoped(root: Element) -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self {
            window,
            root,
            listeners: RefCell::new(HashMap::new()),
            next_listener: Cell::new(0),
        })
    }

    fn listen(&self, event: &'static str, callback: Box<dyn FnMut()>) -> ListenerId {
        let id = ListenerId(self.next_listener.get() + 1);
        self.next_listener.set(id.0);

        let closure = Closure::wrap(callback);
        if let Err(err) = self
            .window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to attach {} listener: {:?}", event, err);
        }
        self.listeners.borrow_mut().insert(id, (event, closure));
        id
    }
}

fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        Some(html.style())
    } else {
        element.dyn_ref::<SvgElement>().map(|svg| svg.style())
    }
}

impl RenderSurface for DomSurface {
    type Element = Element;

    fn select(&self, target: &Target) -> Vec<Element> {
        match target {
            Target::Document => self
                .window
                .document()
                .and_then(|doc| doc.document_element())
                .into_iter()
                .collect(),
            Target::Selector(selector) => {
                let Ok(nodes) = self.root.query_selector_all(selector) else {
                    log::warn!("invalid selector {}", selector);
                    return Vec::new();
                };
                (0..nodes.length())
                    .filter_map(|i| nodes.get(i))
                    .filter_map(|node| node.dyn_into::<Element>().ok())
                    .collect()
            }
        }
    }

    fn measure(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.top(), rect.height())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn set_style(&self, element: &Element, style: &StyleProps) {
        let Some(decl) = inline_style(element) else {
            return;
        };
        for (name, value) in style.declarations() {
            let _ = decl.set_property(name, &value);
        }
    }

    fn clear_style(&self, element: &Element) {
        let Some(decl) = inline_style(element) else {
            return;
        };
        for name in StyleProps::PROPERTIES {
            let _ = decl.remove_property(name);
        }
    }

    fn set_class(&self, element: &Element, class: &str, enabled: bool) {
        let _ = element.class_list().toggle_with_force(class, enabled);
    }

    fn on_scroll(&self, callback: Box<dyn FnMut()>) -> ListenerId {
        self.listen("scroll", callback)
    }

    fn on_resize(&self, callback: Box<dyn FnMut()>) -> ListenerId {
        self.listen("resize", callback)
    }

    fn detach(&self, listener: ListenerId) {
        if let Some((event, closure)) = self.listeners.borrow_mut().remove(&listener) {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        let ids: Vec<_> = self.listeners.borrow().keys().copied().collect();
        for id in ids {
            self.detach(id);
        }
    }
}

/// `gloo-timers` intervals and `requestAnimationFrame`.
#[derive(Default)]
pub struct DomScheduler {
    next_id: Cell<u32>,
    intervals: RefCell<HashMap<TimerId, Interval>>,
    /// Pending frames own their closure so cancelling one frees it.
    frames: Rc<RefCell<HashMap<TimerId, (i32, Closure<dyn FnMut()>)>>>,
}

impl DomScheduler {
    pub fn shared() -> Rc<dyn Scheduler> {
        Rc::new(Self::default())
    }

    fn next_id(&self) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        TimerId(id)
    }
}

impl Scheduler for DomScheduler {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_default()
    }

    fn set_interval(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> TimerId {
        let id = self.next_id();
        let interval = Interval::new(period_ms, move || callback());
        self.intervals.borrow_mut().insert(id, interval);
        id
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id();
        let frames: Weak<_> = Rc::downgrade(&self.frames);
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            // Freed once this call returns.
            let spent = match frames.upgrade() {
                Some(frames) => {
                    let spent = frames.borrow_mut().remove(&id);
                    spent
                }
                None => None,
            };
            if let Some(callback) = callback.take() {
                callback();
            }
            drop(spent);
        }) as Box<dyn FnMut()>);

        match web_sys::window().map(|w| w.request_animation_frame(closure.as_ref().unchecked_ref())) {
            Some(Ok(handle)) => {
                self.frames.borrow_mut().insert(id, (handle, closure));
            }
            _ => log::warn!("requestAnimationFrame unavailable"),
        }
        id
    }

    fn cancel(&self, timer: TimerId) {
        let frame = self.frames.borrow_mut().remove(&timer);
        if let Some((handle, _closure)) = frame {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
            return;
        }
        // Dropping a gloo Interval clears it.
        self.intervals.borrow_mut().remove(&timer);
    }
}
