//! In-memory host for driving the sequencer without a browser: a manual
//! clock with fast-forward and a fake surface with document geometry.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::host::{ListenerId, Rect, RenderSurface, Scheduler, Target, TimerId};
use super::style::StyleProps;

struct IntervalEntry {
    period: f64,
    next_due: f64,
    callback: Rc<RefCell<Box<dyn FnMut()>>>,
}

#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<f64>,
    next_id: Cell<u32>,
    intervals: RefCell<BTreeMap<TimerId, IntervalEntry>>,
    frames: RefCell<Vec<(TimerId, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn next_id(&self) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        TimerId(id)
    }

    /// Move the clock forward, firing every interval that comes due in order.
    /// Frames are not run.
    pub fn advance(&self, ms: f64) {
        let target = self.now.get() + ms;
        loop {
            let due = {
                let mut intervals = self.intervals.borrow_mut();
                let next = intervals
                    .iter()
                    .filter(|(_, e)| e.next_due <= target)
                    .min_by(|a, b| a.1.next_due.total_cmp(&b.1.next_due))
                    .map(|(id, _)| *id);
                next.and_then(|id| intervals.get_mut(&id)).map(|entry| {
                    let at = entry.next_due;
                    entry.next_due += entry.period;
                    (at, entry.callback.clone())
                })
            };
            let Some((at, callback)) = due else { break };
            self.now.set(at);
            (&mut *callback.borrow_mut())();
        }
        self.now.set(target);
    }

    /// Run every frame requested so far. Frames requested while running wait
    /// for the next call.
    pub fn run_frame(&self) {
        let frames = std::mem::take(&mut *self.frames.borrow_mut());
        for (_, callback) in frames {
            callback();
        }
    }

    /// Advance in frame-sized steps, running a frame after each step.
    pub fn run_for(&self, ms: f64, frame_ms: f64) {
        let mut left = ms;
        while left > 0.0 {
            let step = left.min(frame_ms);
            self.advance(step);
            self.run_frame();
            left -= step;
        }
    }

    /// Live intervals plus pending frames.
    pub fn pending(&self) -> usize {
        self.intervals.borrow().len() + self.frames.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }

    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerId {
        let id = self.next_id();
        let period = f64::from(period_ms);
        self.intervals.borrow_mut().insert(
            id,
            IntervalEntry {
                period,
                next_due: self.now.get() + period,
                callback: Rc::new(RefCell::new(callback)),
            },
        );
        id
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id();
        self.frames.borrow_mut().push((id, callback));
        id
    }

    fn cancel(&self, timer: TimerId) {
        self.intervals.borrow_mut().remove(&timer);
        self.frames.borrow_mut().retain(|(id, _)| *id != timer);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Scroll,
    Resize,
}

struct FakeElement {
    selector: String,
    doc_top: f64,
    height: f64,
    sticky_top: Option<f64>,
    style: Option<StyleProps>,
    classes: BTreeSet<String>,
}

pub type FakeId = usize;

/// Elements laid out in document coordinates. Element 0 is the document
/// root.
pub struct FakeSurface {
    elements: RefCell<Vec<FakeElement>>,
    scroll_y: Cell<f64>,
    viewport_height: Cell<f64>,
    listeners: RefCell<BTreeMap<ListenerId, (Event, Rc<RefCell<Box<dyn FnMut()>>>)>>,
    next_listener: Cell<u32>,
    style_writes: Cell<usize>,
}

impl FakeSurface {
    pub fn new(viewport_height: f64) -> Rc<Self> {
        Rc::new(Self {
            elements: RefCell::new(vec![FakeElement {
                selector: ":root".into(),
                doc_top: 0.0,
                height: 10_000.0,
                sticky_top: None,
                style: None,
                classes: BTreeSet::new(),
            }]),
            scroll_y: Cell::new(0.0),
            viewport_height: Cell::new(viewport_height),
            listeners: RefCell::new(BTreeMap::new()),
            next_listener: Cell::new(0),
            style_writes: Cell::new(0),
        })
    }

    pub fn add(&self, selector: &str, doc_top: f64, height: f64) -> FakeId {
        self.push(selector, doc_top, height, None)
    }

    /// An element with `position: sticky; top: pin`.
    pub fn add_sticky(&self, selector: &str, doc_top: f64, height: f64, pin: f64) -> FakeId {
        self.push(selector, doc_top, height, Some(pin))
    }

    fn push(&self, selector: &str, doc_top: f64, height: f64, sticky_top: Option<f64>) -> FakeId {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            selector: selector.into(),
            doc_top,
            height,
            sticky_top,
            style: None,
            classes: BTreeSet::new(),
        });
        elements.len() - 1
    }

    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
        self.dispatch(Event::Scroll);
    }

    pub fn resize(&self, viewport_height: f64) {
        self.viewport_height.set(viewport_height);
        self.dispatch(Event::Resize);
    }

    fn dispatch(&self, event: Event) {
        let callbacks: Vec<_> = self
            .listeners
            .borrow()
            .values()
            .filter(|(e, _)| *e == event)
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            (&mut *callback.borrow_mut())();
        }
    }

    pub fn style(&self, id: FakeId) -> Option<StyleProps> {
        self.elements.borrow()[id].style
    }

    pub fn has_class(&self, id: FakeId, class: &str) -> bool {
        self.elements.borrow()[id].classes.contains(class)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn style_writes(&self) -> usize {
        self.style_writes.get()
    }
}

impl RenderSurface for FakeSurface {
    type Element = FakeId;

    fn select(&self, target: &Target) -> Vec<FakeId> {
        match target {
            Target::Document => vec![0],
            Target::Selector(selector) => self
                .elements
                .borrow()
                .iter()
                .enumerate()
                .skip(1)
                .filter(|(_, e)| e.selector == *selector)
                .map(|(id, _)| id)
                .collect(),
        }
    }

    fn measure(&self, element: &FakeId) -> Rect {
        let elements = self.elements.borrow();
        let e = &elements[*element];
        let natural = e.doc_top - self.scroll_y.get();
        let top = match e.sticky_top {
            Some(pin) => natural.max(pin),
            None => natural,
        };
        // Like getBoundingClientRect: a written scale shrinks the box about
        // its centre.
        match e.style.and_then(|s| s.scale) {
            Some(scale) => Rect::new(top + (1.0 - scale) * e.height / 2.0, scale * e.height),
            None => Rect::new(top, e.height),
        }
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn set_style(&self, element: &FakeId, style: &StyleProps) {
        self.style_writes.set(self.style_writes.get() + 1);
        let mut elements = self.elements.borrow_mut();
        let current = elements[*element].style.get_or_insert_with(StyleProps::default);
        macro_rules! merge {
            ($($field:ident),*) => {
                $(if style.$field.is_some() { current.$field = style.$field; })*
            };
        }
        merge!(x, x_percent, y, y_percent, rotate, scale, opacity, blur, stroke_dashoffset, transform_origin);
    }

    fn clear_style(&self, element: &FakeId) {
        self.elements.borrow_mut()[*element].style = None;
    }

    fn set_class(&self, element: &FakeId, class: &str, enabled: bool) {
        let mut elements = self.elements.borrow_mut();
        let classes = &mut elements[*element].classes;
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn on_scroll(&self, callback: Box<dyn FnMut()>) -> ListenerId {
        self.listen(Event::Scroll, callback)
    }

    fn on_resize(&self, callback: Box<dyn FnMut()>) -> ListenerId {
        self.listen(Event::Resize, callback)
    }

    fn detach(&self, listener: ListenerId) {
        self.listeners.borrow_mut().remove(&listener);
    }
}

impl FakeSurface {
    fn listen(&self, event: Event, callback: Box<dyn FnMut()>) -> ListenerId {
        let id = ListenerId(self.next_listener.get() + 1);
        self.next_listener.set(id.0);
        self.listeners
            .borrow_mut()
            .insert(id, (event, Rc::new(RefCell::new(callback))));
        id
    }
}
