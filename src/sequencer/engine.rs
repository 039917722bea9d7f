//! Mounting a choreography on a surface.
//!
//! Scroll and resize handlers only mark state dirty. A single animation-frame
//! loop reads the scroll position once per frame and derives every
//! scroll-driven effect (class toggles, gated entrances, stacked panels) from
//! that one read, then advances the time-driven entrances and loops.
//!
//! [`SequencerGuard`] owns everything that was created. Disposing it (or
//! dropping it) cancels the frame loop, detaches the listeners, restores every
//! inline style and class that was written, and invalidates callbacks that
//! may already be queued.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::ambient::LoopSpec;
use super::choreography::{Choreography, EntranceMode};
use super::entrance::{Entrance, OneShotGate};
use super::error::Result;
use super::host::{ListenerId, RenderSurface, Scheduler, TimerId};
use super::observer::ScrollObserver;
use super::pinned::{self, StackSpec};

#[derive(Default)]
struct Dirty {
    scroll: Cell<bool>,
    viewport: Cell<bool>,
}

struct EntranceState<E> {
    name: &'static str,
    elements: Vec<E>,
    entrance: Entrance,
    gate: Option<(E, OneShotGate)>,
    /// Starting state written while waiting for the gate.
    primed: bool,
    done: bool,
}

struct StackState<E> {
    spec: StackSpec,
    elements: Vec<E>,
    pinned: Vec<bool>,
    /// Scale last written to each panel, undone when measuring.
    scales: Vec<f64>,
}

struct ToggleState<E> {
    trigger: E,
    observer: ScrollObserver,
    targets: Vec<E>,
    class: &'static str,
}

struct Engine<S: RenderSurface> {
    surface: Rc<S>,
    started_at: f64,
    viewport_height: f64,
    last_scroll_y: Option<f64>,
    entrances: Vec<EntranceState<S::Element>>,
    toggles: Vec<ToggleState<S::Element>>,
    stacks: Vec<StackState<S::Element>>,
    loops: Vec<(Vec<S::Element>, LoopSpec)>,
    touched: Vec<S::Element>,
}

impl<S: RenderSurface + 'static> Engine<S> {
    fn build(surface: Rc<S>, choreography: Choreography, now: f64) -> Self {
        let mut touched = Vec::new();

        let mut entrances = Vec::new();
        for binding in choreography.entrances {
            let elements = surface.select(&binding.targets);
            if elements.is_empty() {
                log::debug!("entrance {}: no elements for {}", binding.name, binding.targets);
                continue;
            }
            let mut entrance = Entrance::new(binding.spec);
            let gate = match binding.mode {
                EntranceMode::Immediate => {
                    entrance.play(now);
                    None
                }
                EntranceMode::Gated { trigger, start } => {
                    match surface.select(&trigger).into_iter().next() {
                        Some(trigger) => Some((trigger, OneShotGate::new(start))),
                        None => {
                            log::debug!("entrance {}: no trigger element {}", binding.name, trigger);
                            continue;
                        }
                    }
                }
            };
            touched.extend(elements.iter().cloned());
            entrances.push(EntranceState {
                name: binding.name,
                elements,
                entrance,
                gate,
                primed: false,
                done: false,
            });
        }

        let mut toggles = Vec::new();
        for toggle in choreography.toggles {
            let Some(trigger) = surface.select(&toggle.trigger).into_iter().next() else {
                log::debug!("toggle {}: no trigger element {}", toggle.class, toggle.trigger);
                continue;
            };
            let targets = surface.select(&toggle.target);
            let observer = ScrollObserver::watch(
                toggle.start,
                {
                    let surface = surface.clone();
                    let targets = targets.clone();
                    let class = toggle.class;
                    move || {
                        for t in &targets {
                            surface.set_class(t, class, true);
                        }
                    }
                },
                {
                    let surface = surface.clone();
                    let targets = targets.clone();
                    let class = toggle.class;
                    move || {
                        for t in &targets {
                            surface.set_class(t, class, false);
                        }
                    }
                },
            );
            toggles.push(ToggleState {
                trigger,
                observer,
                targets,
                class: toggle.class,
            });
        }

        let mut stacks = Vec::new();
        for spec in choreography.stacks {
            let elements = surface.select(&spec.target);
            if elements.is_empty() {
                log::debug!("stack: no elements for {}", spec.target);
                continue;
            }
            // The terminal panel is never written to.
            touched.extend(elements.iter().take(elements.len() - 1).cloned());
            stacks.push(StackState {
                pinned: vec![false; elements.len()],
                scales: vec![1.0; elements.len()],
                spec,
                elements,
            });
        }

        let mut loops = Vec::new();
        for spec in choreography.loops {
            let elements = surface.select(&spec.target);
            if elements.is_empty() {
                log::debug!("loop {}: no elements for {}", spec.name, spec.target);
                continue;
            }
            touched.extend(elements.iter().cloned());
            loops.push((elements, spec));
        }

        let viewport_height = surface.viewport_height();
        Self {
            surface,
            started_at: now,
            viewport_height,
            last_scroll_y: None,
            entrances,
            toggles,
            stacks,
            loops,
            touched,
        }
    }

    fn frame(&mut self, now: f64, dirty: &Dirty) {
        if dirty.viewport.replace(false) {
            self.viewport_height = self.surface.viewport_height();
            dirty.scroll.set(true);
        }
        // The one scroll read for this frame; everything measured below is
        // consistent with it.
        let scroll_y = self.surface.scroll_y();
        if self.last_scroll_y != Some(scroll_y) {
            self.last_scroll_y = Some(scroll_y);
            dirty.scroll.set(true);
        }
        if dirty.scroll.replace(false) {
            self.apply_scroll(now);
        }
        self.apply_entrances(now);
        self.apply_loops(now);
    }

    fn apply_scroll(&mut self, now: f64) {
        let surface = &self.surface;
        let vh = self.viewport_height;

        for toggle in &mut self.toggles {
            toggle.observer.observe(surface.measure(&toggle.trigger), vh);
        }

        for state in &mut self.entrances {
            if let Some((trigger, gate)) = &mut state.gate {
                if gate.check(surface.measure(trigger), vh) {
                    log::debug!("entrance {} triggered", state.name);
                    state.entrance.play(now);
                }
            }
        }

        for stack in &mut self.stacks {
            // Pinning and progress follow layout, not the scale written here.
            let rects: Vec<_> = stack
                .elements
                .iter()
                .zip(&stack.scales)
                .map(|(e, scale)| surface.measure(e).without_scale(*scale))
                .collect();
            let frames = pinned::evaluate(&stack.spec, &rects, vh);
            for (((element, frame), was_pinned), scale) in stack
                .elements
                .iter()
                .zip(frames)
                .zip(stack.pinned.iter_mut())
                .zip(stack.scales.iter_mut())
            {
                if let Some(style) = frame.style {
                    surface.set_style(element, &style);
                    *scale = style.scale.unwrap_or(1.0);
                }
                if frame.pinned != *was_pinned {
                    surface.set_class(element, "pinned", frame.pinned);
                    *was_pinned = frame.pinned;
                }
            }
        }
    }

    fn apply_entrances(&mut self, now: f64) {
        for state in &mut self.entrances {
            if state.done {
                continue;
            }
            if state.entrance.started_at().is_none() {
                if !state.primed {
                    for (i, element) in state.elements.iter().enumerate() {
                        self.surface.set_style(element, &state.entrance.sample(i, now));
                    }
                    state.primed = true;
                }
                continue;
            }
            for (i, element) in state.elements.iter().enumerate() {
                self.surface.set_style(element, &state.entrance.sample(i, now));
            }
            if state.entrance.is_finished(state.elements.len(), now) {
                state.done = true;
            }
        }
    }

    fn apply_loops(&mut self, now: f64) {
        let elapsed = now - self.started_at;
        for (elements, spec) in &self.loops {
            let style = spec.sample(elapsed);
            for element in elements {
                self.surface.set_style(element, &style);
            }
        }
    }

    fn revert(&mut self) {
        for element in &self.touched {
            self.surface.clear_style(element);
        }
        for toggle in &self.toggles {
            for target in &toggle.targets {
                self.surface.set_class(target, toggle.class, false);
            }
        }
        for stack in &self.stacks {
            for element in &stack.elements {
                self.surface.set_class(element, "pinned", false);
            }
        }
    }
}

/// Shared between the guard and the queued frame callback.
struct FrameLoop<S: RenderSurface> {
    engine: Rc<RefCell<Engine<S>>>,
    scheduler: Rc<dyn Scheduler>,
    alive: Rc<Cell<bool>>,
    dirty: Rc<Dirty>,
    pending: Rc<Cell<Option<TimerId>>>,
}

impl<S: RenderSurface> Clone for FrameLoop<S> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            scheduler: self.scheduler.clone(),
            alive: self.alive.clone(),
            dirty: self.dirty.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<S: RenderSurface + 'static> FrameLoop<S> {
    fn run(&self) {
        if !self.alive.get() {
            return;
        }
        let now = self.scheduler.now_ms();
        self.engine.borrow_mut().frame(now, &self.dirty);
    }

    fn request(&self) {
        let this = self.clone();
        let id = self.scheduler.request_frame(Box::new(move || {
            this.pending.set(None);
            if !this.alive.get() {
                return;
            }
            this.run();
            this.request();
        }));
        self.pending.set(Some(id));
    }
}

/// A mounted choreography. Dropping the guard disposes it.
pub struct SequencerGuard<S: RenderSurface + 'static> {
    surface: Rc<S>,
    frames: FrameLoop<S>,
    listeners: Vec<ListenerId>,
}

impl<S: RenderSurface + 'static> SequencerGuard<S> {
    pub fn is_disposed(&self) -> bool {
        !self.frames.alive.get()
    }

    /// Tear down synchronously. Idempotent.
    pub fn dispose(&mut self) {
        if !self.frames.alive.replace(false) {
            return;
        }
        if let Some(id) = self.frames.pending.take() {
            self.frames.scheduler.cancel(id);
        }
        for listener in self.listeners.drain(..) {
            self.surface.detach(listener);
        }
        self.frames.engine.borrow_mut().revert();
        log::debug!("sequencer disposed");
    }
}

impl<S: RenderSurface + 'static> Drop for SequencerGuard<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Validate `choreography`, resolve its targets on `surface`, render the
/// first frame and start the frame loop.
pub fn mount<S: RenderSurface + 'static>(
    surface: Rc<S>,
    scheduler: Rc<dyn Scheduler>,
    choreography: Choreography,
) -> Result<SequencerGuard<S>> {
    choreography.validate()?;

    let now = scheduler.now_ms();
    let engine = Engine::build(surface.clone(), choreography, now);
    log::info!(
        "sequencer mounted: {} entrances, {} toggles, {} stacks, {} loops",
        engine.entrances.len(),
        engine.toggles.len(),
        engine.stacks.len(),
        engine.loops.len()
    );

    let dirty = Rc::new(Dirty::default());
    dirty.scroll.set(true);
    let frames = FrameLoop {
        engine: Rc::new(RefCell::new(engine)),
        scheduler,
        alive: Rc::new(Cell::new(true)),
        dirty,
        pending: Rc::new(Cell::new(None)),
    };

    let listeners = vec![
        surface.on_scroll({
            let dirty = frames.dirty.clone();
            let alive = frames.alive.clone();
            Box::new(move || {
                if alive.get() {
                    dirty.scroll.set(true);
                }
            })
        }),
        surface.on_resize({
            let dirty = frames.dirty.clone();
            let alive = frames.alive.clone();
            Box::new(move || {
                if alive.get() {
                    dirty.viewport.set(true);
                }
            })
        }),
    ];

    frames.run();
    frames.request();

    Ok(SequencerGuard {
        surface,
        frames,
        listeners,
    })
}
