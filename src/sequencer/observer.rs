//! Boundary crossing detection for scroll-position triggers.

use super::host::Rect;
use super::trigger::TriggerPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    EnterDownward,
    LeaveUpward,
}

/// Remembers which side of a boundary a trigger was on and reports only the
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryWatch {
    position: TriggerPosition,
    past: bool,
}

impl BoundaryWatch {
    pub fn new(position: TriggerPosition) -> Self {
        Self {
            position,
            past: false,
        }
    }

    pub fn is_past(&self) -> bool {
        self.past
    }

    pub fn update(&mut self, rect: Rect, viewport_height: f64) -> Option<Crossing> {
        let past = self.position.is_past(rect, viewport_height);
        if past == self.past {
            return None;
        }
        self.past = past;
        Some(if past {
            Crossing::EnterDownward
        } else {
            Crossing::LeaveUpward
        })
    }
}

/// A watched trigger with enter/leave callbacks.
pub struct ScrollObserver {
    watch: BoundaryWatch,
    on_enter: Box<dyn FnMut()>,
    on_leave: Box<dyn FnMut()>,
}

impl ScrollObserver {
    pub fn watch(
        start: TriggerPosition,
        on_enter: impl FnMut() + 'static,
        on_leave: impl FnMut() + 'static,
    ) -> Self {
        Self {
            watch: BoundaryWatch::new(start),
            on_enter: Box::new(on_enter),
            on_leave: Box::new(on_leave),
        }
    }

    pub fn is_past(&self) -> bool {
        self.watch.is_past()
    }

    pub fn observe(&mut self, rect: Rect, viewport_height: f64) -> Option<Crossing> {
        let crossing = self.watch.update(rect, viewport_height);
        match crossing {
            Some(Crossing::EnterDownward) => (self.on_enter)(),
            Some(Crossing::LeaveUpward) => (self.on_leave)(),
            None => {}
        }
        crossing
    }
}
