//! The two collaborators the sequencer is constructed with: a rendering
//! surface (geometry, scroll/resize events, style mutation) and a scheduler
//! (clock, intervals, animation frames).

use std::fmt;

use super::style::StyleProps;

/// Viewport-relative geometry of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Layout box of an element measured while `scale` about its centre is
    /// applied. Bounding rects include transforms; layout does not.
    pub fn without_scale(self, scale: f64) -> Rect {
        if scale <= 0.0 || scale == 1.0 {
            return self;
        }
        let height = self.height / scale;
        Rect::new(self.top - (height - self.height) / 2.0, height)
    }
}

/// What an animation or trigger points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The document root element.
    Document,
    /// Every element under the surface's root matching a CSS selector.
    Selector(String),
}

impl Target {
    pub fn selector(selector: impl Into<String>) -> Self {
        Target::Selector(selector.into())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Document => f.write_str(":root"),
            Target::Selector(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u32);

pub trait RenderSurface {
    type Element: Clone + 'static;

    /// All elements for a target. An empty result is a missing target, not an
    /// error.
    fn select(&self, target: &Target) -> Vec<Self::Element>;
    fn measure(&self, element: &Self::Element) -> Rect;
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;

    fn set_style(&self, element: &Self::Element, style: &StyleProps);
    /// Remove every inline property `set_style` may have written.
    fn clear_style(&self, element: &Self::Element);
    fn set_class(&self, element: &Self::Element, class: &str, enabled: bool);

    fn on_scroll(&self, callback: Box<dyn FnMut()>) -> ListenerId;
    fn on_resize(&self, callback: Box<dyn FnMut()>) -> ListenerId;
    fn detach(&self, listener: ListenerId);
}

pub trait Scheduler {
    /// Monotonic milliseconds.
    fn now_ms(&self) -> f64;
    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerId;
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> TimerId;
    /// Cancel an interval or a pending frame. Unknown ids are ignored.
    fn cancel(&self, timer: TimerId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_scale_restores_layout_box() {
        // 880px tall at top 56, scaled to 0.95 about its centre.
        let scaled = Rect::new(56.0 + 0.05 * 880.0 / 2.0, 0.95 * 880.0);
        let layout = scaled.without_scale(0.95);
        assert!((layout.top - 56.0).abs() < 1e-9);
        assert!((layout.height - 880.0).abs() < 1e-9);

        let rect = Rect::new(10.0, 20.0);
        assert_eq!(rect.without_scale(1.0), rect);
    }
}
