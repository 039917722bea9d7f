//! Stacked panels. Each panel stays pinned while the next one scrolls over
//! it, and the covered panel shrinks, fades and blurs with the covering
//! panel's scroll progress. The last panel is never covered.

use super::host::{Rect, Target};
use super::style::StyleProps;
use super::trigger::ScrubRange;

#[derive(Debug, Clone, PartialEq)]
pub struct StackSpec {
    pub target: Target,
    /// Boundaries of the *covering* panel's travel.
    pub range: ScrubRange,
    /// Viewport offset the panels stick at.
    pub pin_offset_px: f64,
    /// Fully covered end state. The start state is its resting value.
    pub covered: StyleProps,
}

impl StackSpec {
    pub fn new(target: Target, range: ScrubRange, pin_offset_px: f64) -> Self {
        Self {
            target,
            range,
            pin_offset_px,
            covered: StyleProps {
                scale: Some(0.9),
                opacity: Some(0.5),
                blur: Some(20.0),
                transform_origin: Some("center center"),
                ..Default::default()
            },
        }
    }

    /// Style of a covered panel at `progress`; a pure function of progress.
    pub fn covered_style(&self, progress: f64) -> StyleProps {
        self.covered
            .resting()
            .lerp(&self.covered, progress.clamp(0.0, 1.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    pub pinned: bool,
    /// `None` for the terminal panel, which is never mutated.
    pub style: Option<StyleProps>,
}

/// Evaluate every panel from one set of measurements taken in the same frame.
pub fn evaluate(spec: &StackSpec, rects: &[Rect], viewport_height: f64) -> Vec<PanelFrame> {
    let stuck = |rect: &Rect| rect.top <= spec.pin_offset_px + 0.5;
    rects
        .iter()
        .enumerate()
        .map(|(i, rect)| match rects.get(i + 1) {
            Some(next) => {
                let progress = spec.range.progress(*next, viewport_height);
                PanelFrame {
                    pinned: stuck(rect) && !stuck(next),
                    style: Some(spec.covered_style(progress)),
                }
            }
            None => PanelFrame {
                pinned: stuck(rect),
                style: None,
            },
        })
        .collect()
}
