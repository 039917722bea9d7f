//! Trigger boundaries: `"<element edge> <viewport position>"` expressions
//! such as `"top 65%"` or `"top -40"`.

use std::str::FromStr;

use super::error::SequencerError;
use super::host::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportPosition {
    /// Percentage of the viewport height, measured from its top.
    Percent(f64),
    /// Pixels from the viewport top.
    Pixels(f64),
}

impl ViewportPosition {
    pub fn resolve(self, viewport_height: f64) -> f64 {
        match self {
            ViewportPosition::Percent(p) => viewport_height * p / 100.0,
            ViewportPosition::Pixels(px) => px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPosition {
    pub edge: Edge,
    pub viewport: ViewportPosition,
}

impl TriggerPosition {
    pub fn new(edge: Edge, viewport: ViewportPosition) -> Self {
        Self { edge, viewport }
    }

    /// Where the element's edge currently sits in the viewport.
    pub fn edge_offset(&self, rect: Rect) -> f64 {
        match self.edge {
            Edge::Top => rect.top,
            Edge::Center => rect.top + rect.height / 2.0,
            Edge::Bottom => rect.bottom(),
        }
    }

    pub fn line(&self, viewport_height: f64) -> f64 {
        self.viewport.resolve(viewport_height)
    }

    /// The edge has reached or scrolled above the viewport line.
    pub fn is_past(&self, rect: Rect, viewport_height: f64) -> bool {
        self.edge_offset(rect) <= self.line(viewport_height)
    }
}

impl FromStr for TriggerPosition {
    type Err = SequencerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SequencerError::InvalidTrigger(s.to_string());
        let mut words = s.split_whitespace();
        let (Some(edge), Some(viewport), None) = (words.next(), words.next(), words.next()) else {
            return Err(invalid());
        };

        let edge = match edge {
            "top" => Edge::Top,
            "center" => Edge::Center,
            "bottom" => Edge::Bottom,
            _ => return Err(invalid()),
        };

        let viewport = match viewport {
            "top" => ViewportPosition::Percent(0.0),
            "center" => ViewportPosition::Percent(50.0),
            "bottom" => ViewportPosition::Percent(100.0),
            v => {
                if let Some(p) = v.strip_suffix('%') {
                    ViewportPosition::Percent(parse_finite(p).ok_or_else(invalid)?)
                } else {
                    let px = v.strip_suffix("px").unwrap_or(v);
                    ViewportPosition::Pixels(parse_finite(px).ok_or_else(invalid)?)
                }
            }
        };

        Ok(TriggerPosition::new(edge, viewport))
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A scroll span between two boundaries of the same element; scroll position
/// is the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubRange {
    pub start: TriggerPosition,
    pub end: TriggerPosition,
}

impl ScrubRange {
    pub fn new(start: TriggerPosition, end: TriggerPosition) -> Self {
        Self { start, end }
    }

    /// Progress in [0, 1]: 0 before the start boundary, 1 past the end.
    pub fn progress(&self, rect: Rect, viewport_height: f64) -> f64 {
        let start_line = self.start.line(viewport_height);
        let end_line = self.end.line(viewport_height);
        let start_edge = self.start.edge_offset(rect);
        let end_edge = self.end.edge_offset(rect);

        // Scroll distance since the start boundary, over the distance between
        // the start and end boundaries.
        let travelled = start_line - start_edge;
        let total = travelled + (end_edge - end_line);

        if total <= 0.0 {
            return if self.end.is_past(rect, viewport_height) { 1.0 } else { 0.0 };
        }
        (travelled / total).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> TriggerPosition {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_expressions() {
        assert_eq!(
            pos("top 65%"),
            TriggerPosition::new(Edge::Top, ViewportPosition::Percent(65.0))
        );
        assert_eq!(
            pos("top -40"),
            TriggerPosition::new(Edge::Top, ViewportPosition::Pixels(-40.0))
        );
        assert_eq!(
            pos("bottom 120px"),
            TriggerPosition::new(Edge::Bottom, ViewportPosition::Pixels(120.0))
        );
        assert_eq!(
            pos("center center"),
            TriggerPosition::new(Edge::Center, ViewportPosition::Percent(50.0))
        );
        assert_eq!(pos("  top   top "), TriggerPosition::new(Edge::Top, ViewportPosition::Percent(0.0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "top", "middle 40%", "top abc%", "top 40% extra", "top NaN", "top inf"] {
            assert_eq!(
                bad.parse::<TriggerPosition>(),
                Err(SequencerError::InvalidTrigger(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_document_root_offset() {
        // The document root sits at -scroll_y.
        let nav = pos("top -40");
        assert!(!nav.is_past(Rect::new(0.0, 5000.0), 900.0));
        assert!(!nav.is_past(Rect::new(-39.0, 5000.0), 900.0));
        assert!(nav.is_past(Rect::new(-40.0, 5000.0), 900.0));
        assert!(nav.is_past(Rect::new(-400.0, 5000.0), 900.0));
    }

    #[test]
    fn test_percent_line() {
        let manifest = pos("top 65%");
        assert!(!manifest.is_past(Rect::new(700.0, 400.0), 1000.0));
        assert!(manifest.is_past(Rect::new(650.0, 400.0), 1000.0));
    }

    #[test]
    fn test_scrub_progress_is_linear_and_clamped() {
        let range = ScrubRange::new(pos("top 80%"), pos("top 30%"));
        let vh = 1000.0;
        assert_eq!(range.progress(Rect::new(1200.0, 800.0), vh), 0.0);
        assert_eq!(range.progress(Rect::new(800.0, 800.0), vh), 0.0);
        assert!((range.progress(Rect::new(550.0, 800.0), vh) - 0.5).abs() < 1e-9);
        assert_eq!(range.progress(Rect::new(300.0, 800.0), vh), 1.0);
        assert_eq!(range.progress(Rect::new(-200.0, 800.0), vh), 1.0);
    }

    #[test]
    fn test_degenerate_scrub_range_steps() {
        let range = ScrubRange::new(pos("top 50%"), pos("top 50%"));
        assert_eq!(range.progress(Rect::new(600.0, 10.0), 1000.0), 0.0);
        assert_eq!(range.progress(Rect::new(500.0, 10.0), 1000.0), 1.0);
    }
}
