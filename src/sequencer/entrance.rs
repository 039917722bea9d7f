//! Staggered one-shot reveals.
//!
//! Every target starts from an offset transform and reduced opacity and
//! settles at its resting state. Target `i` starts `i * stagger` after the
//! entrance is played. Only transform and opacity are animated so the reveal
//! never changes layout.

use super::easing::Ease;
use super::error::{non_negative_stagger, positive_duration, Result};
use super::host::Rect;
use super::observer::{BoundaryWatch, Crossing};
use super::style::StyleProps;
use super::trigger::TriggerPosition;
use super::tween::Tween;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceSpec {
    pub from: StyleProps,
    pub stagger_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl EntranceSpec {
    pub fn new(from: StyleProps, stagger_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            stagger_ms,
            duration_ms,
            ease,
        }
    }

    pub fn validate(&self, what: &'static str) -> Result<()> {
        positive_duration(what, self.duration_ms)?;
        non_negative_stagger(what, self.stagger_ms)?;
        Ok(())
    }

    fn tween(&self) -> Tween {
        Tween::new(self.from, self.from.resting(), self.duration_ms, self.ease)
    }

    /// Time from play until the last of `count` targets has settled.
    pub fn total_ms(&self, count: usize) -> f64 {
        count.saturating_sub(1) as f64 * self.stagger_ms + self.duration_ms
    }
}

/// A timeline that can be played once.
#[derive(Debug, Clone, PartialEq)]
pub struct Entrance {
    spec: EntranceSpec,
    started_at: Option<f64>,
}

impl Entrance {
    pub fn new(spec: EntranceSpec) -> Self {
        Self {
            spec,
            started_at: None,
        }
    }

    /// Start playing at `now`. Returns false if it already played.
    pub fn play(&mut self, now: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    /// Style of target `index` at `now`. Before play every target holds the
    /// starting state.
    pub fn sample(&self, index: usize, now: f64) -> StyleProps {
        let tween = self.spec.tween();
        match self.started_at {
            None => tween.from,
            Some(start) => {
                let delay = index as f64 * self.spec.stagger_ms;
                tween.sample(now - start - delay)
            }
        }
    }

    pub fn is_finished(&self, count: usize, now: f64) -> bool {
        self.started_at
            .map(|start| now - start >= self.spec.total_ms(count))
            .unwrap_or(false)
    }
}

/// Opens exactly once: the first time its boundary is crossed moving down.
/// Later crossings in either direction are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneShotGate {
    watch: BoundaryWatch,
    fired: bool,
}

impl OneShotGate {
    pub fn new(start: TriggerPosition) -> Self {
        Self {
            watch: BoundaryWatch::new(start),
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn check(&mut self, rect: Rect, viewport_height: f64) -> bool {
        if self.fired {
            return false;
        }
        if self.watch.update(rect, viewport_height) == Some(Crossing::EnterDownward) {
            self.fired = true;
            return true;
        }
        false
    }
}
