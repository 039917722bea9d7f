//! Infinite decorative loops driven by elapsed time only.

use super::error::{positive_duration, Result};
use super::host::Target;
use super::style::StyleProps;
use super::tween::Tween;

#[derive(Debug, Clone, PartialEq)]
pub struct LoopSpec {
    pub name: &'static str,
    pub target: Target,
    pub tween: Tween,
    /// Play every other cycle backwards instead of restarting.
    pub yoyo: bool,
}

impl LoopSpec {
    pub fn new(name: &'static str, target: Target, tween: Tween, yoyo: bool) -> Self {
        Self {
            name,
            target,
            tween,
            yoyo,
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive_duration(self.name, self.tween.duration_ms)?;
        Ok(())
    }

    /// Style `elapsed_ms` after the loop started.
    pub fn sample(&self, elapsed_ms: f64) -> StyleProps {
        let cycles = elapsed_ms.max(0.0) / self.tween.duration_ms;
        let completed = cycles.floor();
        let phase = cycles - completed;
        let reversed = self.yoyo && (completed as u64) % 2 == 1;
        self.tween.at(if reversed { 1.0 - phase } else { phase })
    }
}
