//! The full set of effects a sequencer runs, checked before anything is
//! attached to the page.

use super::ambient::LoopSpec;
use super::entrance::EntranceSpec;
use super::error::Result;
use super::host::Target;
use super::pinned::StackSpec;
use super::trigger::TriggerPosition;

#[derive(Debug, Clone, PartialEq)]
pub enum EntranceMode {
    /// Plays at mount.
    Immediate,
    /// Plays the first time `trigger`'s boundary is crossed moving down.
    Gated {
        trigger: Target,
        start: TriggerPosition,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntranceBinding {
    pub name: &'static str,
    pub targets: Target,
    pub spec: EntranceSpec,
    pub mode: EntranceMode,
}

/// Adds `class` to `target` while `trigger` is past `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassToggle {
    pub trigger: Target,
    pub start: TriggerPosition,
    pub target: Target,
    pub class: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Choreography {
    pub entrances: Vec<EntranceBinding>,
    pub toggles: Vec<ClassToggle>,
    pub stacks: Vec<StackSpec>,
    pub loops: Vec<LoopSpec>,
}

impl Choreography {
    pub fn validate(&self) -> Result<()> {
        for entrance in &self.entrances {
            entrance.spec.validate(entrance.name)?;
        }
        for ambient in &self.loops {
            ambient.validate()?;
        }
        Ok(())
    }
}
