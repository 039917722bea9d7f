use log::Level;
use serde::Deserialize;
use wasm_bindgen::JsCast;

use crate::sequencer::ambient::LoopSpec;
use crate::sequencer::choreography::{
    Choreography, ClassToggle, EntranceBinding, EntranceMode,
};
use crate::sequencer::easing::Ease;
use crate::sequencer::entrance::EntranceSpec;
use crate::sequencer::error::SequencerError;
use crate::sequencer::host::Target;
use crate::sequencer::pinned::StackSpec;
use crate::sequencer::style::StyleProps;
use crate::sequencer::trigger::{ScrubRange, TriggerPosition};
use crate::sequencer::tween::Tween;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntranceConfig {
    pub from_y: Option<f64>,
    pub from_y_percent: Option<f64>,
    pub from_opacity: f64,
    pub stagger_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
    /// Only for gated entrances.
    pub trigger: Option<String>,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            from_y: None,
            from_y_percent: None,
            from_opacity: 0.0,
            stagger_ms: 0.0,
            duration_ms: 1000.0,
            ease: Ease::None,
            trigger: None,
        }
    }
}

impl EntranceConfig {
    fn spec(&self) -> EntranceSpec {
        EntranceSpec::new(
            StyleProps {
                y: self.from_y,
                y_percent: self.from_y_percent,
                opacity: Some(self.from_opacity),
                ..Default::default()
            },
            self.stagger_ms,
            self.duration_ms,
            self.ease,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackConfig {
    pub start: String,
    pub end: String,
    pub pin_offset_px: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            start: "top 80%".into(),
            end: "top 35%".into(),
            // `top: 3.5rem`
            pin_offset_px: 56.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoopConfig {
    pub helix_outer_ms: f64,
    pub helix_inner_ms: f64,
    pub laser_ms: f64,
    pub ekg_ms: f64,
    pub cursor_ms: f64,
    pub save_fade_ms: f64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            helix_outer_ms: 12_000.0,
            helix_inner_ms: 8_000.0,
            laser_ms: 2_400.0,
            ekg_ms: 2_700.0,
            cursor_ms: 3_000.0,
            save_fade_ms: 1_500.0,
        }
    }
}

/// Every timing constant of the page. Missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    pub diagnostics_period_ms: u32,
    pub telemetry_period_ms: u32,
    pub nav_trigger: String,
    pub hero: EntranceConfig,
    pub manifest: EntranceConfig,
    pub stack: StackConfig,
    pub loops: LoopConfig,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            diagnostics_period_ms: 3000,
            telemetry_period_ms: 2400,
            nav_trigger: "top -40".into(),
            hero: EntranceConfig {
                from_y: Some(70.0),
                stagger_ms: 170.0,
                duration_ms: 1400.0,
                ease: Ease::Power3Out,
                ..Default::default()
            },
            manifest: EntranceConfig {
                from_y_percent: Some(120.0),
                stagger_ms: 200.0,
                duration_ms: 1250.0,
                ease: Ease::Power4Out,
                trigger: Some("top 65%".into()),
                ..Default::default()
            },
            stack: StackConfig::default(),
            loops: LoopConfig::default(),
        }
    }
}

impl LandingConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read overrides embedded in the page, falling back to defaults.
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok())
            .and_then(|script| script.text().ok());

        match text {
            None => Self::default(),
            Some(text) => match Self::from_json(&text) {
                Ok(config) => {
                    log::info!("loaded landing config overrides");
                    config
                }
                Err(err) => {
                    gloo_console::error!(format!("invalid #{}: {}", CONFIG_ELEMENT_ID, err));
                    Self::default()
                }
            },
        }
    }

    /// Check everything up front: rotator periods, durations and trigger
    /// expressions.
    pub fn validate(&self) -> Result<Choreography, SequencerError> {
        if self.diagnostics_period_ms == 0 || self.telemetry_period_ms == 0 {
            return Err(SequencerError::ZeroPeriod);
        }
        let choreography = self.choreography()?;
        choreography.validate()?;
        Ok(choreography)
    }

    pub fn choreography(&self) -> Result<Choreography, SequencerError> {
        let manifest_trigger: TriggerPosition = self
            .manifest
            .trigger
            .as_deref()
            .unwrap_or("top 65%")
            .parse()?;

        Ok(Choreography {
            entrances: vec![
                EntranceBinding {
                    name: "hero",
                    targets: Target::selector(".hero-stagger"),
                    spec: self.hero.spec(),
                    mode: EntranceMode::Immediate,
                },
                EntranceBinding {
                    name: "manifest",
                    targets: Target::selector(".manifest-reveal"),
                    spec: self.manifest.spec(),
                    mode: EntranceMode::Gated {
                        trigger: Target::selector("#philosophy"),
                        start: manifest_trigger,
                    },
                },
            ],
            toggles: vec![ClassToggle {
                trigger: Target::Document,
                start: self.nav_trigger.parse()?,
                target: Target::selector(".floating-nav"),
                class: "scrolled",
            }],
            stacks: vec![StackSpec::new(
                Target::selector(".stack-card"),
                ScrubRange::new(self.stack.start.parse()?, self.stack.end.parse()?),
                self.stack.pin_offset_px,
            )],
            loops: self.loops(),
        })
    }

    fn loops(&self) -> Vec<LoopSpec> {
        let l = &self.loops;
        vec![
            ambient("helix outer", ".helix-outer", rotate(0.0), rotate(360.0), l.helix_outer_ms, Ease::None, false),
            ambient("helix inner", ".helix-inner", rotate(0.0), rotate(-360.0), l.helix_inner_ms, Ease::None, false),
            ambient(
                "laser scan",
                ".laser-scan",
                StyleProps { x_percent: Some(0.0), ..Default::default() },
                StyleProps { x_percent: Some(260.0), ..Default::default() },
                l.laser_ms,
                Ease::SineInOut,
                true,
            ),
            ambient(
                "ekg trace",
                ".ekg-line",
                StyleProps { stroke_dashoffset: Some(350.0), ..Default::default() },
                StyleProps { stroke_dashoffset: Some(0.0), ..Default::default() },
                l.ekg_ms,
                Ease::None,
                false,
            ),
            ambient(
                "cursor sweep",
                ".cursor-protocol",
                StyleProps { x: Some(0.0), ..Default::default() },
                StyleProps { x: Some(280.0), ..Default::default() },
                l.cursor_ms,
                Ease::Power1InOut,
                true,
            ),
            ambient(
                "save pulse",
                ".save-fade",
                StyleProps { opacity: Some(1.0), ..Default::default() },
                StyleProps { opacity: Some(0.2), ..Default::default() },
                l.save_fade_ms,
                Ease::SineInOut,
                true,
            ),
        ]
    }
}

fn rotate(deg: f64) -> StyleProps {
    StyleProps {
        rotate: Some(deg),
        ..Default::default()
    }
}

fn ambient(
    name: &'static str,
    selector: &str,
    from: StyleProps,
    to: StyleProps,
    duration_ms: f64,
    ease: Ease,
    yoyo: bool,
) -> LoopSpec {
    LoopSpec::new(name, Target::selector(selector), Tween::new(from, to, duration_ms, ease), yoyo)
}
