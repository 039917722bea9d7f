//! Animated style properties and how they are written to an element.

/// A partial set of animated properties. `None` means "not touched": the
/// property is neither interpolated nor written.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleProps {
    pub x: Option<f64>,
    pub x_percent: Option<f64>,
    pub y: Option<f64>,
    pub y_percent: Option<f64>,
    /// Degrees.
    pub rotate: Option<f64>,
    pub scale: Option<f64>,
    pub opacity: Option<f64>,
    /// Pixels, rendered through `filter: blur()`.
    pub blur: Option<f64>,
    pub stroke_dashoffset: Option<f64>,
    pub transform_origin: Option<&'static str>,
}

impl StyleProps {
    /// Every CSS property this type can write; used to revert an element.
    pub const PROPERTIES: [&'static str; 5] = [
        "transform",
        "opacity",
        "filter",
        "stroke-dashoffset",
        "transform-origin",
    ];

    /// The same set of properties at their natural resting values.
    pub fn resting(&self) -> StyleProps {
        StyleProps {
            x: self.x.map(|_| 0.0),
            x_percent: self.x_percent.map(|_| 0.0),
            y: self.y.map(|_| 0.0),
            y_percent: self.y_percent.map(|_| 0.0),
            rotate: self.rotate.map(|_| 0.0),
            scale: self.scale.map(|_| 1.0),
            opacity: self.opacity.map(|_| 1.0),
            blur: self.blur.map(|_| 0.0),
            stroke_dashoffset: self.stroke_dashoffset.map(|_| 0.0),
            transform_origin: self.transform_origin,
        }
    }

    /// Interpolate towards `to`. A property present on only one side
    /// interpolates against its resting value.
    pub fn lerp(&self, to: &StyleProps, t: f64) -> StyleProps {
        let from_rest = self.resting();
        let to_rest = to.resting();
        let mix = |a: Option<f64>, b: Option<f64>, a_rest: Option<f64>, b_rest: Option<f64>| {
            match (a, b) {
                (None, None) => None,
                (a, b) => {
                    let a = a.or(b_rest).unwrap_or_default();
                    let b = b.or(a_rest).unwrap_or_default();
                    Some(a + (b - a) * t)
                }
            }
        };
        StyleProps {
            x: mix(self.x, to.x, from_rest.x, to_rest.x),
            x_percent: mix(self.x_percent, to.x_percent, from_rest.x_percent, to_rest.x_percent),
            y: mix(self.y, to.y, from_rest.y, to_rest.y),
            y_percent: mix(self.y_percent, to.y_percent, from_rest.y_percent, to_rest.y_percent),
            rotate: mix(self.rotate, to.rotate, from_rest.rotate, to_rest.rotate),
            scale: mix(self.scale, to.scale, from_rest.scale, to_rest.scale),
            opacity: mix(self.opacity, to.opacity, from_rest.opacity, to_rest.opacity),
            blur: mix(self.blur, to.blur, from_rest.blur, to_rest.blur),
            stroke_dashoffset: mix(
                self.stroke_dashoffset,
                to.stroke_dashoffset,
                from_rest.stroke_dashoffset,
                to_rest.stroke_dashoffset,
            ),
            transform_origin: to.transform_origin.or(self.transform_origin),
        }
    }

    /// CSS declarations for the touched properties, in a stable order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        let transform = self.transform();
        if !transform.is_empty() {
            out.push(("transform", transform));
        }
        if let Some(origin) = self.transform_origin {
            out.push(("transform-origin", origin.to_string()));
        }
        if let Some(opacity) = self.opacity {
            out.push(("opacity", num(opacity)));
        }
        if let Some(blur) = self.blur {
            out.push(("filter", format!("blur({}px)", num(blur))));
        }
        if let Some(offset) = self.stroke_dashoffset {
            out.push(("stroke-dashoffset", num(offset)));
        }
        out
    }

    fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate({}px, {}px)",
                num(self.x.unwrap_or_default()),
                num(self.y.unwrap_or_default())
            ));
        }
        if self.x_percent.is_some() || self.y_percent.is_some() {
            parts.push(format!(
                "translate({}%, {}%)",
                num(self.x_percent.unwrap_or_default()),
                num(self.y_percent.unwrap_or_default())
            ));
        }
        if let Some(rotate) = self.rotate {
            parts.push(format!("rotate({}deg)", num(rotate)));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", num(scale)));
        }
        parts.join(" ")
    }
}

/// Three decimals, no trailing zeros, no negative zero.
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0 + 0.0;
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_keeps_shape() {
        let from = StyleProps {
            y: Some(70.0),
            opacity: Some(0.0),
            ..Default::default()
        };
        let rest = from.resting();
        assert_eq!(rest.y, Some(0.0));
        assert_eq!(rest.opacity, Some(1.0));
        assert_eq!(rest.scale, None);
    }

    #[test]
    fn test_lerp_against_resting_value() {
        let rest = StyleProps {
            scale: Some(1.0),
            ..Default::default()
        };
        let covered = StyleProps {
            scale: Some(0.9),
            opacity: Some(0.5),
            ..Default::default()
        };
        let mid = rest.lerp(&covered, 0.5);
        assert!((mid.scale.unwrap() - 0.95).abs() < 1e-9);
        assert!((mid.opacity.unwrap() - 0.75).abs() < 1e-9);
        assert_eq!(mid.blur, None);
    }

    #[test]
    fn test_declarations_only_touched_properties() {
        let style = StyleProps {
            opacity: Some(0.2),
            ..Default::default()
        };
        assert_eq!(style.declarations(), vec![("opacity", "0.2".to_string())]);
        assert!(StyleProps::default().declarations().is_empty());
    }

    #[test]
    fn test_transform_composition() {
        let style = StyleProps {
            y: Some(35.0),
            x_percent: Some(130.0),
            rotate: Some(-90.0),
            scale: Some(0.95),
            blur: Some(10.0),
            transform_origin: Some("center center"),
            ..Default::default()
        };
        let decls = style.declarations();
        assert_eq!(
            decls[0],
            (
                "transform",
                "translate(0px, 35px) translate(130%, 0%) rotate(-90deg) scale(0.95)".to_string()
            )
        );
        assert_eq!(decls[1], ("transform-origin", "center center".to_string()));
        assert_eq!(decls[2], ("filter", "blur(10px)".to_string()));
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(1.0 / 3.0), "0.333");
        assert_eq!(num(350.0), "350");
    }
}
