use super::easing::Ease;
use super::style::StyleProps;

/// A single from/to interpolation over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: StyleProps,
    pub to: StyleProps,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: StyleProps, to: StyleProps, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_ms,
            ease,
        }
    }

    /// Style at linear progress `t` (clamped), after easing.
    pub fn at(&self, t: f64) -> StyleProps {
        self.from.lerp(&self.to, self.ease.apply(t))
    }

    /// Style `elapsed_ms` after the tween started; holds the end state.
    pub fn sample(&self, elapsed_ms: f64) -> StyleProps {
        self.at(elapsed_ms / self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_holds_endpoints() {
        let tween = Tween::new(
            StyleProps {
                stroke_dashoffset: Some(350.0),
                ..Default::default()
            },
            StyleProps {
                stroke_dashoffset: Some(0.0),
                ..Default::default()
            },
            2700.0,
            Ease::None,
        );
        assert_eq!(tween.sample(-100.0).stroke_dashoffset, Some(350.0));
        assert_eq!(tween.sample(1350.0).stroke_dashoffset, Some(175.0));
        assert_eq!(tween.sample(9000.0).stroke_dashoffset, Some(0.0));
    }
}
