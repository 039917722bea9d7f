//! Easing curves mapping linear progress in [0, 1] to eased progress in [0, 1].

use std::f64::consts::PI;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Ease {
    /// Linear.
    #[default]
    #[serde(rename = "none", alias = "linear")]
    None,
    #[serde(rename = "power1.inOut")]
    Power1InOut,
    #[serde(rename = "power3.out")]
    Power3Out,
    #[serde(rename = "power4.out")]
    Power4Out,
    #[serde(rename = "sine.inOut")]
    SineInOut,
}

impl Ease {
    pub const ALL: [Ease; 5] = [
        Ease::None,
        Ease::Power1InOut,
        Ease::Power3Out,
        Ease::Power4Out,
        Ease::SineInOut,
    ];

    /// Apply the curve to a progress value. Input outside [0, 1] is clamped.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power1InOut => quad_in_out(t),
            Ease::Power3Out => power_out(t, 4),
            Ease::Power4Out => power_out(t, 5),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[inline]
fn quad_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv / 2.0
    }
}

/// powerN.out is an ease-out of degree N + 1: f(t) = 1 - (1-t)^(N+1)
#[inline]
fn power_out(t: f64, degree: i32) -> f64 {
    1.0 - (1.0 - t).powi(degree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for ease in Ease::ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{:?} at t=0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at t=1", ease);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for ease in Ease::ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = ease.apply(t);
                assert!(v >= prev - 1e-12, "{:?} not monotonic at t={}", ease, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Ease::Power3Out.apply(-1.0), 0.0);
        assert_eq!(Ease::SineInOut.apply(3.0), 1.0);
    }

    #[test]
    fn test_in_out_curves_are_symmetric() {
        for ease in [Ease::Power1InOut, Ease::SineInOut] {
            assert!((ease.apply(0.5) - 0.5).abs() < 1e-9);
            let a = ease.apply(0.2);
            let b = ease.apply(0.8);
            assert!((a + b - 1.0).abs() < 1e-9, "{:?}", ease);
        }
    }

    #[test]
    fn test_deserialize_names() {
        let parse = |name: &str| serde_json::from_str::<Ease>(&format!("{name:?}"));
        assert_eq!(parse("power4.out").unwrap(), Ease::Power4Out);
        assert_eq!(parse("linear").unwrap(), Ease::None);
        assert_eq!(parse("sine.inOut").unwrap(), Ease::SineInOut);
        assert!(parse("bounce.out").is_err());
    }
}
