use thiserror::Error;

/// Setup-time failures. Everything here is a developer mistake in the page
/// configuration, so it is reported before any listener or timer exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequencerError {
    #[error("rotator period must be greater than zero")]
    ZeroPeriod,

    #[error("rotator content list is empty")]
    EmptyContent,

    #[error("{what} must be a positive number of milliseconds, got {value}")]
    InvalidDuration { what: &'static str, value: f64 },

    #[error("{what} must not be negative, got {value}")]
    NegativeStagger { what: &'static str, value: f64 },

    #[error("invalid trigger expression {0:?}")]
    InvalidTrigger(String),
}

pub type Result<T> = std::result::Result<T, SequencerError>;

pub(crate) fn positive_duration(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SequencerError::InvalidDuration { what, value })
    }
}

pub(crate) fn non_negative_stagger(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SequencerError::NegativeStagger { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_checks() {
        assert_eq!(positive_duration("hero", 1400.0), Ok(1400.0));
        assert!(positive_duration("hero", 0.0).is_err());
        assert!(positive_duration("hero", -5.0).is_err());
        assert!(positive_duration("hero", f64::NAN).is_err());
        assert_eq!(non_negative_stagger("hero", 0.0), Ok(0.0));
        assert!(non_negative_stagger("hero", -1.0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SequencerError::InvalidDuration { what: "laser loop", value: 0.0 };
        assert_eq!(
            err.to_string(),
            "laser loop must be a positive number of milliseconds, got 0"
        );
        assert_eq!(
            SequencerError::InvalidTrigger("middle 40%".into()).to_string(),
            "invalid trigger expression \"middle 40%\""
        );
    }
}
