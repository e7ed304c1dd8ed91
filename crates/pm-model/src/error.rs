use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{component}: invalid configuration: {reason}")]
    InvalidConfig {
        component: &'static str,
        reason: String,
    },

    #[error(
        "{component}: sample period {got_secs} s is shorter than the \
         hardware needs ({needed_secs} s)"
    )]
    SamplePeriodTooShort {
        component: &'static str,
        needed_secs: f64,
        got_secs: f64,
    },
}

impl ModelError {
    /// Shorthand for the `InvalidConfig` variant.
    pub fn invalid(component: &'static str, reason: impl Into<String>) -> Self {
        ModelError::InvalidConfig {
            component,
            reason: reason.into(),
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
