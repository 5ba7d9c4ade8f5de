/// Integrator mistakes detected when a formatter is configured.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("max value ({max}) is less than min value ({min})")]
    MaxLessThanMin { min: String, max: String },
    #[error("{bound} value {value:?} is not a number")]
    InvalidBound { bound: &'static str, value: String },
}
