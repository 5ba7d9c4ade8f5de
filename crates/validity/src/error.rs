/// Integrator mistakes detected when a validator is configured.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    #[error("min value {value:?} is not a number")]
    InvalidMin { value: String },
}
