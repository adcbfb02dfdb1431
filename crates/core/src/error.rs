/// Failure of a required field. Optional fields never produce errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field '{0}' is missing")]
    MissingRequiredField(String),

    #[error("required field '{0}' value is not valid")]
    InvalidRequiredFieldType(String),
}

impl ValidationError {
    /// Name of the field whose rule failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingRequiredField(field)
            | ValidationError::InvalidRequiredFieldType(field) => field,
        }
    }
}
