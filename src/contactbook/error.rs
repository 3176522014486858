use thiserror::Error;

/// Rejections raised while constructing field values.
///
/// The display text is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Contact name cannot be empty.")]
    EmptyName,

    #[error("Phone number must be exactly 10 digits.")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Too few tokens for a command. Carries the usage hint for that command.
    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("Enter the argument for the command.")]
    TooManyArguments,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl ContactError {
    /// Errors the user caused by typing something malformed.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            ContactError::Validation(_)
                | ContactError::MissingArgument(_)
                | ContactError::TooManyArguments
        )
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
