#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    InvalidCredentials,
    InvalidEmail(String),
    PasswordTooShort(usize),
    PasswordMismatch,
    MissingName,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidCredentials => {
                write!(f, "Invalid email or password")
            }
            DomainError::InvalidEmail(email) => {
                write!(f, "Invalid email address: {}", email)
            }
            DomainError::PasswordTooShort(min) => {
                write!(f, "Password must be at least {} characters", min)
            }
            DomainError::PasswordMismatch => {
                write!(f, "Passwords do not match")
            }
            DomainError::MissingName => {
                write!(f, "Name is required")
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
