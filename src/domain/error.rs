use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// User-facing rejection of a submission. The message is shown verbatim.
    #[error("{0}")]
    Validation(String),
    #[error("Invalid phone number or password")]
    InvalidCredentials,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Internal error: {0}")]
    Internal(String),
}
