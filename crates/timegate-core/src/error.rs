//! Core error types.

use thiserror::Error;

/// Errors raised while turning configuration input into engine values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A weekday name that is not one of the seven recognised names.
    #[error("{0} is an invalid day. It should be one of {names} valid days.", names = crate::weekday::Weekday::name_list())]
    InvalidWeekday(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
