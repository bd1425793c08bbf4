// registrar/src/error.rs

use thiserror::Error;

/// A field rejected during entity construction or console entry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty.")]
    EmptyField { field: &'static str },
    #[error("The {field} should not contain numbers.")]
    NotAlphabetic { field: &'static str },
}

/// Menu input outside "1".."4". The user message is the whole story;
/// no technical detail accompanies it.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("Please, choose only 1, 2, 3, or 4")]
pub struct InvalidChoice;
