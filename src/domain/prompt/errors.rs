//! Prompt Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkItemError {
    #[error("output name is empty")]
    EmptyName,

    #[error("output name '{0}' is not a single path component")]
    InvalidName(String),
}
