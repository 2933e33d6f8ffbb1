//! Schema construction and serialization errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorKind {
    DescriptionTooLong,
    Serialization,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub kind: SchemaErrorKind,
    pub message: String,
}

impl SchemaError {
    pub fn new(kind: SchemaErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn description_too_long(length: usize, description: &str) -> Self {
        Self::new(
            SchemaErrorKind::DescriptionTooLong,
            format!("Max description length {length}: {description}"),
        )
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::Serialization, message)
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for SchemaError {}
