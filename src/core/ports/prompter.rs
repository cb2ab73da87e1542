//! Prompter port
//!
//! Collects a replacement value for one task field from the user.

/// What the user answered for one field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldInput {
    /// The user dismissed the prompt; keep the current value
    #[default]
    Declined,
    /// The user confirmed a value, possibly the empty string
    Submitted(String),
}

impl FieldInput {
    /// Build from an optional value, `None` meaning declined
    #[must_use]
    pub fn from_option(value: Option<String>) -> Self {
        value.map_or(Self::Declined, Self::Submitted)
    }

    /// Submitted value, if any
    #[must_use]
    pub fn submitted(&self) -> Option<&str> {
        match self {
            Self::Declined => None,
            Self::Submitted(s) => Some(s),
        }
    }
}

/// Interactive source of field values
pub trait Prompter {
    /// Ask for a new value of `label`, showing `current` as the default
    fn prompt(&mut self, label: &str, current: &str) -> FieldInput;
}
