//! Individual profile fields that can be requested on their own.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    FirstName,
    LastName,
    Age,
    PostCode,
}

impl FieldKind {
    /// All fields, in display order
    pub const ALL: [FieldKind; 4] = [
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::Age,
        FieldKind::PostCode,
    ];

    /// Kebab-case name used on the command line and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::FirstName => "first-name",
            FieldKind::LastName => "last-name",
            FieldKind::Age => "age",
            FieldKind::PostCode => "post-code",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::FirstName => "First Name",
            FieldKind::LastName => "Last Name",
            FieldKind::Age => "Age",
            FieldKind::PostCode => "Post Code",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown profile field: {0} (expected first-name, last-name, age or post-code)")]
pub struct ParseFieldError(pub String);

impl FromStr for FieldKind {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "first-name" => Ok(FieldKind::FirstName),
            "last-name" => Ok(FieldKind::LastName),
            "age" => Ok(FieldKind::Age),
            "post-code" => Ok(FieldKind::PostCode),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}

/// Value returned by a single-field request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(u32),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}
