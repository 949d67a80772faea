//! Declarative validation rules for form fields

use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation rules for a field. Every rule carries the message shown when it fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationRules {
    pub required: Option<&'static str>,
    pub min: Option<(f64, &'static str)>,
    pub max: Option<(f64, &'static str)>,
    pub min_length: Option<(usize, &'static str)>,
    pub pattern: Option<(&'static Regex, &'static str)>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: None,
            min: None,
            max: None,
            min_length: None,
            pattern: None,
        }
    }

    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub fn min(mut self, min: f64, message: &'static str) -> Self {
        self.min = Some((min, message));
        self
    }

    pub fn max(mut self, max: f64, message: &'static str) -> Self {
        self.max = Some((max, message));
        self
    }

    pub fn min_length(mut self, min: usize, message: &'static str) -> Self {
        self.min_length = Some((min, message));
        self
    }

    pub fn pattern(mut self, re: &'static Regex, message: &'static str) -> Self {
        self.pattern = Some((re, message));
        self
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str) -> Result<(), &'static str> {
        if let Some(message) = self.required {
            if value.trim().is_empty() {
                return Err(message);
            }
        }

        if let Some((min, message)) = self.min_length {
            if value.chars().count() < min {
                return Err(message);
            }
        }

        if let Some((re, message)) = self.pattern {
            if !re.is_match(value) {
                return Err(message);
            }
        }

        Ok(())
    }

    /// Validate an optional numeric value against required/min/max rules
    pub fn validate_number(&self, value: Option<f64>) -> Result<(), &'static str> {
        let Some(value) = value else {
            return match self.required {
                Some(message) => Err(message),
                None => Ok(()),
            };
        };

        if let Some((min, message)) = self.min {
            if value < min {
                return Err(message);
            }
        }

        if let Some((max, message)) = self.max {
            if value > max {
                return Err(message);
            }
        }

        Ok(())
    }
}

/// A single failed field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All failed fields of a form, keyed by field name
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.entry(error.field).or_insert(error.message);
    }

    /// Record the outcome of one rule check
    pub fn check(&mut self, field: &'static str, outcome: Result<(), &'static str>) {
        if let Err(message) = outcome {
            self.push(ValidationError { field, message });
        }
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
