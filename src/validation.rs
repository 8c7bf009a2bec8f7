use crate::errors::{ValidationError, DomainResult, DomainError};
use regex::Regex;
use std::sync::OnceLock;

/// A trait that request models should implement for validation.
pub trait Validate {
    /// Validates the model and returns an error if validation fails.
    fn validate(&self) -> DomainResult<()>;
}

// Common regex patterns
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap())
}

/// Struct for configuring validations in a fluent style
pub struct ValidationBuilder<T> {
    field_name: String,
    value: Option<T>,
    errors: Vec<ValidationError>,
}

/// Generic validation implementations
impl<T> ValidationBuilder<T> {
    pub fn new(field_name: &str, value: Option<T>) -> Self {
        Self {
            field_name: field_name.to_string(),
            value,
            errors: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self
    where T: Default + PartialEq {
        if self.value.is_none() || self.value == Some(T::default()) {
            self.errors.push(ValidationError::required(&self.field_name));
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> DomainResult<()> {
        match self.errors.into_iter().next() {
            None => Ok(()),
            // Return the first error for simplicity
            Some(err) => Err(DomainError::Validation(err)),
        }
    }
}

/// String-specific validations
impl ValidationBuilder<String> {
    pub fn max_length(mut self, max: usize) -> Self {
        if let Some(value) = &self.value {
            if value.chars().count() > max {
                self.errors.push(ValidationError::max_length(&self.field_name, max));
            }
        }
        self
    }

    pub fn not_blank(mut self) -> Self {
        if let Some(value) = &self.value {
            if !value.is_empty() && value.trim().is_empty() {
                self.errors.push(ValidationError::required(&self.field_name));
            }
        }
        self
    }

    pub fn matches_pattern(mut self, pattern: &Regex, message: &str) -> Self {
        if let Some(value) = &self.value {
            if !pattern.is_match(value) {
                self.errors.push(ValidationError::format(&self.field_name, message));
            }
        }
        self
    }

    pub fn email(self) -> Self {
        self.matches_pattern(email_regex(), "must be a valid email address")
    }
}
