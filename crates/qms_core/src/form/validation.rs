//! Field-level validation rules and error collection.
//!
//! # Responsibility
//! - Express presence, length, range and format constraints per field.
//! - Collect failures keyed by field path for field-level display.
//!
//! # Invariants
//! - Length and format rules skip empty values; `Required` owns presence.
//! - Nested fields use `list[index].field` paths.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Constraint attached to one form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    /// Value must be present (non-blank text, selected option, set date).
    Required,
    /// Text must have at least this many characters.
    MinLength(usize),
    /// Number must be greater than or equal to this bound.
    Min(f64),
    /// Number must be less than or equal to this bound.
    Max(f64),
    /// Text must look like an e-mail address.
    Email,
}

/// Single field validation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Required,
    TooShort { min: usize, actual: usize },
    BelowMin { min: f64, actual: f64 },
    AboveMax { max: f64, actual: f64 },
    InvalidEmail,
    /// Status change refused by a strict workflow.
    TransitionDenied { from: &'static str, to: &'static str },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::TooShort { min, actual } => {
                write!(f, "must be at least {min} characters (got {actual})")
            }
            Self::BelowMin { min, actual } => write!(f, "must be >= {min} (got {actual})"),
            Self::AboveMax { max, actual } => write!(f, "must be <= {max} (got {actual})"),
            Self::InvalidEmail => write!(f, "must be a valid e-mail address"),
            Self::TransitionDenied { from, to } => {
                write!(f, "status cannot change from `{from}` to `{to}`")
            }
        }
    }
}

/// Validation failures keyed by field path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<FieldError>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a single failure.
    pub fn single(field: impl Into<String>, error: FieldError) -> Self {
        let mut errors = Self::new();
        errors.push(field, error);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, error: FieldError) {
        self.fields.entry(field.into()).or_default().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one failure.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Failures recorded for `field`; empty when the field is valid.
    pub fn get(&self, field: &str) -> &[FieldError] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Invalid field paths in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, errors) in &self.fields {
            for error in errors {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {error}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Accumulates field failures while a form is checked.
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a text field.
    pub fn text(&mut self, field: &str, value: &str, rules: &[FieldRule]) {
        let trimmed = value.trim();
        for rule in rules {
            match *rule {
                FieldRule::Required if trimmed.is_empty() => {
                    self.errors.push(field, FieldError::Required);
                }
                FieldRule::MinLength(min) if !trimmed.is_empty() => {
                    // Counted on the trimmed text, which is what gets stored.
                    let actual = trimmed.chars().count();
                    if actual < min {
                        self.errors.push(field, FieldError::TooShort { min, actual });
                    }
                }
                FieldRule::Email if !trimmed.is_empty() && !EMAIL_RE.is_match(trimmed) => {
                    self.errors.push(field, FieldError::InvalidEmail);
                }
                _ => {}
            }
        }
    }

    /// Checks a numeric field that always carries a value.
    pub fn number(&mut self, field: &str, value: f64, rules: &[FieldRule]) {
        self.optional_number(field, Some(value), rules);
    }

    /// Checks a numeric field that may be left blank.
    pub fn optional_number(&mut self, field: &str, value: Option<f64>, rules: &[FieldRule]) {
        for rule in rules {
            match (*rule, value) {
                (FieldRule::Required, None) => self.errors.push(field, FieldError::Required),
                (FieldRule::Min(min), Some(actual)) if actual < min => {
                    self.errors.push(field, FieldError::BelowMin { min, actual });
                }
                (FieldRule::Max(max), Some(actual)) if actual > max => {
                    self.errors.push(field, FieldError::AboveMax { max, actual });
                }
                _ => {}
            }
        }
    }

    /// Checks that a required date has been picked.
    pub fn date(&mut self, field: &str, value: Option<NaiveDate>) {
        if value.is_none() {
            self.errors.push(field, FieldError::Required);
        }
    }

    /// Checks that a required option has been selected.
    pub fn choice<T>(&mut self, field: &str, value: Option<T>) {
        if value.is_none() {
            self.errors.push(field, FieldError::Required);
        }
    }

    /// Builds the path of a field inside a nested list row.
    pub fn nested(list: &str, index: usize, field: &str) -> String {
        format!("{list}[{index}].{field}")
    }

    pub fn finish(self) -> FieldErrors {
        self.errors
    }
}

/// Returns a required value or a `Required` failure for `field`.
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, FieldErrors> {
    value.ok_or_else(|| FieldErrors::single(field, FieldError::Required))
}

#[cfg(test)]
mod tests {
    use super::{FieldError, FieldRule, Validator};

    #[test]
    fn text_rules_report_missing_and_short_values() {
        let mut validator = Validator::new();
        validator.text("title", "   ", &[FieldRule::Required, FieldRule::MinLength(10)]);
        validator.text("description", "short", &[FieldRule::MinLength(20)]);
        let errors = validator.finish();

        assert_eq!(errors.get("title"), &[FieldError::Required]);
        assert_eq!(
            errors.get("description"),
            &[FieldError::TooShort { min: 20, actual: 5 }]
        );
    }

    #[test]
    fn min_length_ignores_surrounding_whitespace() {
        let mut validator = Validator::new();
        validator.text("title", "  Leak        ", &[FieldRule::MinLength(10)]);
        let errors = validator.finish();

        assert_eq!(
            errors.get("title"),
            &[FieldError::TooShort { min: 10, actual: 4 }]
        );
    }

    #[test]
    fn number_rules_check_both_bounds() {
        let mut validator = Validator::new();
        validator.number("quantity", 0.0, &[FieldRule::Min(1.0)]);
        validator.number("timeout", 500.0, &[FieldRule::Min(5.0), FieldRule::Max(480.0)]);
        validator.optional_number("cost", None, &[FieldRule::Min(0.0)]);
        let errors = validator.finish();

        assert!(errors.has("quantity"));
        assert_eq!(
            errors.get("timeout"),
            &[FieldError::AboveMax {
                max: 480.0,
                actual: 500.0
            }]
        );
        assert!(!errors.has("cost"));
    }

    #[test]
    fn email_rule_rejects_malformed_addresses() {
        let mut validator = Validator::new();
        validator.text("email", "jane.doe@company.com", &[FieldRule::Email]);
        validator.text("backup_email", "not-an-email", &[FieldRule::Email]);
        let errors = validator.finish();

        assert!(!errors.has("email"));
        assert_eq!(errors.get("backup_email"), &[FieldError::InvalidEmail]);
    }

    #[test]
    fn nested_paths_include_row_index() {
        assert_eq!(
            Validator::nested("dimensions", 2, "unit"),
            "dimensions[2].unit"
        );
    }
}
