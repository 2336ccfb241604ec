//! Field-level checks applied at the API boundary before any service call.

use std::sync::LazyLock;

use regex::Regex;

use shared_models::error::AppError;

pub const MIN_PATIENT_AGE: i64 = 1;
pub const MAX_PATIENT_AGE: i64 = 130;
pub const MIN_DOCTOR_FEES: f64 = 101.0;

static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").ok());

static GENDER_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[MF]$").ok());

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

// An uncompiled pattern matches nothing.
fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

pub fn is_valid_phone(value: &str) -> bool {
    matches(&PHONE_PATTERN, value)
}

pub fn is_valid_gender(value: &str) -> bool {
    matches(&GENDER_PATTERN, value)
}

pub fn is_valid_email(value: &str) -> bool {
    matches(&EMAIL_PATTERN, value)
}

pub fn is_valid_age(age: i64) -> bool {
    (MIN_PATIENT_AGE..=MAX_PATIENT_AGE).contains(&age)
}

pub fn is_valid_fee(fees: f64) -> bool {
    fees.is_finite() && fees >= MIN_DOCTOR_FEES
}

/// Collects every failed field check so the client sees them all at once.
#[derive(Debug, Default)]
pub struct FieldErrors {
    messages: Vec<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.messages.push(message.into());
        }
        self
    }

    /// Require a length (in characters, surrounding whitespace ignored) within `min..=max`.
    pub fn length(&mut self, field: &str, value: &str, min: usize, max: usize) -> &mut Self {
        let len = value.trim().chars().count();
        if len < min {
            if min <= 1 {
                self.messages.push(format!("{} is required", field));
            } else {
                self.messages.push(format!("{} must be at least {} characters", field, min));
            }
        } else if len > max {
            self.messages.push(format!("{} must be at most {} characters", field, max));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(self.messages.join("; ")))
        }
    }
}
