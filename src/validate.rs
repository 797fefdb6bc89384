//! Form field validation
//!
//! Pure predicates over the portal's field formats plus the per-field
//! error/success annotation store consumed by the form view. The predicates
//! mirror the formats the portal backend enforces: Indian mobile numbers,
//! university enrollment numbers, and faculty id codes.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").expect("phone regex"));

static ENROLLMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,12}$").expect("enrollment regex"));

static FACULTY_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,3}[0-9]{3,5}$").expect("faculty id regex"));

/// Special characters accepted by the password strength check
const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length
const PASSWORD_MIN_LENGTH: usize = 8;

/// Validate an email address: local part, `@`, domain, `.`, tld, with no
/// whitespace or second `@` anywhere
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validate a mobile number: exactly 10 digits, leading digit 6-9
pub fn validate_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Validate an enrollment number: 10 to 12 ASCII digits
pub fn validate_enrollment(value: &str) -> bool {
    ENROLLMENT_RE.is_match(value)
}

/// Validate a faculty id: 2-3 uppercase letters followed by 3-5 digits
pub fn validate_faculty_id(value: &str) -> bool {
    FACULTY_ID_RE.is_match(value)
}

/// Per-rule outcome of a password strength check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordReport {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl PasswordReport {
    /// A password is valid when every individual rule passes
    pub fn is_valid(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.numbers && self.special
    }
}

/// Check password strength, reporting each rule separately
pub fn validate_password(value: &str) -> PasswordReport {
    PasswordReport {
        length: value.chars().count() >= PASSWORD_MIN_LENGTH,
        uppercase: value.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: value.chars().any(|c| c.is_ascii_lowercase()),
        numbers: value.chars().any(|c| c.is_ascii_digit()),
        special: value.chars().any(|c| PASSWORD_SPECIALS.contains(c)),
    }
}

/// Visual validation state of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Error,
    Success,
}

/// Per-field error/success annotations for one form
///
/// Only field names registered at construction can carry a mark; annotating
/// an unknown name is a silent no-op rather than an error, so callers never
/// have to defend against renamed or absent fields.
#[derive(Debug, Clone, Default)]
pub struct FieldMarks {
    known: Vec<String>,
    marks: HashMap<String, Mark>,
    messages: HashMap<String, String>,
}

impl FieldMarks {
    /// Create an annotation store for the given field names
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: fields.into_iter().map(Into::into).collect(),
            marks: HashMap::new(),
            messages: HashMap::new(),
        }
    }

    fn is_known(&self, field: &str) -> bool {
        self.known.iter().any(|f| f == field)
    }

    /// Mark a field as errored with an inline message, replacing any
    /// previous message and clearing a success mark
    pub fn set_error(&mut self, field: &str, message: impl Into<String>) {
        if !self.is_known(field) {
            return;
        }
        self.marks.insert(field.to_string(), Mark::Error);
        self.messages.insert(field.to_string(), message.into());
    }

    /// Mark a field as successful, clearing any error state
    pub fn set_success(&mut self, field: &str) {
        if !self.is_known(field) {
            return;
        }
        self.marks.insert(field.to_string(), Mark::Success);
        self.messages.remove(field);
    }

    /// Remove every mark and inline message
    pub fn clear_all(&mut self) {
        self.marks.clear();
        self.messages.clear();
    }

    /// Current mark for a field, if any
    pub fn mark(&self, field: &str) -> Option<Mark> {
        self.marks.get(field).copied()
    }

    /// Inline error message for a field, if any
    pub fn message(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }

    /// Whether any field currently carries an error mark
    pub fn has_errors(&self) -> bool {
        self.marks.values().any(|m| *m == Mark::Error)
    }
}
