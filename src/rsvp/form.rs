//! RSVP form data and validation

use regex::Regex;

use super::error::RsvpError;

/// Browser whitespace as a character class body. Unlike regex `\s` it
/// includes U+FEFF and excludes U+0085.
const FORM_SPACE: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Whitespace as the browser trims form input
fn is_form_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_space)
}

/// Local part, `@`, domain, `.`, TLD; none of them containing whitespace or
/// `@`. Deliberately loose.
fn email_pattern() -> String {
    let part = format!("[^@{}]+", FORM_SPACE);
    format!(r"^{part}@{part}\.{part}$")
}

/// The guest's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attendance {
    Yes,
    No,
}

impl Attendance {
    /// Interpret the `value` of the checked attendance radio.
    ///
    /// Only `"yes"` means attending; any other non-empty value is a decline.
    pub fn from_radio_value(value: &str) -> Option<Self> {
        match value.trim() {
            "" => None,
            "yes" => Some(Attendance::Yes),
            _ => Some(Attendance::No),
        }
    }

    pub fn is_attending(self) -> bool {
        self == Attendance::Yes
    }
}

/// Raw field values as read from the form
#[derive(Debug, Clone, Default)]
pub struct RsvpDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub attendance: Option<Attendance>,
}

/// A draft that passed validation, with surrounding whitespace removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rsvp {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub attendance: Attendance,
}

/// Checks a draft in order: name, email, attendance
#[derive(Debug, Clone)]
pub struct RsvpValidator {
    email: Regex,
}

impl RsvpValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(&email_pattern())?,
        })
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        !email.is_empty() && self.email.is_match(email)
    }

    /// Validate a draft; the first failing check wins
    pub fn validate(&self, draft: &RsvpDraft) -> Result<Rsvp, RsvpError> {
        let first_name = trim_form(&draft.first_name);
        let last_name = trim_form(&draft.last_name);
        let email = trim_form(&draft.email);

        if first_name.is_empty() || last_name.is_empty() {
            return Err(RsvpError::MissingName);
        }

        if !self.is_valid_email(email) {
            return Err(RsvpError::InvalidEmail);
        }

        let attendance = draft.attendance.ok_or(RsvpError::MissingAttendance)?;

        Ok(Rsvp {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            attendance,
        })
    }
}
