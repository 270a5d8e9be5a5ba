//! RSVP validation errors
//!
//! The `Display` text of each variant is exactly what the guest sees in the
//! toast.

use thiserror::Error;

/// Reasons a submission is rejected, in the order they are checked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpError {
    /// First or last name is blank
    #[error("Please enter your name.")]
    MissingName,

    /// Email is blank or not shaped like `local@domain.tld`
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// No attendance option is checked
    #[error("Please select your attendance.")]
    MissingAttendance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(RsvpError::MissingName.to_string(), "Please enter your name.");
        assert_eq!(
            RsvpError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            RsvpError::MissingAttendance.to_string(),
            "Please select your attendance."
        );
    }
}
