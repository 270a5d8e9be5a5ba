//! RSVP form
//!
//! Validation of the guest's answers and the simulated submission that
//! swaps the form for a confirmation message. Nothing leaves the browser.

pub mod controller;
pub mod error;
pub mod form;

pub use controller::{
    confirmation_message, GroupStyle, RsvpController, RsvpEffect, RsvpPhase, SubmitStage,
    RECEIPT_TOAST, SENDING_LABEL,
};
pub use error::RsvpError;
pub use form::{Attendance, Rsvp, RsvpDraft, RsvpValidator};
