//! Admission workflow evaluation.
//!
//! An applicant moves through document verification, academic scoring, an
//! extracurricular check and an interview before landing in an accepted or
//! rejected state. The evaluator is a pure function; everything stateful lives
//! in [`workflows::admission::AdmissionSession`].

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
