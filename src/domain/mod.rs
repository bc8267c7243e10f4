//! Domain entities and the generic resource contract.
//!
//! The three CRUD slices (dentists, patients, appointments) are structurally
//! identical, so the per-entity behavior is captured once in [`Resource`] and
//! implemented three times. Wire field names follow the clinic's Spanish
//! camelCase convention (`nombreOdontologo`, `fechaDeAltaPaciente`, ...).

mod appointment;
mod dentist;
mod patient;
mod resource;

pub use appointment::{Appointment, AppointmentPatch};
pub use dentist::{Dentist, DentistPatch};
pub use patient::{Patient, PatientPatch};
pub use resource::Resource;

/// A create or full-update payload left a required field empty.
#[derive(Debug, thiserror::Error)]
#[error("no {0} field may be empty")]
pub struct ValidationError(pub &'static str);
