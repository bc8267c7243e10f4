use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::{Resource, ValidationError};
use crate::store::SqlStore;

/// A booked appointment (turno). The dentist and patient references are
/// stored as opaque strings; no referential integrity is enforced at the
/// application layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "descripcionTurno")]
    #[sqlx(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "fechaTurno")]
    #[sqlx(rename = "fecha")]
    pub date: String,
    #[serde(rename = "idOdontologo")]
    #[sqlx(rename = "id_odontologo")]
    pub dentist_id: String,
    #[serde(rename = "idPaciente")]
    #[sqlx(rename = "id_paciente")]
    pub patient_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppointmentPatch {
    #[serde(rename = "descripcionTurno")]
    pub description: Option<String>,
    #[serde(rename = "fechaTurno")]
    pub date: Option<String>,
    #[serde(rename = "idOdontologo")]
    pub dentist_id: Option<String>,
    #[serde(rename = "idPaciente")]
    pub patient_id: Option<String>,
}

#[async_trait]
impl Resource for Appointment {
    type Entity = Appointment;
    type Patch = AppointmentPatch;

    const NAME: &'static str = "appointment";

    fn validate(entity: &Appointment) -> Result<(), ValidationError> {
        if entity.description.is_empty()
            || entity.date.is_empty()
            || entity.dentist_id.is_empty()
            || entity.patient_id.is_empty()
        {
            return Err(ValidationError(Self::NAME));
        }
        Ok(())
    }

    fn merge(mut current: Appointment, patch: AppointmentPatch) -> Appointment {
        if let Some(description) = patch.description {
            current.description = description;
        }
        if let Some(date) = patch.date {
            current.date = date;
        }
        if let Some(dentist_id) = patch.dentist_id {
            current.dentist_id = dentist_id;
        }
        if let Some(patient_id) = patch.patient_id {
            current.patient_id = patient_id;
        }
        current
    }

    async fn insert(store: &SqlStore, entity: Appointment) -> Result<Appointment, sqlx::Error> {
        store.create_appointment(entity).await
    }

    async fn fetch(store: &SqlStore, id: i64) -> Result<Appointment, sqlx::Error> {
        store.read_appointment(id).await
    }

    async fn persist(
        store: &SqlStore,
        id: i64,
        entity: Appointment,
    ) -> Result<Appointment, sqlx::Error> {
        store.update_appointment(id, entity).await
    }

    async fn remove(store: &SqlStore, id: i64) -> Result<(), sqlx::Error> {
        store.delete_appointment(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaning() -> Appointment {
        Appointment {
            id: 9,
            description: "Limpieza".into(),
            date: "2024-03-01 10:30".into(),
            dentist_id: "1".into(),
            patient_id: "4".into(),
        }
    }

    #[test]
    fn validate_requires_every_field() {
        assert!(Appointment::validate(&cleaning()).is_ok());

        let mut no_dentist = cleaning();
        no_dentist.dentist_id.clear();
        assert!(Appointment::validate(&no_dentist).is_err());
    }

    #[test]
    fn merge_can_reschedule_without_touching_references() {
        let patch = AppointmentPatch {
            date: Some("2024-03-08 09:00".into()),
            ..Default::default()
        };
        let merged = Appointment::merge(cleaning(), patch);
        assert_eq!(merged.date, "2024-03-08 09:00");
        assert_eq!(merged.dentist_id, "1");
        assert_eq!(merged.patient_id, "4");
    }

    #[test]
    fn references_stay_untyped_strings_on_the_wire() {
        let json = serde_json::to_value(cleaning()).unwrap();
        assert_eq!(json["idOdontologo"], "1");
        assert_eq!(json["idPaciente"], "4");
    }
}
