use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::{Resource, ValidationError};
use crate::store::SqlStore;

/// A registered patient (paciente). The admission date travels as an opaque
/// string; the API does not parse or validate it as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Patient {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombrePaciente")]
    #[sqlx(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidoPaciente")]
    #[sqlx(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "domicilioPaciente")]
    #[sqlx(rename = "domicilio")]
    pub address: String,
    #[serde(rename = "dniPaciente")]
    #[sqlx(rename = "dni")]
    pub national_id: String,
    #[serde(rename = "fechaDeAltaPaciente")]
    #[sqlx(rename = "fecha_de_alta")]
    pub admission_date: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatientPatch {
    #[serde(rename = "nombrePaciente")]
    pub first_name: Option<String>,
    #[serde(rename = "apellidoPaciente")]
    pub last_name: Option<String>,
    #[serde(rename = "domicilioPaciente")]
    pub address: Option<String>,
    #[serde(rename = "dniPaciente")]
    pub national_id: Option<String>,
    #[serde(rename = "fechaDeAltaPaciente")]
    pub admission_date: Option<String>,
}

#[async_trait]
impl Resource for Patient {
    type Entity = Patient;
    type Patch = PatientPatch;

    const NAME: &'static str = "patient";

    fn validate(entity: &Patient) -> Result<(), ValidationError> {
        if entity.first_name.is_empty()
            || entity.last_name.is_empty()
            || entity.address.is_empty()
            || entity.national_id.is_empty()
            || entity.admission_date.is_empty()
        {
            return Err(ValidationError(Self::NAME));
        }
        Ok(())
    }

    fn merge(mut current: Patient, patch: PatientPatch) -> Patient {
        if let Some(first_name) = patch.first_name {
            current.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            current.last_name = last_name;
        }
        if let Some(address) = patch.address {
            current.address = address;
        }
        if let Some(national_id) = patch.national_id {
            current.national_id = national_id;
        }
        if let Some(admission_date) = patch.admission_date {
            current.admission_date = admission_date;
        }
        current
    }

    async fn insert(store: &SqlStore, entity: Patient) -> Result<Patient, sqlx::Error> {
        store.create_patient(entity).await
    }

    async fn fetch(store: &SqlStore, id: i64) -> Result<Patient, sqlx::Error> {
        store.read_patient(id).await
    }

    async fn persist(store: &SqlStore, id: i64, entity: Patient) -> Result<Patient, sqlx::Error> {
        store.update_patient(id, entity).await
    }

    async fn remove(store: &SqlStore, id: i64) -> Result<(), sqlx::Error> {
        store.delete_patient(id).await
    }
}
