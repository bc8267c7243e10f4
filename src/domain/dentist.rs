use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::{Resource, ValidationError};
use crate::store::SqlStore;

/// A practicing dentist (odontólogo) identified by license number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Dentist {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombreOdontologo")]
    #[sqlx(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidoOdontologo")]
    #[sqlx(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "matriculaOdontologo")]
    #[sqlx(rename = "matricula")]
    pub license_number: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DentistPatch {
    #[serde(rename = "nombreOdontologo")]
    pub first_name: Option<String>,
    #[serde(rename = "apellidoOdontologo")]
    pub last_name: Option<String>,
    #[serde(rename = "matriculaOdontologo")]
    pub license_number: Option<String>,
}

#[async_trait]
impl Resource for Dentist {
    type Entity = Dentist;
    type Patch = DentistPatch;

    const NAME: &'static str = "dentist";

    fn validate(entity: &Dentist) -> Result<(), ValidationError> {
        if entity.first_name.is_empty()
            || entity.last_name.is_empty()
            || entity.license_number.is_empty()
        {
            return Err(ValidationError(Self::NAME));
        }
        Ok(())
    }

    fn merge(mut current: Dentist, patch: DentistPatch) -> Dentist {
        if let Some(first_name) = patch.first_name {
            current.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            current.last_name = last_name;
        }
        if let Some(license_number) = patch.license_number {
            current.license_number = license_number;
        }
        current
    }

    async fn insert(store: &SqlStore, entity: Dentist) -> Result<Dentist, sqlx::Error> {
        store.create_dentist(entity).await
    }

    async fn fetch(store: &SqlStore, id: i64) -> Result<Dentist, sqlx::Error> {
        store.read_dentist(id).await
    }

    async fn persist(store: &SqlStore, id: i64, entity: Dentist) -> Result<Dentist, sqlx::Error> {
        store.update_dentist(id, entity).await
    }

    async fn remove(store: &SqlStore, id: i64) -> Result<(), sqlx::Error> {
        store.delete_dentist(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Dentist {
        Dentist {
            id: 1,
            first_name: "Ana".into(),
            last_name: "Diaz".into(),
            license_number: "M123".into(),
        }
    }

    #[test]
    fn validate_rejects_empty_required_fields() {
        assert!(Dentist::validate(&ana()).is_ok());

        let mut missing_license = ana();
        missing_license.license_number.clear();
        assert!(Dentist::validate(&missing_license).is_err());
    }

    #[test]
    fn merge_keeps_fields_absent_from_the_patch() {
        let patch = DentistPatch {
            first_name: Some("Ana Maria".into()),
            ..Default::default()
        };
        let merged = Dentist::merge(ana(), patch);
        assert_eq!(merged.first_name, "Ana Maria");
        assert_eq!(merged.last_name, "Diaz");
        assert_eq!(merged.license_number, "M123");
    }

    #[test]
    fn merge_overwrites_with_explicit_empty_string() {
        let patch = DentistPatch {
            last_name: Some(String::new()),
            ..Default::default()
        };
        let merged = Dentist::merge(ana(), patch);
        assert_eq!(merged.last_name, "");
    }

    #[test]
    fn wire_names_are_spanish_camel_case() {
        let json = serde_json::to_value(ana()).unwrap();
        assert_eq!(json["nombreOdontologo"], "Ana");
        assert_eq!(json["apellidoOdontologo"], "Diaz");
        assert_eq!(json["matriculaOdontologo"], "M123");

        // Create payloads carry no id; it defaults until the store assigns one.
        let parsed: Dentist = serde_json::from_value(serde_json::json!({
            "nombreOdontologo": "Ana",
            "apellidoOdontologo": "Diaz",
            "matriculaOdontologo": "M123",
        }))
        .unwrap();
        assert_eq!(parsed.id, 0);
    }
}
