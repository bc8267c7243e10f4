//! SQL-backed storage adapter.
//!
//! One method set per entity against a shared connection pool. Statements
//! run without transaction wrapping or retries; any failure surfaces as the
//! driver error with no further classification. The schema these statements
//! assume is shipped in `schema.sql` at the repository root.

use sqlx::PgPool;

use crate::domain::{Appointment, Dentist, Patient};

#[derive(Clone)]
pub struct SqlStore {
    pool: PgPool,
}

impl SqlStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // odontologos

    pub async fn create_dentist(&self, mut dentist: Dentist) -> Result<Dentist, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO odontologos (nombre, apellido, matricula) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&dentist.first_name)
        .bind(&dentist.last_name)
        .bind(&dentist.license_number)
        .fetch_one(&self.pool)
        .await?;

        dentist.id = id;
        Ok(dentist)
    }

    pub async fn read_dentist(&self, id: i64) -> Result<Dentist, sqlx::Error> {
        sqlx::query_as("SELECT id, nombre, apellido, matricula FROM odontologos WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn update_dentist(&self, id: i64, mut dentist: Dentist) -> Result<Dentist, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE odontologos SET nombre = $1, apellido = $2, matricula = $3 WHERE id = $4",
        )
        .bind(&dentist.first_name)
        .bind(&dentist.last_name)
        .bind(&dentist.license_number)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        dentist.id = id;
        Ok(dentist)
    }

    pub async fn delete_dentist(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM odontologos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }

    // pacientes

    pub async fn create_patient(&self, mut patient: Patient) -> Result<Patient, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO pacientes (nombre, apellido, domicilio, dni, fecha_de_alta) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&patient.first_name)
        .bind(&patient.last_name)
        .bind(&patient.address)
        .bind(&patient.national_id)
        .bind(&patient.admission_date)
        .fetch_one(&self.pool)
        .await?;

        patient.id = id;
        Ok(patient)
    }

    pub async fn read_patient(&self, id: i64) -> Result<Patient, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, nombre, apellido, domicilio, dni, fecha_de_alta \
             FROM pacientes WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_patient(&self, id: i64, mut patient: Patient) -> Result<Patient, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE pacientes SET nombre = $1, apellido = $2, domicilio = $3, dni = $4, \
             fecha_de_alta = $5 WHERE id = $6",
        )
        .bind(&patient.first_name)
        .bind(&patient.last_name)
        .bind(&patient.address)
        .bind(&patient.national_id)
        .bind(&patient.admission_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        patient.id = id;
        Ok(patient)
    }

    pub async fn delete_patient(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM pacientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }

    // turnos

    pub async fn create_appointment(
        &self,
        mut appointment: Appointment,
    ) -> Result<Appointment, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO turnos (descripcion, fecha, id_odontologo, id_paciente) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&appointment.description)
        .bind(&appointment.date)
        .bind(&appointment.dentist_id)
        .bind(&appointment.patient_id)
        .fetch_one(&self.pool)
        .await?;

        appointment.id = id;
        Ok(appointment)
    }

    pub async fn read_appointment(&self, id: i64) -> Result<Appointment, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, descripcion, fecha, id_odontologo, id_paciente FROM turnos WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_appointment(
        &self,
        id: i64,
        mut appointment: Appointment,
    ) -> Result<Appointment, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE turnos SET descripcion = $1, fecha = $2, id_odontologo = $3, \
             id_paciente = $4 WHERE id = $5",
        )
        .bind(&appointment.description)
        .bind(&appointment.date)
        .bind(&appointment.dentist_id)
        .bind(&appointment.patient_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        appointment.id = id;
        Ok(appointment)
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM turnos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
