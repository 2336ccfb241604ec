use tracing::{debug, error, info, instrument};

use shared_database::{Database, StoreError};
use shared_models::outcome::{CreateOutcome, FetchOutcome, ListOutcome, RemoveOutcome, UpdateOutcome};
use shared_utils::id_generator::next_id;

use crate::models::{Doctor, DoctorError, DOCTOR_ID_PREFIX};
use crate::repository;

pub struct DoctorService {
    db: Database,
}

impl DoctorService {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    #[instrument(skip(self))]
    pub async fn get_all_doctors(&self) -> ListOutcome<Doctor> {
        let result: Result<_, StoreError> = async {
            let mut conn = self.db.acquire().await?;
            repository::list_all(&mut conn).await
        }
        .await;

        match result {
            Ok(records) => ListOutcome::Listed(records.into_iter().map(Doctor::from).collect()),
            Err(e) => {
                error!("Failed to list doctors: {}", e);
                ListOutcome::Error
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_doctor_by_id(&self, doctor_id: &str) -> FetchOutcome<Doctor> {
        let result: Result<_, StoreError> = async {
            let mut conn = self.db.acquire().await?;
            repository::find_by_id(&mut conn, doctor_id).await
        }
        .await;

        match result {
            Ok(record) => record.map(Doctor::from).into(),
            Err(e) => {
                error!("Failed to load doctor {}: {}", doctor_id, e);
                FetchOutcome::Error
            }
        }
    }

    #[instrument(skip(self, doctor), fields(doctor_name = %doctor.doctor_name))]
    pub async fn add_doctor(&self, doctor: Doctor) -> CreateOutcome<String> {
        match self.insert_with_next_id(doctor).await {
            Ok(doctor_id) => {
                info!("Added doctor {}", doctor_id);
                CreateOutcome::Created(doctor_id)
            }
            Err(e) => {
                error!("Failed to add doctor: {}", e);
                CreateOutcome::Error
            }
        }
    }

    /// Fee must already be at or above the minimum; the API layer checks it.
    #[instrument(skip(self))]
    pub async fn update_doctor_fees(&self, doctor_id: &str, fees: f64) -> UpdateOutcome {
        let result: Result<_, StoreError> = async {
            let mut tx = self.db.begin_write().await?;
            let rows = repository::update_fees(tx.conn(), doctor_id, fees).await?;
            tx.commit().await?;
            Ok(rows)
        }
        .await;

        match result {
            Ok(rows) => UpdateOutcome::from_rows_affected(rows),
            Err(e) => {
                error!("Failed to update fees of doctor {}: {}", doctor_id, e);
                UpdateOutcome::Error
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_doctor(&self, doctor_id: &str) -> RemoveOutcome {
        let result: Result<_, StoreError> = async {
            let mut tx = self.db.begin_write().await?;
            let rows = repository::delete(tx.conn(), doctor_id).await?;
            tx.commit().await?;
            Ok(rows)
        }
        .await;

        match result {
            Ok(rows) => RemoveOutcome::from_rows_affected(rows),
            Err(StoreError::ForeignKeyViolation(_)) => {
                debug!("Doctor {} still has appointments", doctor_id);
                RemoveOutcome::InUse
            }
            Err(e) => {
                error!("Failed to remove doctor {}: {}", doctor_id, e);
                RemoveOutcome::Error
            }
        }
    }

    async fn insert_with_next_id(&self, doctor: Doctor) -> Result<String, DoctorError> {
        let mut tx = self.db.begin_write().await?;

        let existing = repository::list_ids(tx.conn()).await?;
        let doctor_id = next_id(DOCTOR_ID_PREFIX, &existing)?;

        repository::insert(tx.conn(), &doctor.into_record(doctor_id.clone())).await?;
        tx.commit().await?;

        Ok(doctor_id)
    }
}
