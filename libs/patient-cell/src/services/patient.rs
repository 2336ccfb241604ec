use tracing::{debug, error, info, instrument};

use shared_database::{Database, StoreError};
use shared_models::outcome::{CreateOutcome, FetchOutcome, ListOutcome, RemoveOutcome, UpdateOutcome};
use shared_utils::id_generator::next_id;

use crate::models::{Patient, PatientError, PATIENT_ID_PREFIX};
use crate::repository;

pub struct PatientService {
    db: Database,
}

impl PatientService {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    #[instrument(skip(self))]
    pub async fn get_all_patients(&self) -> ListOutcome<Patient> {
        let result: Result<_, StoreError> = async {
            let mut conn = self.db.acquire().await?;
            repository::list_all(&mut conn).await
        }
        .await;

        match result {
            Ok(records) => {
                debug!("Loaded {} patients", records.len());
                ListOutcome::Listed(records.into_iter().map(Patient::from).collect())
            }
            Err(e) => {
                error!("Failed to list patients: {}", e);
                ListOutcome::Error
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_patient_by_id(&self, patient_id: &str) -> FetchOutcome<Patient> {
        let result: Result<_, StoreError> = async {
            let mut conn = self.db.acquire().await?;
            repository::find_by_id(&mut conn, patient_id).await
        }
        .await;

        match result {
            Ok(record) => record.map(Patient::from).into(),
            Err(e) => {
                error!("Failed to load patient {}: {}", patient_id, e);
                FetchOutcome::Error
            }
        }
    }

    /// Assign the next `P<n>` id and insert. Id generation and insert share one
    /// write transaction; any failure leaves the store untouched.
    #[instrument(skip(self, patient), fields(patient_name = %patient.patient_name))]
    pub async fn add_patient(&self, patient: Patient) -> CreateOutcome<String> {
        match self.insert_with_next_id(patient).await {
            Ok(patient_id) => {
                info!("Added patient {}", patient_id);
                CreateOutcome::Created(patient_id)
            }
            Err(e) => {
                error!("Failed to add patient: {}", e);
                CreateOutcome::Error
            }
        }
    }

    async fn insert_with_next_id(&self, patient: Patient) -> Result<String, PatientError> {
        let mut tx = self.db.begin_write().await?;

        let existing = repository::list_ids(tx.conn()).await?;
        let patient_id = next_id(PATIENT_ID_PREFIX, &existing)?;

        let record = patient.into_record(patient_id.clone());
        repository::insert(tx.conn(), &record).await?;
        tx.commit().await?;

        Ok(patient_id)
    }

    /// Age must already be within range; the API layer checks it.
    #[instrument(skip(self))]
    pub async fn update_patient_age(&self, patient_id: &str, age: i64) -> UpdateOutcome {
        let result: Result<_, StoreError> = async {
            let mut tx = self.db.begin_write().await?;
            let rows = repository::update_age(tx.conn(), patient_id, age).await?;
            tx.commit().await?;
            Ok(rows)
        }
        .await;

        match result {
            Ok(rows) => UpdateOutcome::from_rows_affected(rows),
            Err(e) => {
                error!("Failed to update age of patient {}: {}", patient_id, e);
                UpdateOutcome::Error
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_patient(&self, patient_id: &str) -> RemoveOutcome {
        let result: Result<_, StoreError> = async {
            let mut tx = self.db.begin_write().await?;
            let rows = repository::delete(tx.conn(), patient_id).await?;
            tx.commit().await?;
            Ok(rows)
        }
        .await;

        match result {
            Ok(rows) => RemoveOutcome::from_rows_affected(rows),
            Err(StoreError::ForeignKeyViolation(_)) => {
                debug!("Patient {} still has appointments", patient_id);
                RemoveOutcome::InUse
            }
            Err(e) => {
                error!("Failed to remove patient {}: {}", patient_id, e);
                RemoveOutcome::Error
            }
        }
    }
}
