use serde::{Deserialize, Serialize};

use shared_database::StoreError;
use shared_models::error::AppError;
use shared_utils::id_generator::IdGenerationError;
use shared_utils::validation::{is_valid_age, is_valid_gender, is_valid_phone, FieldErrors};

pub const PATIENT_ID_PREFIX: char = 'P';

/// Row as stored in `patients`.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PatientRecord {
    pub patient_id: String,
    pub patient_name: String,
    pub age: i64,
    pub gender: String,
    pub contact_number: String,
}

/// Patient as exchanged with API clients. The id is assigned on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default)]
    pub patient_id: Option<String>,
    pub patient_name: String,
    pub age: i64,
    pub gender: String,
    pub contact_number: String,
}

impl Patient {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors
            .length("patient_name", &self.patient_name, 3, 40)
            .check(is_valid_age(self.age), "Age should be between 1 and 130")
            .check(is_valid_gender(&self.gender), "Gender can only be either M or F")
            .check(is_valid_phone(&self.contact_number), "Contact number is not a valid phone number");
        errors.into_result()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Could not generate patient id: {0}")]
    IdGeneration(#[from] IdGenerationError),
}
