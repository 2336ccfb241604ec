use serde::{Deserialize, Serialize};

use shared_database::StoreError;
use shared_models::error::AppError;
use shared_utils::id_generator::IdGenerationError;
use shared_utils::validation::{is_valid_fee, FieldErrors, MIN_DOCTOR_FEES};

pub const DOCTOR_ID_PREFIX: char = 'D';

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct DoctorRecord {
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialization: String,
    pub fees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(default)]
    pub doctor_id: Option<String>,
    pub doctor_name: String,
    pub specialization: String,
    pub fees: f64,
}

impl Doctor {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors
            .length("doctor_name", &self.doctor_name, 1, 50)
            .length("specialization", &self.specialization, 1, 40)
            .check(is_valid_fee(self.fees), fee_message());
        errors.into_result()
    }
}

pub fn fee_message() -> String {
    format!("Fees should be at least {}", MIN_DOCTOR_FEES)
}

#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Could not generate doctor id: {0}")]
    IdGeneration(#[from] IdGenerationError),
}
