use crate::models::{Patient, PatientRecord};

impl From<PatientRecord> for Patient {
    fn from(record: PatientRecord) -> Self {
        Self {
            patient_id: Some(record.patient_id),
            patient_name: record.patient_name,
            age: record.age,
            gender: record.gender,
            contact_number: record.contact_number,
        }
    }
}

impl Patient {
    /// Storage form of this patient under `patient_id`.
    pub fn into_record(self, patient_id: String) -> PatientRecord {
        PatientRecord {
            patient_id,
            patient_name: self.patient_name,
            age: self.age,
            gender: self.gender,
            contact_number: self.contact_number,
        }
    }
}
