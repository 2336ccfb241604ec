use crate::models::{Doctor, DoctorRecord};

impl From<DoctorRecord> for Doctor {
    fn from(record: DoctorRecord) -> Self {
        Self {
            doctor_id: Some(record.doctor_id),
            doctor_name: record.doctor_name,
            specialization: record.specialization,
            fees: record.fees,
        }
    }
}

impl Doctor {
    pub fn into_record(self, doctor_id: String) -> DoctorRecord {
        DoctorRecord {
            doctor_id,
            doctor_name: self.doctor_name,
            specialization: self.specialization,
            fees: self.fees,
        }
    }
}
