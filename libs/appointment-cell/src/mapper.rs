//! Conversions between appointment rows and the API shape. Names are only
//! carried on the read path; the foreign keys already identify both parties.

use crate::models::{Appointment, AppointmentDetailsRecord, AppointmentRecord, NewAppointmentRecord};

impl From<AppointmentDetailsRecord> for Appointment {
    fn from(record: AppointmentDetailsRecord) -> Self {
        Self {
            appointment_no: Some(record.appointment_no),
            patient_id: record.patient_id,
            doctor_id: record.doctor_id,
            date_of_appointment: record.date_of_appointment,
            doctor_name: Some(record.doctor_name),
            patient_name: Some(record.patient_name),
        }
    }
}

impl From<AppointmentRecord> for Appointment {
    fn from(record: AppointmentRecord) -> Self {
        Self {
            appointment_no: Some(record.appointment_no),
            patient_id: record.patient_id,
            doctor_id: record.doctor_id,
            date_of_appointment: record.date_of_appointment,
            doctor_name: None,
            patient_name: None,
        }
    }
}

impl From<&Appointment> for NewAppointmentRecord {
    fn from(appointment: &Appointment) -> Self {
        Self {
            patient_id: appointment.patient_id.trim().to_string(),
            doctor_id: appointment.doctor_id.trim().to_string(),
            date_of_appointment: appointment.date_of_appointment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_read_path_carries_names() {
        let appointment = Appointment::from(AppointmentDetailsRecord {
            appointment_no: 3,
            patient_id: "P1".to_string(),
            doctor_id: "D1".to_string(),
            date_of_appointment: date(),
            patient_name: "Asha Verma".to_string(),
            doctor_name: "Dr. Rao".to_string(),
        });

        assert_eq!(appointment.appointment_no, Some(3));
        assert_eq!(appointment.doctor_name.as_deref(), Some("Dr. Rao"));
        assert_eq!(appointment.patient_name.as_deref(), Some("Asha Verma"));
    }

    #[test]
    fn test_write_path_drops_names_and_number() {
        let appointment = Appointment {
            appointment_no: Some(9),
            patient_id: "P1".to_string(),
            doctor_id: "D1".to_string(),
            date_of_appointment: date(),
            doctor_name: Some("Dr. Rao".to_string()),
            patient_name: Some("Asha Verma".to_string()),
        };

        assert_eq!(
            NewAppointmentRecord::from(&appointment),
            NewAppointmentRecord {
                patient_id: "P1".to_string(),
                doctor_id: "D1".to_string(),
                date_of_appointment: date(),
            }
        );
    }

    #[test]
    fn test_stored_row_round_trip() {
        let record = AppointmentRecord {
            appointment_no: 5,
            patient_id: "P2".to_string(),
            doctor_id: "D4".to_string(),
            date_of_appointment: date(),
        };

        let appointment = Appointment::from(record.clone());
        let new_record = NewAppointmentRecord::from(&appointment);

        assert_eq!(appointment.appointment_no, Some(record.appointment_no));
        assert_eq!(new_record.patient_id, record.patient_id);
        assert_eq!(new_record.doctor_id, record.doctor_id);
        assert_eq!(new_record.date_of_appointment, record.date_of_appointment);
    }
}
