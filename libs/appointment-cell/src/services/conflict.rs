use chrono::NaiveDate;

use crate::models::AppointmentRecord;

/// True when any existing appointment on `date` involves the same doctor or
/// the same patient. Either participant alone is enough to block the booking.
pub fn has_conflict(
    doctor_id: &str,
    patient_id: &str,
    date: NaiveDate,
    existing: &[AppointmentRecord],
) -> bool {
    existing.iter().any(|appointment| {
        appointment.date_of_appointment == date
            && (appointment.doctor_id == doctor_id || appointment.patient_id == patient_id)
    })
}
