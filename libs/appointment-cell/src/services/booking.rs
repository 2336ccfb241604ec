use tracing::{debug, error, info, instrument, warn};

use doctor_cell::repository as doctors;
use patient_cell::repository as patients;
use shared_database::{Database, StoreError};
use shared_models::outcome::{FetchOutcome, ListOutcome};

use crate::models::{Appointment, BookingOutcome, CancelOutcome, NewAppointmentRecord};
use crate::repository;
use crate::services::conflict::has_conflict;

pub struct AppointmentBookingService {
    db: Database,
}

impl AppointmentBookingService {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    #[instrument(skip(self))]
    pub async fn get_all_appointments(&self) -> ListOutcome<Appointment> {
        let result: Result<_, StoreError> = async {
            let mut conn = self.db.acquire().await?;
            repository::list_all_with_names(&mut conn).await
        }
        .await;

        match result {
            Ok(records) => ListOutcome::Listed(records.into_iter().map(Appointment::from).collect()),
            Err(e) => {
                error!("Failed to list appointments: {}", e);
                ListOutcome::Error
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_appointment(&self, appointment_no: i64) -> FetchOutcome<Appointment> {
        let result: Result<_, StoreError> = async {
            let mut conn = self.db.acquire().await?;
            repository::find_with_names(&mut conn, appointment_no).await
        }
        .await;

        match result {
            Ok(record) => record.map(Appointment::from).into(),
            Err(e) => {
                error!("Failed to load appointment {}: {}", appointment_no, e);
                FetchOutcome::Error
            }
        }
    }

    /// Book after checking that both participants exist and that neither is
    /// already booked on the date. The checks and the insert share one write
    /// transaction; store constraint violations map onto the same outcomes.
    #[instrument(skip(self, appointment), fields(
        patient_id = %appointment.patient_id,
        doctor_id = %appointment.doctor_id,
        date = %appointment.date_of_appointment
    ))]
    pub async fn book_appointment(&self, appointment: Appointment) -> BookingOutcome {
        let record = NewAppointmentRecord::from(&appointment);

        match self.try_book(&record).await {
            Ok(BookingOutcome::Created(appointment_no)) => {
                info!("Appointment {} booked", appointment_no);
                BookingOutcome::Created(appointment_no)
            }
            Ok(outcome) => outcome,
            Err(StoreError::UniqueViolation(message)) => {
                warn!("Store refused duplicate booking: {}", message);
                BookingOutcome::Conflict
            }
            Err(StoreError::ForeignKeyViolation(message)) => {
                warn!("Store refused booking with unknown participant: {}", message);
                BookingOutcome::InvalidReference
            }
            Err(e) => {
                error!("Failed to book appointment: {}", e);
                BookingOutcome::Error
            }
        }
    }

    async fn try_book(&self, record: &NewAppointmentRecord) -> Result<BookingOutcome, StoreError> {
        let mut tx = self.db.begin_write().await?;

        let patient_exists = patients::exists(tx.conn(), &record.patient_id).await?;
        let doctor_exists = doctors::exists(tx.conn(), &record.doctor_id).await?;
        if !patient_exists || !doctor_exists {
            debug!("Unknown participant (patient: {}, doctor: {})", patient_exists, doctor_exists);
            return Ok(BookingOutcome::InvalidReference);
        }

        let same_day = repository::find_on_date(tx.conn(), record.date_of_appointment).await?;
        if has_conflict(&record.doctor_id, &record.patient_id, record.date_of_appointment, &same_day) {
            debug!("{} appointments already on {}", same_day.len(), record.date_of_appointment);
            return Ok(BookingOutcome::Conflict);
        }

        let appointment_no = repository::insert(tx.conn(), record).await?;
        tx.commit().await?;

        Ok(BookingOutcome::Created(appointment_no))
    }

    #[instrument(skip(self))]
    pub async fn cancel_appointment(&self, appointment_no: i64) -> CancelOutcome {
        let result: Result<_, StoreError> = async {
            let mut tx = self.db.begin_write().await?;
            let rows = repository::delete(tx.conn(), appointment_no).await?;
            tx.commit().await?;
            Ok(rows)
        }
        .await;

        match result {
            Ok(0) => {
                debug!("Appointment {} does not exist", appointment_no);
                CancelOutcome::NotFound
            }
            Ok(_) => {
                info!("Appointment {} cancelled", appointment_no);
                CancelOutcome::Removed
            }
            Err(e) => {
                error!("Failed to cancel appointment {}: {}", appointment_no, e);
                CancelOutcome::Error
            }
        }
    }
}
