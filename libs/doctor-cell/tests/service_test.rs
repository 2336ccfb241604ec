use assert_matches::assert_matches;

use doctor_cell::models::Doctor;
use doctor_cell::services::DoctorService;
use shared_database::Database;
use shared_models::outcome::{CreateOutcome, FetchOutcome, ListOutcome, RemoveOutcome, UpdateOutcome};

fn doctor(name: &str, fees: f64) -> Doctor {
    Doctor {
        doctor_id: None,
        doctor_name: name.to_string(),
        specialization: "General Medicine".to_string(),
        fees,
    }
}

#[tokio::test]
async fn test_add_and_fetch_doctor() {
    let db = Database::in_memory().await.unwrap();
    let service = DoctorService::new(&db);

    assert_eq!(service.add_doctor(doctor("Dr. Rao", 500.0)).await, CreateOutcome::Created("D1".to_string()));

    let found = assert_matches!(service.get_doctor_by_id("D1").await, FetchOutcome::Found(d) => d);
    assert_eq!(found.doctor_name, "Dr. Rao");
    assert_eq!(found.fees, 500.0);

    assert_eq!(service.get_doctor_by_id("D2").await, FetchOutcome::NotFound);
}

#[tokio::test]
async fn test_ids_follow_highest_existing_doctor() {
    let db = Database::in_memory().await.unwrap();
    sqlx::query("INSERT INTO doctors (doctor_id, doctor_name, specialization, fees) VALUES ('D41', 'Dr. Imported', 'ENT', 250)")
        .execute(db.pool())
        .await
        .unwrap();

    let service = DoctorService::new(&db);
    assert_eq!(service.add_doctor(doctor("Dr. Sen", 300.0)).await, CreateOutcome::Created("D42".to_string()));
}

#[tokio::test]
async fn test_unparseable_existing_id_aborts_without_insert() {
    let db = Database::in_memory().await.unwrap();
    sqlx::query("INSERT INTO doctors (doctor_id, doctor_name, specialization, fees) VALUES ('Dx', 'Dr. Legacy', 'ENT', 250)")
        .execute(db.pool())
        .await
        .unwrap();

    let service = DoctorService::new(&db);
    assert_eq!(service.add_doctor(doctor("Dr. Sen", 300.0)).await, CreateOutcome::Error);

    let doctors = assert_matches!(service.get_all_doctors().await, ListOutcome::Listed(d) => d);
    assert_eq!(doctors.len(), 1);
}

#[tokio::test]
async fn test_update_fees() {
    let db = Database::in_memory().await.unwrap();
    let service = DoctorService::new(&db);
    let _ = service.add_doctor(doctor("Dr. Rao", 500.0)).await;

    assert_eq!(service.update_doctor_fees("D1", 750.0).await, UpdateOutcome::Updated);
    assert_eq!(service.update_doctor_fees("D3", 750.0).await, UpdateOutcome::NotFound);

    let found = service.get_doctor_by_id("D1").await.found().unwrap();
    assert_eq!(found.fees, 750.0);
}

#[tokio::test]
async fn test_fee_below_floor_is_refused_by_store() {
    let db = Database::in_memory().await.unwrap();
    let service = DoctorService::new(&db);
    let _ = service.add_doctor(doctor("Dr. Rao", 500.0)).await;

    assert_eq!(service.update_doctor_fees("D1", 50.0).await, UpdateOutcome::Error);
}

#[tokio::test]
async fn test_remove_doctor() {
    let db = Database::in_memory().await.unwrap();
    let service = DoctorService::new(&db);
    let _ = service.add_doctor(doctor("Dr. Rao", 500.0)).await;
    let _ = service.add_doctor(doctor("Dr. Sen", 400.0)).await;

    sqlx::query("INSERT INTO patients (patient_id, patient_name, age, gender, contact_number) VALUES ('P1', 'Asha Verma', 30, 'F', '9876543210')")
        .execute(db.pool())
        .await
        .unwrap();
    sqlx::query("INSERT INTO appointments (patient_id, doctor_id, date_of_appointment) VALUES ('P1', 'D2', '2024-01-10')")
        .execute(db.pool())
        .await
        .unwrap();

    assert_eq!(service.remove_doctor("D1").await, RemoveOutcome::Removed);
    assert_eq!(service.remove_doctor("D1").await, RemoveOutcome::NotFound);
    assert_eq!(service.remove_doctor("D2").await, RemoveOutcome::InUse);
}
