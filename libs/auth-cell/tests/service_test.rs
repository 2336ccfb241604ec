use assert_matches::assert_matches;

use auth_cell::models::{LoginOutcome, RegistrationOutcome};
use auth_cell::services::AuthService;
use shared_database::Database;
use shared_models::auth::{AuthenticationRequest, RegisterUserRequest};
use shared_utils::jwt::validate_token;
use shared_utils::test_utils::TestConfig;

fn registration(user_name: &str, email: &str, password: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        user_name: user_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        first_name: Some("Front".to_string()),
        last_name: Some("Desk".to_string()),
    }
}

fn login(user_name: &str, password: &str) -> AuthenticationRequest {
    AuthenticationRequest {
        user_name: user_name.to_string(),
        password: password.to_string(),
    }
}

async fn service() -> AuthService {
    let db = Database::in_memory().await.unwrap();
    AuthService::new(&db, TestConfig::default().to_arc())
}

#[tokio::test]
async fn test_register_then_login() {
    let service = service().await;

    assert_eq!(
        service.register_user(registration("reception", "desk@clinic.test", "Desk#2024")).await,
        RegistrationOutcome::Registered("reception".to_string())
    );

    assert_eq!(
        service.validate_login(&login("reception", "Desk#2024")).await,
        LoginOutcome::Authenticated("desk@clinic.test".to_string())
    );
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_look_the_same() {
    let service = service().await;
    let _ = service.register_user(registration("reception", "desk@clinic.test", "Desk#2024")).await;

    assert_eq!(service.validate_login(&login("reception", "desk#2024")).await, LoginOutcome::InvalidCredentials);
    assert_eq!(service.validate_login(&login("nobody", "Desk#2024")).await, LoginOutcome::InvalidCredentials);
}

#[tokio::test]
async fn test_weak_password_is_rejected_with_reasons() {
    let service = service().await;

    let reasons = assert_matches!(
        service.register_user(registration("reception", "desk@clinic.test", "password")).await,
        RegistrationOutcome::Rejected(reasons) => reasons
    );
    assert_eq!(reasons.len(), 3);

    assert_eq!(service.validate_login(&login("reception", "password")).await, LoginOutcome::InvalidCredentials);
}

#[tokio::test]
async fn test_duplicate_user_name_and_email_are_rejected() {
    let service = service().await;
    let _ = service.register_user(registration("reception", "desk@clinic.test", "Desk#2024")).await;

    let reasons = assert_matches!(
        service.register_user(registration("reception", "DESK@clinic.test", "Other#2024")).await,
        RegistrationOutcome::Rejected(reasons) => reasons
    );
    assert_eq!(
        reasons,
        vec![
            "Username 'reception' is already taken.".to_string(),
            "Email 'DESK@clinic.test' is already taken.".to_string(),
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_simultaneous_registrations_of_one_name_admit_exactly_one() {
    let db = Database::in_memory().await.unwrap();
    let config = TestConfig::default().to_arc();

    let mut handles = Vec::new();
    for i in 0..4 {
        let service = AuthService::new(&db, config.clone());
        handles.push(tokio::spawn(async move {
            service
                .register_user(registration("reception", &format!("desk{}@clinic.test", i), "Desk#2024"))
                .await
        }));
    }

    let mut registered = 0;
    for handle in handles {
        match handle.await.unwrap() {
            RegistrationOutcome::Registered(_) => registered += 1,
            RegistrationOutcome::Rejected(_) => {}
            RegistrationOutcome::Error => panic!("registration failed"),
        }
    }
    assert_eq!(registered, 1);

    let service = AuthService::new(&db, config);
    assert_matches!(service.validate_login(&login("reception", "Desk#2024")).await, LoginOutcome::Authenticated(_));
}

#[tokio::test]
async fn test_created_token_validates_for_user() {
    let service = service().await;
    let config = TestConfig::default().to_app_config();

    let response = service.create_token("reception", "desk@clinic.test").unwrap();
    assert!(response.expiration > chrono::Utc::now());

    let user = validate_token(&response.token, &config).unwrap();
    assert_eq!(user.id, "reception");
    assert_eq!(user.email.as_deref(), Some("desk@clinic.test"));
}
