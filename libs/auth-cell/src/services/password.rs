use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, SaltString};
use tracing::instrument;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct PasswordService;

impl PasswordService {
    #[instrument(skip(password))]
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    #[instrument(skip(password, hash))]
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Every rule the password breaks. Empty means acceptable.
    pub fn policy_violations(password: &str) -> Vec<String> {
        let mut issues = Vec::new();

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            issues.push(format!("Passwords must be at least {} characters.", MIN_PASSWORD_LENGTH));
        }
        if !password.chars().any(|c| !c.is_alphanumeric()) {
            issues.push("Passwords must have at least one non alphanumeric character.".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            issues.push("Passwords must have at least one digit ('0'-'9').".to_string());
        }
        if !password.chars().any(|c| c.is_lowercase()) {
            issues.push("Passwords must have at least one lowercase ('a'-'z').".to_string());
        }
        if !password.chars().any(|c| c.is_uppercase()) {
            issues.push("Passwords must have at least one uppercase ('A'-'Z').".to_string());
        }

        issues
    }
}
