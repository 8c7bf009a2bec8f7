use crate::errors::{ServiceError, ServiceResult, DomainError};
use argon2::{Argon2, PasswordHash, PasswordVerifier, PasswordHasher, password_hash::SaltString};
// Use the older rand version for compatibility with argon2
use rand_core::OsRng as ArgonOsRng;

/// Generate a salted Argon2 hash (PHC string) for a password
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let mut rng = ArgonOsRng;
    let salt = SaltString::generate(&mut rng);

    let password_hash = Argon2::default().hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::Domain(DomainError::Internal(format!("Failed to hash password: {}", e))))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored hash. A hash that does not parse
/// never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => {
            log::warn!("Stored password hash has an invalid format");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter22").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, "hunter22");
        assert!(verify_password("hunter22", &hash));
        assert!(!verify_password("hunter23", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_plain_text_never_verifies() {
        assert!(!verify_password("secret", "secret"));
    }
}
