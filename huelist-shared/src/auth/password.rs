/// Password hashing module using PBKDF2-SHA256
///
/// Passwords are hashed with PBKDF2 over HMAC-SHA256 and stored in PHC string
/// format. The salt, iteration count, and digest parameters are embedded in the
/// stored hash, so verification needs no external configuration.
///
/// # Parameters
///
/// - **Algorithm**: PBKDF2 with HMAC-SHA256
/// - **Salt**: 8 random bytes from the OS RNG
/// - **Rounds**: 260,000 iterations
/// - **Output**: 32-byte derived key
///
/// # Example
///
/// ```
/// use huelist_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let password = "super_secret_password_123";
/// let hash = hash_password(password)?;
///
/// assert!(verify_password(password, &hash)?);
/// assert!(!verify_password("wrong_password", &hash)?);
/// # Ok(())
/// # }
/// ```

use pbkdf2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Params, Pbkdf2,
};
use rand::{rngs::OsRng, RngCore};

/// Salt length in bytes
pub const SALT_LEN: usize = 8;

/// PBKDF2 iteration count
pub const ROUNDS: u32 = 260_000;

/// Derived key length in bytes
const OUTPUT_LEN: usize = 32;

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a password using PBKDF2-SHA256 with a fresh 8-byte salt
///
/// # Returns
///
/// PHC string format hash (includes algorithm, rounds, salt, and hash), e.g.:
///
/// ```text
/// $pbkdf2-sha256$i=260000,l=32$c2FsdHNhbHQ$hash...
/// ```
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let mut salt_bytes = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| PasswordError::HashError(format!("Salt encoding failed: {}", e)))?;

    let params = Params {
        rounds: ROUNDS,
        output_length: OUTPUT_LEN,
    };

    // None algorithm/version selects the default pbkdf2-sha256 ident
    let password_hash = Pbkdf2
        .hash_password_customized(password.as_bytes(), None, None, params, &salt)
        .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verifies a password against a stored PHC hash
///
/// Re-derives the hash with the salt and parameters embedded in the stored
/// string and compares in constant time.
///
/// # Returns
///
/// `Ok(true)` if the password matches, `Ok(false)` if it does not
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the stored hash cannot be parsed,
/// `PasswordError::VerifyError` for any other verification failure.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Failed to parse hash: {}", e)))?;

    match Pbkdf2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(pbkdf2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(format!(
            "Verification failed: {}",
            e
        ))),
    }
}
