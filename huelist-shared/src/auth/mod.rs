/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: PBKDF2-SHA256 password hashing and verification
///
/// Passwords are stored only as salted one-way hashes in PHC string format.
/// Verification re-derives the hash and compares in constant time.
///
/// # Example
///
/// ```
/// use huelist_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
/// # Ok(())
/// # }
/// ```

pub mod password;
