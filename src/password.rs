use thiserror::Error;

// Work factor embedded in every hash this tool produces. Deliberately
// pinned rather than taking bcrypt::DEFAULT_COST so existing hashes in
// the database stay comparable.
pub const COST: u32 = 10;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("not a valid bcrypt hash")]
    MalformedHash,
    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),
}

// Hash password
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    if password.trim().is_empty() {
        return Err(PasswordError::EmptyPassword);
    }
    Ok(bcrypt::hash(password, COST)?)
}

// Verify password against a bcrypt hash. The hash is trimmed first;
// copy/paste from a database column tends to pick up stray whitespace.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(password, hash.trim()).map_err(|_| PasswordError::MalformedHash)
}
