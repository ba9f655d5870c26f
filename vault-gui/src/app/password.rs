use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockError {
    NoPasswordSet,
    InvalidHash(String),
    WrongPassword,
    Hashing(String),
    Unexpected(String),
}

impl std::fmt::Display for UnlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NoPasswordSet => write!(
                f,
                "No password is set, run vault-gui --set-password to set one"
            ),
            Self::InvalidHash(e) => write!(f, "Stored password hash is invalid: {}", e),
            Self::WrongPassword => write!(f, "Wrong password"),
            Self::Hashing(e) => write!(f, "Failed to hash password: {}", e),
            Self::Unexpected(e) => write!(f, "Unexpected error: {}", e),
        }
    }
}

impl std::error::Error for UnlockError {}

/// Hashes `password` with Argon2id and a random salt, returned in PHC format.
pub fn hash_password(password: &str) -> Result<String, UnlockError> {
    let salt = SaltString::generate(&mut OsRng);

    // m_cost: 19456 KiB (19 MiB), t_cost: 2 iterations, p_cost: 1 thread
    let params = Params::new(19456, 2, 1, None).map_err(|e| UnlockError::Hashing(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UnlockError::Hashing(e.to_string()))
}

/// Verifies `password` against the stored PHC string. Parameters are read
/// from the hash itself.
pub fn verify_password(password: &str, hash: Option<&str>) -> Result<(), UnlockError> {
    let hash = hash.ok_or(UnlockError::NoPasswordSet)?;
    let parsed = PasswordHash::new(hash).map_err(|e| UnlockError::InvalidHash(e.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|e| match e {
            argon2::password_hash::Error::Password => UnlockError::WrongPassword,
            e => UnlockError::Unexpected(e.to_string()),
        })
}
