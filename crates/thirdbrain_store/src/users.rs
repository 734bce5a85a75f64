//! User credential records.
//!
//! Administrative insert/update/delete over the `users` collection. The
//! generation pipelines never touch this; it exists so a host application
//! can keep its credential records in the same store.

use crate::{ArtifactRecord, ArtifactStore, Fields};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};
use thirdbrain_error::{StoreError, StoreErrorKind, ThirdBrainResult};

const COLLECTION: &str = "users";
const NAME: &str = "name";
const PASSWORD: &str = "password";

/// One user credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Login name, also the record key
    pub username: String,
    /// Display name
    pub name: String,
    /// Argon2 password hash
    pub password_hash: String,
}

impl UserRecord {
    fn from_record(record: &ArtifactRecord) -> ThirdBrainResult<Self> {
        let field = |name: &str| -> ThirdBrainResult<String> {
            record
                .text(name)
                .map(str::to_string)
                .ok_or_else(|| {
                    StoreError::new(StoreErrorKind::InvalidField {
                        field: name.to_string(),
                        message: "missing or non-text".to_string(),
                    })
                    .into()
                })
        };
        Ok(Self {
            username: record.key.clone(),
            name: field(NAME)?,
            password_hash: field(PASSWORD)?,
        })
    }
}

/// Credential operations over an artifact store.
pub struct UserRegistry<S> {
    store: S,
}

impl<S: ArtifactStore> UserRegistry<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Insert a user, hashing the password.
    ///
    /// # Errors
    ///
    /// Returns `StoreErrorKind::KeyExists` when the username is taken.
    #[tracing::instrument(skip(self, password))]
    pub async fn insert(
        &self,
        username: &str,
        name: &str,
        password: &str,
    ) -> ThirdBrainResult<()> {
        let record = ArtifactRecord::new(username)
            .with_field(NAME, name)
            .with_field(PASSWORD, hash_password(password)?);
        let inserted = self.store.insert_if_absent(COLLECTION, record).await?;
        if !inserted {
            return Err(StoreError::new(StoreErrorKind::KeyExists(username.to_string())).into());
        }
        Ok(())
    }

    /// Fetch one user.
    pub async fn get(&self, username: &str) -> ThirdBrainResult<UserRecord> {
        let record = self.store.get(COLLECTION, username).await?;
        UserRecord::from_record(&record)
    }

    /// Check a password against the stored hash.
    pub async fn verify(&self, username: &str, password: &str) -> ThirdBrainResult<bool> {
        let user = self.get(username).await?;
        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| StoreError::new(StoreErrorKind::Credential(e.to_string())))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Update the display name.
    pub async fn update_name(&self, username: &str, name: &str) -> ThirdBrainResult<()> {
        let mut updates = Fields::new();
        updates.insert(NAME.to_string(), name.into());
        self.store.update(COLLECTION, username, updates).await
    }

    /// Replace the password.
    pub async fn update_password(&self, username: &str, password: &str) -> ThirdBrainResult<()> {
        let mut updates = Fields::new();
        updates.insert(PASSWORD.to_string(), hash_password(password)?.into());
        self.store.update(COLLECTION, username, updates).await
    }

    /// Remove a user.
    pub async fn delete(&self, username: &str) -> ThirdBrainResult<()> {
        self.store.delete(COLLECTION, username).await
    }

    /// Every user record.
    pub async fn fetch_all(&self) -> ThirdBrainResult<Vec<UserRecord>> {
        let records = self.store.fetch_all(COLLECTION).await?;
        records.iter().map(UserRecord::from_record).collect()
    }
}

fn hash_password(password: &str) -> ThirdBrainResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::new(StoreErrorKind::Credential(e.to_string())))?
        .to_string())
}
