/**
 * Password Hashing and Verification
 *
 * bcrypt with a configurable work factor. Hashing is CPU-bound, so both
 * operations run on tokio's blocking pool. Plaintexts longer than bcrypt's
 * 72-byte input are refused rather than silently truncated.
 */

use crate::backend::error::BackendError;
use crate::backend::server::config::AuthConfig;

/// Plaintext hashed once at startup so that logins for unknown usernames
/// still pay for one bcrypt comparison.
const TIMING_GUARD_PLAINTEXT: &str = "quillpost-timing-guard";

/// Salted one-way password hashing
#[derive(Debug, Clone)]
pub struct PasswordVerifier {
    cost: u32,
    timing_guard_hash: String,
}

impl PasswordVerifier {
    /// Build a verifier from the process configuration
    ///
    /// Fails only if bcrypt rejects the configured cost.
    pub fn new(config: &AuthConfig) -> Result<Self, bcrypt::BcryptError> {
        let timing_guard_hash =
            bcrypt::non_truncating_hash(TIMING_GUARD_PLAINTEXT, config.bcrypt_cost)?;
        Ok(Self {
            cost: config.bcrypt_cost,
            timing_guard_hash,
        })
    }

    /// Hash a plaintext password with a fresh random salt
    pub async fn hash(&self, plaintext: &str) -> Result<String, BackendError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(plaintext, cost))
            .await
            .map_err(|e| BackendError::internal(format!("hash task failed: {e}")))?
            .map_err(|e| BackendError::internal(format!("failed to hash password: {e}")))
    }

    /// Check a plaintext password against a stored digest
    ///
    /// A malformed digest or an over-long plaintext is treated as a mismatch.
    pub async fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();

        let outcome =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(plaintext, &digest))
                .await;
        match outcome {
            Ok(Ok(valid)) => valid,
            Ok(Err(e)) => {
                tracing::warn!("Password comparison rejected: {}", e);
                false
            }
            Err(e) => {
                tracing::error!("Password verification task failed: {}", e);
                false
            }
        }
    }

    /// Burn one comparison's worth of time; always returns false
    pub async fn verify_absent(&self, plaintext: &str) -> bool {
        let guard = self.timing_guard_hash.clone();
        self.verify(plaintext, &guard).await;
        false
    }
}
