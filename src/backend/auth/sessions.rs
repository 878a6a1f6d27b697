/**
 * Session Tokens
 *
 * HS256 JWTs carrying `{ sub, username, iat, exp }`. Tokens are stateless:
 * nothing is stored server-side, so a token stays valid until its `exp`
 * even after the client logs out.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::server::config::AuthConfig;
use crate::shared::Identity;

/// Token lifetime: 3 days
pub const TOKEN_TTL_SECS: i64 = 3 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Identity::new(claims.sub, claims.username)
    }
}

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Create a token for an identity, valid for `TOKEN_TTL_SECS`
    pub fn issue(&self, identity: &Identity) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(identity, Utc::now().timestamp())
    }

    /// Create a token as if issued at `issued_at` (Unix seconds)
    pub fn issue_at(
        &self,
        identity: &Identity,
        issued_at: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: identity.id.clone(),
            username: identity.username.clone(),
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Decode and check a token
    ///
    /// Returns `None` for malformed tokens, bad signatures, other algorithms
    /// and expired tokens. Signature comparison is constant-time inside
    /// `jsonwebtoken`.
    pub fn verify(&self, token: &str) -> Option<Identity> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims.into()),
            Err(e) => {
                tracing::debug!("Rejected session token: {:?}", e.kind());
                None
            }
        }
    }
}
