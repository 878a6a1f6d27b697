/**
 * Request Body Decoding
 *
 * Handlers take the raw body as `Bytes` and decode it themselves, so that
 * authentication and resource checks run before the body is looked at.
 * Decode failures and validation failures both surface as 400.
 */

use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::{SharedError, Validate};

/// Decode a JSON body without further checks
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, BackendError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected request body: {}", e);
        BackendError::from(SharedError::from(e))
    })
}

/// Decode a JSON body and run its `Validate` rules
pub fn parse_body<T: DeserializeOwned + Validate>(body: &[u8]) -> Result<T, BackendError> {
    let value: T = parse_json(body)?;
    value.validate().map_err(|e| {
        tracing::warn!("Request body failed validation: {}", e);
        BackendError::from(e)
    })?;
    Ok(value)
}
