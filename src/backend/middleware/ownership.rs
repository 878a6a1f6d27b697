/**
 * Ownership Guard
 *
 * Decides whether the request's identity may mutate a post.
 *
 * ```text
 * UNAUTHENTICATED --(has identity?)--> AUTHENTICATED --(is owner?)--> AUTHORIZED
 *        |                                   |
 *        v                                   v
 *      401                                 403
 * ```
 *
 * The identity check always comes first, so an anonymous caller is told
 * 401 without learning anything about the resource. A missing resource or
 * owner denies.
 */

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::{Identity, Owner};

/// Outcome of an ownership check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No identity on the request
    Unauthenticated,
    /// Identity present but not the owner
    Forbidden,
    /// Identity is the owner
    Authorized,
}

/// Canonical identity equality
///
/// UUIDs compare by value, so case or hyphenation differences do not matter;
/// anything else must match exactly. Empty ids never match.
pub fn same_identity(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    match (Uuid::parse_str(a), Uuid::parse_str(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Run the ownership state machine
pub fn authorize(identity: Option<&Identity>, owner: Option<&Owner>) -> Access {
    let Some(identity) = identity else {
        return Access::Unauthenticated;
    };
    match owner {
        Some(owner) if same_identity(&identity.id, &owner.id) => Access::Authorized,
        _ => Access::Forbidden,
    }
}

/// `authorize`, mapped onto handler errors
pub fn ensure_owner(identity: Option<&Identity>, owner: Option<&Owner>) -> Result<(), BackendError> {
    match authorize(identity, owner) {
        Access::Authorized => Ok(()),
        Access::Unauthenticated => Err(BackendError::Unauthorized),
        Access::Forbidden => {
            tracing::warn!(
                "Ownership check failed for user {}",
                identity.map(|i| i.username.as_str()).unwrap_or_default()
            );
            Err(BackendError::Forbidden)
        }
    }
}
