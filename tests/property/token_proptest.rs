//! Property-based tests for session tokens

use proptest::prelude::*;
use quillpost::backend::auth::sessions::{TokenService, TOKEN_TTL_SECS};
use quillpost::backend::server::AuthConfig;
use quillpost::shared::Identity;

fn service() -> TokenService {
    TokenService::new(&AuthConfig::new("proptest-secret", 4))
}

proptest! {
    #[test]
    fn test_issued_tokens_verify_to_same_identity(
        id in "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
        username in "[A-Za-z0-9]{3,20}",
    ) {
        let tokens = service();
        let identity = Identity::new(id, username);
        let token = tokens.issue(&identity).unwrap();
        prop_assert_eq!(tokens.verify(&token), Some(identity));
    }

    #[test]
    fn test_tokens_past_ttl_never_verify(
        username in "[A-Za-z0-9]{3,20}",
        extra in 1i64..1_000_000,
    ) {
        let tokens = service();
        let identity = Identity::new("1", username);
        let issued_at = chrono::Utc::now().timestamp() - TOKEN_TTL_SECS - extra;
        let token = tokens.issue_at(&identity, issued_at).unwrap();
        prop_assert_eq!(tokens.verify(&token), None);
    }

    #[test]
    fn test_arbitrary_strings_never_verify(garbage in "\\PC{0,200}") {
        prop_assert_eq!(service().verify(&garbage), None);
    }
}
