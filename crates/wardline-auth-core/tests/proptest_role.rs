//! Property tests for role handling and token claims

use proptest::prelude::*;
use std::time::Duration;

use wardline_auth_core::{AuthConfig, TokenIssuer};
use wardline_types::{Role, UserId};

fn role_strategy() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_role_display_parse_round_trip(role in role_strategy()) {
        let parsed: Role = role.to_string().parse().unwrap();
        prop_assert_eq!(parsed, role);
    }

    #[test]
    fn prop_role_parse_is_case_insensitive(role in role_strategy()) {
        let upper = role.to_string().to_uppercase();
        let parsed: Role = upper.parse().unwrap();
        prop_assert_eq!(parsed, role);
    }

    #[test]
    fn prop_unknown_role_strings_rejected(s in "[a-z]{1,16}") {
        let known = Role::ALL.iter().any(|r| r.to_string() == s);
        prop_assert_eq!(s.parse::<Role>().is_ok(), known);
    }

    #[test]
    fn prop_token_round_trip_preserves_identity(
        role in role_strategy(),
        username in "[a-z][a-z0-9._-]{0,31}",
    ) {
        let config = AuthConfig::try_new("proptest-signing-secret-0123456789ab")
            .unwrap()
            .with_token_lifetime(Duration::from_secs(3600));
        let issuer = TokenIssuer::new(&config);
        let user_id = UserId::new();

        let token = issuer.issue(user_id, &username, role).unwrap();
        let claims = issuer.validate(&token).unwrap();

        prop_assert_eq!(claims.user_id().unwrap(), user_id);
        prop_assert_eq!(claims.username, username);
        prop_assert_eq!(claims.role, role);
    }
}
