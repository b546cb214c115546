//! Route activation guard.
//!
//! A route carries a required-authority set; an empty set means any
//! authenticated account may activate it. The guard is a pure predicate
//! over [`AuthState`] so it can be evaluated (and tested) without a router.

use crate::auth::AuthState;

/// Outcome of a guard check for a pending navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The bound view may be instantiated.
    Allow,
    /// Navigation is cancelled; the caller owns the redirect.
    Deny,
    /// The account fetch has not settled yet; hold the navigation.
    Pending,
}

/// Decide whether a route requiring `required` authorities may activate.
pub fn can_activate(auth: &AuthState, required: &[&str]) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Pending;
    }
    match &auth.account {
        Some(account) if account.has_any_authority(required) => GuardDecision::Allow,
        _ => GuardDecision::Deny,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AccountInfo;

    fn signed_in(authorities: &[&str]) -> AuthState {
        AuthState {
            account: Some(AccountInfo {
                id: "1".to_string(),
                email: "user@example.com".to_string(),
                name: None,
                authorities: authorities.iter().map(|a| a.to_string()).collect(),
            }),
            loading: false,
        }
    }

    #[test]
    fn holds_navigation_while_loading() {
        let auth = AuthState::default();
        assert_eq!(can_activate(&auth, &[]), GuardDecision::Pending);
    }

    #[test]
    fn denies_unauthenticated_access() {
        let auth = AuthState {
            account: None,
            loading: false,
        };
        assert_eq!(can_activate(&auth, &[]), GuardDecision::Deny);
        assert_eq!(can_activate(&auth, &["ROLE_ADMIN"]), GuardDecision::Deny);
    }

    #[test]
    fn empty_requirement_admits_any_account() {
        assert_eq!(can_activate(&signed_in(&[]), &[]), GuardDecision::Allow);
    }

    #[test]
    fn any_one_required_authority_suffices() {
        let auth = signed_in(&["ROLE_USER"]);
        assert_eq!(
            can_activate(&auth, &["ROLE_ADMIN", "ROLE_USER"]),
            GuardDecision::Allow
        );
        assert_eq!(can_activate(&auth, &["ROLE_ADMIN"]), GuardDecision::Deny);
    }
}
