use crate::tests::Harness;
use crate::{AccessState, GateDecision, Route, RouteGate};

use ra_core::testing::{FakeIdentity, FakeProfileStore, StoreCall, fixture_caller, fixture_id, fixture_row};

// =========================================================================
// check_access
// =========================================================================

#[tokio::test]
async fn given_no_caller_when_checking_access_then_unauthenticated_without_profile_lookup() {
    // Given
    let harness = Harness::new(FakeIdentity::new(), FakeProfileStore::with_rows(vec![fixture_row(1, false)]));

    // When
    let access = harness.guard().check_access().await;

    // Then
    assert_eq!(access, AccessState::Unauthenticated);
    assert_eq!(harness.profiles.blocked_lookups(), 0);
    assert_eq!(harness.identity.sign_out_calls(), 0);
}

#[tokio::test]
async fn given_active_profile_when_checking_access_then_active() {
    let harness = Harness::new(
        FakeIdentity::signed_in_as(fixture_caller(1)),
        FakeProfileStore::with_rows(vec![fixture_row(1, false)]),
    );

    let access = harness.guard().check_access().await;

    assert_eq!(access, AccessState::Active(fixture_caller(1)));
    assert_eq!(harness.identity.sign_out_calls(), 0);
}

#[tokio::test]
async fn given_unreadable_full_row_when_checking_access_then_only_flag_consulted() {
    // Given
    let harness = Harness::new(
        FakeIdentity::signed_in_as(fixture_caller(1)),
        FakeProfileStore::with_rows(vec![fixture_row(1, false)]),
    );
    harness.profiles.state().fail_select_one = true;

    // When
    let access = harness.guard().check_access().await;

    // Then
    assert_eq!(access, AccessState::Active(fixture_caller(1)));
    assert_eq!(harness.profiles.calls(), vec![StoreCall::SelectBlocked(fixture_id(1))]);
    assert_eq!(harness.identity.sign_out_calls(), 0);
}

#[tokio::test]
async fn given_blocked_profile_when_checking_access_then_signed_out_exactly_once() {
    // Given
    let harness = Harness::new(
        FakeIdentity::signed_in_as(fixture_caller(1)),
        FakeProfileStore::with_rows(vec![fixture_row(1, true)]),
    );

    // When
    let access = harness.guard().check_access().await;

    // Then
    assert_eq!(access, AccessState::Blocked);
    assert!(!access.is_active());
    assert_eq!(harness.identity.sign_out_calls(), 1);
    assert!(harness.identity.state().caller.is_none());
}

#[tokio::test]
async fn given_missing_profile_row_when_checking_access_then_blocked() {
    let harness = Harness::new(
        FakeIdentity::signed_in_as(fixture_caller(1)),
        FakeProfileStore::with_rows(vec![fixture_row(2, false)]),
    );

    let access = harness.guard().check_access().await;

    assert_eq!(access, AccessState::Blocked);
    assert_eq!(harness.identity.sign_out_calls(), 1);
}

#[tokio::test]
async fn given_profile_lookup_failure_when_checking_access_then_fails_closed() {
    let harness = Harness::new(
        FakeIdentity::signed_in_as(fixture_caller(1)),
        FakeProfileStore::with_rows(vec![fixture_row(1, false)]),
    );
    harness.profiles.state().fail_select_blocked = true;

    let access = harness.guard().check_access().await;

    assert_eq!(access, AccessState::Blocked);
    assert_eq!(harness.identity.sign_out_calls(), 1);
}

#[tokio::test]
async fn given_identity_lookup_failure_when_checking_access_then_unauthenticated_without_sign_out() {
    let harness = Harness::new(
        FakeIdentity::signed_in_as(fixture_caller(1)),
        FakeProfileStore::with_rows(vec![fixture_row(1, false)]),
    );
    harness.identity.state().fail_current_caller = true;

    let access = harness.guard().check_access().await;

    assert_eq!(access, AccessState::Unauthenticated);
    assert_eq!(harness.profiles.blocked_lookups(), 0);
    assert_eq!(harness.identity.sign_out_calls(), 0);
}

#[tokio::test]
async fn given_sign_out_failure_when_forcing_sign_out_then_still_blocked() {
    let harness = Harness::new(
        FakeIdentity::signed_in_as(fixture_caller(1)),
        FakeProfileStore::with_rows(vec![fixture_row(1, true)]),
    );
    harness.identity.state().fail_sign_out = true;

    let access = harness.guard().check_access().await;

    assert_eq!(access, AccessState::Blocked);
    assert_eq!(harness.identity.sign_out_calls(), 1);
}

// =========================================================================
// Route gates
// =========================================================================

#[tokio::test]
async fn given_active_caller_when_entering_auth_view_then_redirect_home_without_profile_lookup() {
    let harness = Harness::new(
        FakeIdentity::signed_in_as(fixture_caller(1)),
        FakeProfileStore::with_rows(vec![fixture_row(1, true)]),
    );

    let decision = harness.guard().admit(RouteGate::RequireUnauthenticated).await;

    assert_eq!(decision, GateDecision::Redirect(Route::Home));
    assert_eq!(harness.profiles.blocked_lookups(), 0);
    assert_eq!(harness.identity.sign_out_calls(), 0);
}

#[tokio::test]
async fn given_signed_out_when_entering_protected_view_then_redirect_to_login() {
    let harness = Harness::new(FakeIdentity::new(), FakeProfileStore::default());

    let decision = harness.guard().enter("/main").await;

    assert_eq!(decision, GateDecision::Redirect(Route::Login));
}

#[tokio::test]
async fn given_active_caller_when_entering_home_then_allowed() {
    let harness = Harness::new(
        FakeIdentity::signed_in_as(fixture_caller(1)),
        FakeProfileStore::with_rows(vec![fixture_row(1, false)]),
    );

    assert!(harness.guard().enter("/").await.is_allowed());
}

#[tokio::test]
async fn given_unknown_path_when_entering_then_redirect_home_without_service_calls() {
    let harness = Harness::new(FakeIdentity::new(), FakeProfileStore::default());

    let decision = harness.guard().enter("/does-not-exist").await;

    assert_eq!(decision, GateDecision::Redirect(Route::Home));
    assert!(harness.identity.calls().is_empty());
}
