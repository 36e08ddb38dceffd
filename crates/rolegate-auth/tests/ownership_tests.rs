//! Two-step ownership transfer scenarios.

mod common;

use common::{module, wallet};
use rolegate_auth::{PermissionError, DEFAULT_GRANT_SLOTS};
use rolegate_types::WalletAddress;

#[test]
fn only_owner_can_propose() {
    let mut module = module();
    let err = module.transfer_ownership(wallet(2), wallet(3)).unwrap_err();
    assert_eq!(
        err,
        PermissionError::unauthorized(PermissionError::ONLY_OWNER)
    );
}

#[test]
fn zero_candidate_rejected() {
    let mut module = module();
    let err = module
        .transfer_ownership(wallet(1), WalletAddress::ZERO)
        .unwrap_err();
    assert_eq!(err, PermissionError::invalid_input("new owner"));
}

#[test]
fn proposer_retains_ownership_until_acceptance() {
    let mut module = module();
    let old = wallet(1);
    let new = wallet(2);

    module.transfer_ownership(old, new).unwrap();

    assert_eq!(module.owner(), old);
    assert_eq!(module.pending_owner(), Some(new));
    assert!(module.verify_role(old, "Owner"));
    assert!(!module.verify_role(new, "Owner"));

    // The old owner still exercises owner-only operations...
    module.create_role(old, "System", "Owner").unwrap();
    // ...and the candidate does not yet.
    let err = module.create_role(new, "Early", "Owner").unwrap_err();
    assert_eq!(
        err,
        PermissionError::unauthorized(PermissionError::ONLY_OWNER)
    );
}

#[test]
fn acceptance_moves_every_owner_capability() {
    let mut module = module();
    let old = wallet(1);
    let new = wallet(2);

    module.transfer_ownership(old, new).unwrap();
    module.accept_ownership(new).unwrap();

    assert_eq!(module.owner(), new);
    assert_eq!(module.pending_owner(), None);
    assert!(module.verify_role(new, "Owner"));
    assert!(!module.verify_role(old, "Owner"));

    // Owner-only capability follows immediately.
    module.create_role(new, "System", "Owner").unwrap();
    let err = module.create_role(old, "Late", "Owner").unwrap_err();
    assert_eq!(
        err,
        PermissionError::unauthorized(PermissionError::ONLY_OWNER)
    );

    // So do delegated rights that depended on holding "Owner".
    let err = module
        .add_role_to_wallet(old, wallet(3), "System")
        .unwrap_err();
    assert_eq!(
        err,
        PermissionError::unauthorized(PermissionError::MANAGEMENT_NOT_ALLOWED)
    );
}

#[test]
fn third_party_cannot_accept() {
    let mut module = module();
    module.transfer_ownership(wallet(1), wallet(2)).unwrap();

    let err = module.accept_ownership(wallet(3)).unwrap_err();
    assert_eq!(
        err,
        PermissionError::unauthorized(PermissionError::ONLY_APPOINTED_OWNER)
    );
    // Including the proposer.
    let err = module.accept_ownership(wallet(1)).unwrap_err();
    assert_eq!(
        err,
        PermissionError::unauthorized(PermissionError::ONLY_APPOINTED_OWNER)
    );
    assert_eq!(module.owner(), wallet(1));
}

#[test]
fn acceptance_without_proposal_rejected() {
    let mut module = module();
    let err = module.accept_ownership(wallet(2)).unwrap_err();
    assert_eq!(
        err,
        PermissionError::unauthorized(PermissionError::ONLY_APPOINTED_OWNER)
    );
}

#[test]
fn renewed_proposal_replaces_candidate() {
    let mut module = module();
    let owner = wallet(1);

    module.transfer_ownership(owner, wallet(2)).unwrap();
    module.transfer_ownership(owner, wallet(3)).unwrap();

    let err = module.accept_ownership(wallet(2)).unwrap_err();
    assert_eq!(
        err,
        PermissionError::unauthorized(PermissionError::ONLY_APPOINTED_OWNER)
    );
    module.accept_ownership(wallet(3)).unwrap();
    assert_eq!(module.owner(), wallet(3));
}

#[test]
fn acceptance_into_full_table_fails_atomically() {
    let mut module = module();
    let owner = wallet(1);
    let candidate = wallet(2);

    for i in 0..DEFAULT_GRANT_SLOTS {
        module
            .add_role_to_wallet(owner, candidate, &format!("Role{i:02}"))
            .unwrap();
    }
    module.transfer_ownership(owner, candidate).unwrap();

    let err = module.accept_ownership(candidate).unwrap_err();
    assert_eq!(err, PermissionError::limit_exceeded(DEFAULT_GRANT_SLOTS));

    // Nothing moved: the proposer still owns, the proposal still stands.
    assert_eq!(module.owner(), owner);
    assert_eq!(module.pending_owner(), Some(candidate));
    assert!(module.verify_role(owner, "Owner"));

    // Freeing one slot lets the same acceptance go through.
    module
        .remove_role_from_wallet(owner, candidate, "Role00")
        .unwrap();
    module.accept_ownership(candidate).unwrap();
    assert_eq!(module.owner(), candidate);
}

#[test]
fn transfer_emits_proposal_and_acceptance_events() {
    let mut module = module();
    module.transfer_ownership(wallet(1), wallet(2)).unwrap();
    module.accept_ownership(wallet(2)).unwrap();

    let names: Vec<_> = module
        .audit_sink()
        .events()
        .iter()
        .map(|e| e.kind.name())
        .collect();
    assert_eq!(names, ["ownership_transfer_proposed", "ownership_accepted"]);
    assert_eq!(module.audit_sink().events()[1].actor, wallet(2));
}
