//! Two-step ownership transfer.
//!
//! Ownership moves through a propose/accept protocol so ultimate control
//! cannot be transferred to an unreachable identity by a single mistyped
//! call:
//!
//! ```text
//!            transfer_ownership(B)            accept_ownership()
//! Stable ────────────────────────► Pending ────────────────────► Stable
//!   A owns                         A owns, B appointed           B owns
//! ```
//!
//! Until acceptance completes, the proposer retains full ownership; a
//! renewed proposal simply replaces the appointed candidate. This module
//! tracks only the identities and the transition; grant-store effects of
//! acceptance are orchestrated by the facade.

use rolegate_types::WalletAddress;

/// Where the transfer protocol currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    /// No transfer in flight.
    Stable,
    /// A candidate has been appointed and may accept.
    Pending(WalletAddress),
}

/// Ownership identity and pending-transfer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ownership {
    owner: WalletAddress,
    pending: Option<WalletAddress>,
}

impl Ownership {
    /// Creates ownership held by the given wallet, no transfer pending.
    #[must_use]
    pub fn new(owner: WalletAddress) -> Self {
        Self {
            owner,
            pending: None,
        }
    }

    /// The current owner.
    #[must_use]
    pub fn owner(&self) -> WalletAddress {
        self.owner
    }

    /// The appointed candidate, if a transfer is pending.
    #[must_use]
    pub fn pending(&self) -> Option<WalletAddress> {
        self.pending
    }

    /// Returns `true` if the wallet is the current owner.
    #[must_use]
    pub fn is_owner(&self, wallet: WalletAddress) -> bool {
        self.owner == wallet
    }

    /// Current protocol state.
    #[must_use]
    pub fn state(&self) -> TransferState {
        match self.pending {
            Some(candidate) => TransferState::Pending(candidate),
            None => TransferState::Stable,
        }
    }

    /// Appoints a candidate, replacing any previous appointment.
    ///
    /// The current owner keeps full ownership until the candidate
    /// accepts.
    pub fn propose(&mut self, candidate: WalletAddress) {
        self.pending = Some(candidate);
    }

    /// Completes the transfer to the pending candidate.
    ///
    /// Callers must have verified that the accepting wallet equals the
    /// candidate; this merely commits the identity change and clears the
    /// pending state.
    pub fn complete(&mut self) {
        if let Some(candidate) = self.pending.take() {
            self.owner = candidate;
        }
    }
}
