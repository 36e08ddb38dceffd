//! Grant stores: fixed-capacity role slot tables.
//!
//! Both grant scopes share one storage shape, [`RoleSlots`]: a table of
//! `grant_slots` slots (20 by default), each holding `Option<RoleName>`
//! where `None` is the explicit empty sentinel. A used-count tracks how
//! many leading slots are occupied.
//!
//! # Slot Discipline
//!
//! - **Insert** writes the first unused slot; a full table is
//!   `LimitExceeded`.
//! - **Remove** swaps the removed slot with the last used slot, then
//!   clears the vacated trailing slot — O(1), no reallocation, order not
//!   preserved.
//! - **Enumerate** always yields the full table, sentinel-padded past
//!   the used count.
//!
//! The invariant after any operation: slots `0..used` are `Some`, slots
//! `used..capacity` are `None`.
//!
//! [`WalletGrants`] keys tables by wallet (global scope);
//! [`ResourceGrants`] keys them by `(wallet, resource)` — independent
//! capacity per pair, fully separate from the global store.

use crate::PermissionError;
use rolegate_types::{ResourceId, RoleName, WalletAddress};
use std::collections::HashMap;

/// One fixed-capacity table of role grants.
#[derive(Debug, Clone)]
pub struct RoleSlots {
    slots: Vec<Option<RoleName>>,
    used: usize,
}

impl RoleSlots {
    /// Creates an all-sentinel table of the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            used: 0,
        }
    }

    /// Writes the role into the first unused slot.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if the role is already held, `LimitExceeded` if
    /// every slot is in use.
    pub fn grant(&mut self, role: RoleName) -> Result<(), PermissionError> {
        if self.holds(role.as_str()) {
            return Err(PermissionError::already_exists(format!("grant of '{role}'")));
        }
        if self.used == self.slots.len() {
            return Err(PermissionError::limit_exceeded(self.slots.len()));
        }
        self.slots[self.used] = Some(role);
        self.used += 1;
        Ok(())
    }

    /// Removes the role, swapping the last used slot into its place and
    /// clearing the vacated trailing slot.
    ///
    /// # Errors
    ///
    /// `NotFound` if the role is not held.
    pub fn revoke(&mut self, role: &str) -> Result<(), PermissionError> {
        let position = self.slots[..self.used]
            .iter()
            .position(|slot| slot.as_ref().map(RoleName::as_str) == Some(role))
            .ok_or_else(|| PermissionError::not_found(format!("grant of '{role}'")))?;

        self.used -= 1;
        self.slots.swap(position, self.used);
        self.slots[self.used] = None;
        Ok(())
    }

    /// Returns `true` if the role occupies a used slot.
    #[must_use]
    pub fn holds(&self, role: &str) -> bool {
        self.slots[..self.used]
            .iter()
            .any(|slot| slot.as_ref().map(RoleName::as_str) == Some(role))
    }

    /// Number of used slots.
    #[must_use]
    pub fn used(&self) -> usize {
        self.used
    }

    /// The full table: used slots first, then sentinels to capacity.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<RoleName>] {
        &self.slots
    }
}

/// Global-scope grant store: one slot table per wallet.
#[derive(Debug, Clone)]
pub struct WalletGrants {
    capacity: usize,
    by_wallet: HashMap<WalletAddress, RoleSlots>,
}

impl WalletGrants {
    /// Creates an empty store with the given per-wallet capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            by_wallet: HashMap::new(),
        }
    }

    /// Grants the role to the wallet.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if held, `LimitExceeded` if the wallet's table is
    /// full.
    pub fn grant(&mut self, wallet: WalletAddress, role: RoleName) -> Result<(), PermissionError> {
        self.by_wallet
            .entry(wallet)
            .or_insert_with(|| RoleSlots::new(self.capacity))
            .grant(role)
    }

    /// Revokes the role from the wallet.
    ///
    /// # Errors
    ///
    /// `NotFound` if the wallet does not hold the role.
    pub fn revoke(&mut self, wallet: WalletAddress, role: &str) -> Result<(), PermissionError> {
        match self.by_wallet.get_mut(&wallet) {
            Some(slots) => slots.revoke(role),
            None => Err(PermissionError::not_found(format!("grant of '{role}'"))),
        }
    }

    /// Returns `true` if the wallet holds the role.
    #[must_use]
    pub fn holds(&self, wallet: WalletAddress, role: &str) -> bool {
        self.by_wallet
            .get(&wallet)
            .is_some_and(|slots| slots.holds(role))
    }

    /// The wallet's full slot table, sentinel-padded; all-sentinel for a
    /// wallet that never received a grant.
    #[must_use]
    pub fn roles_of(&self, wallet: WalletAddress) -> Vec<Option<RoleName>> {
        match self.by_wallet.get(&wallet) {
            Some(slots) => slots.as_slice().to_vec(),
            None => vec![None; self.capacity],
        }
    }
}

/// Resource-scope grant store: one slot table per `(wallet, resource)`.
#[derive(Debug, Clone)]
pub struct ResourceGrants {
    capacity: usize,
    by_key: HashMap<(WalletAddress, ResourceId), RoleSlots>,
}

impl ResourceGrants {
    /// Creates an empty store with the given per-pair capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            by_key: HashMap::new(),
        }
    }

    /// Grants the role to the wallet for one resource.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if held for that resource, `LimitExceeded` if the
    /// pair's table is full.
    pub fn grant(
        &mut self,
        wallet: WalletAddress,
        resource: ResourceId,
        role: RoleName,
    ) -> Result<(), PermissionError> {
        self.by_key
            .entry((wallet, resource))
            .or_insert_with(|| RoleSlots::new(self.capacity))
            .grant(role)
    }

    /// Revokes the role from the wallet for one resource.
    ///
    /// # Errors
    ///
    /// `NotFound` if the pair does not hold the role.
    pub fn revoke(
        &mut self,
        wallet: WalletAddress,
        resource: ResourceId,
        role: &str,
    ) -> Result<(), PermissionError> {
        match self.by_key.get_mut(&(wallet, resource)) {
            Some(slots) => slots.revoke(role),
            None => Err(PermissionError::not_found(format!("grant of '{role}'"))),
        }
    }

    /// Returns `true` if the wallet holds the role for the resource.
    #[must_use]
    pub fn holds(&self, wallet: WalletAddress, resource: ResourceId, role: &str) -> bool {
        self.by_key
            .get(&(wallet, resource))
            .is_some_and(|slots| slots.holds(role))
    }

    /// The pair's full slot table, sentinel-padded.
    #[must_use]
    pub fn roles_of(&self, wallet: WalletAddress, resource: ResourceId) -> Vec<Option<RoleName>> {
        match self.by_key.get(&(wallet, resource)) {
            Some(slots) => slots.as_slice().to_vec(),
            None => vec![None; self.capacity],
        }
    }
}
