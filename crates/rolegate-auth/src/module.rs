//! Permission facade.
//!
//! [`PermissionModule`] is the public surface of the engine: role CRUD,
//! method registration, grant management in both scopes, ownership
//! transfer, and the boolean queries business logic calls before
//! executing a privileged action.
//!
//! ```text
//!                    ┌────────────────────┐
//!   mutations ─────► │  PermissionModule  │ ───► AuditSink
//!   queries  ──────► │                    │ ───► bool
//!                    └────────┬───────────┘
//!        ┌────────────┬───────┴─────┬──────────────┬───────────┐
//!        ▼            ▼             ▼              ▼           ▼
//!  RoleRegistry MethodRegistry WalletGrants ResourceGrants Ownership
//! ```
//!
//! # Authority Model
//!
//! Two gates protect mutations:
//!
//! - **Owner gate** — role and method registry changes, and ownership
//!   proposals, require the current owner.
//! - **Delegated gate** — grant changes require the caller to hold the
//!   target role's *parent* (globally; for resource-scoped changes a
//!   parent held on that same resource also counts), or to be the
//!   owner. Holding `"Issuer"` is enough to manage `"Compliance"`
//!   grants when `Compliance` was created under `Issuer`.
//!
//! Queries are open to anyone and never fail; absent data reads as
//! `false` or as sentinel slots.
//!
//! # Execution Model
//!
//! The module is a single-writer state core: every mutating operation
//! either fully commits (and emits one audit event) or fails with a
//! [`PermissionError`] having changed nothing. Serializing concurrent
//! callers onto `&mut self` is the host's concern, which is why no lock
//! lives inside.

use crate::{
    MethodRegistry, ModuleConfig, Ownership, PermissionError, ResourceGrants, Role, RoleRegistry,
    WalletGrants,
};
use rolegate_event::{AuditEvent, AuditKind, AuditSink, MemorySink};
use rolegate_types::{MethodId, ResourceId, RoleName, TryNew, WalletAddress};
use tracing::{debug, info};

/// The permission engine facade.
///
/// Generic over the audit sink so hosts can plug their own; defaults to
/// the in-memory [`MemorySink`].
///
/// # Example
///
/// ```
/// use rolegate_auth::PermissionModule;
/// use rolegate_types::{MethodId, WalletAddress};
///
/// let owner = WalletAddress::new([1; 20]);
/// let operator = WalletAddress::new([2; 20]);
/// let mut module = PermissionModule::new(owner)?;
///
/// // Owner wires up a role and a privileged method...
/// let pause = MethodId::of_signature("pause()");
/// module.create_role(owner, "System", "Owner")?;
/// module.add_method_to_role(owner, pause, "System")?;
/// module.add_role_to_wallet(owner, operator, "System")?;
///
/// // ...and the business contract checks before executing.
/// assert!(module.allowed_for_wallet(pause, operator));
/// # Ok::<(), rolegate_auth::PermissionError>(())
/// ```
#[derive(Debug)]
pub struct PermissionModule<S: AuditSink = MemorySink> {
    config: ModuleConfig,
    roles: RoleRegistry,
    methods: MethodRegistry,
    wallet_grants: WalletGrants,
    resource_grants: ResourceGrants,
    ownership: Ownership,
    audit: S,
}

impl PermissionModule<MemorySink> {
    /// Creates a module with the default configuration and an in-memory
    /// audit sink. The initial owner receives the root `"Owner"` grant.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the initial owner is the zero address.
    pub fn new(initial_owner: WalletAddress) -> Result<Self, PermissionError> {
        Self::with_config(initial_owner, ModuleConfig::default())
    }

    /// Creates a module with the given configuration.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the initial owner is zero or `grant_slots` is 0.
    pub fn with_config(
        initial_owner: WalletAddress,
        config: ModuleConfig,
    ) -> Result<Self, PermissionError> {
        Self::with_audit_sink(initial_owner, config, MemorySink::new())
    }
}

impl<S: AuditSink> PermissionModule<S> {
    /// Creates a module recording audit events into the given sink.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the initial owner is zero or `grant_slots` is 0.
    pub fn with_audit_sink(
        initial_owner: WalletAddress,
        config: ModuleConfig,
        audit: S,
    ) -> Result<Self, PermissionError> {
        if initial_owner.is_zero() {
            return Err(PermissionError::invalid_input("initial owner"));
        }
        if config.grant_slots == 0 {
            return Err(PermissionError::invalid_input("grant slots"));
        }

        let mut wallet_grants = WalletGrants::new(config.grant_slots);
        wallet_grants.grant(initial_owner, RoleName::owner())?;

        Ok(Self {
            resource_grants: ResourceGrants::new(config.grant_slots),
            roles: RoleRegistry::new(),
            methods: MethodRegistry::new(),
            ownership: Ownership::new(initial_owner),
            wallet_grants,
            config,
            audit,
        })
    }

    // === Role registry (owner-gated) ===

    /// Registers a new role under the given parent. Owner only.
    ///
    /// The parent is referenced by name and need not exist or be active.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `InvalidInput` on an empty name or parent,
    /// `AlreadyExists` on a duplicate name.
    pub fn create_role(
        &mut self,
        actor: WalletAddress,
        name: &str,
        parent: &str,
    ) -> Result<(), PermissionError> {
        self.ensure_owner(actor)?;
        let name = role_arg(name, "role name")?;
        let parent = role_arg(parent, "parent role name")?;

        self.roles.create(name.clone(), parent.clone())?;
        info!("created role '{name}' under '{parent}'");
        self.audit
            .record(AuditEvent::new(actor, AuditKind::RoleCreated { role: name, parent }));
        Ok(())
    }

    /// Switches an active role to inactive. Owner only.
    ///
    /// Grants of the role stay stored but stop satisfying permission
    /// queries until the role is reactivated.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `InvalidInput`, `NotFound`, `InvalidState` if
    /// already inactive.
    pub fn deactivate_role(
        &mut self,
        actor: WalletAddress,
        name: &str,
    ) -> Result<(), PermissionError> {
        self.ensure_owner(actor)?;
        let role = role_arg(name, "role name")?;

        self.roles.deactivate(role.as_str())?;
        info!("deactivated role '{role}'");
        self.audit
            .record(AuditEvent::new(actor, AuditKind::RoleDeactivated { role }));
        Ok(())
    }

    /// Switches an inactive role back to active. Owner only.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `InvalidInput`, `NotFound`, `InvalidState` if
    /// already active.
    pub fn activate_role(
        &mut self,
        actor: WalletAddress,
        name: &str,
    ) -> Result<(), PermissionError> {
        self.ensure_owner(actor)?;
        let role = role_arg(name, "role name")?;

        self.roles.activate(role.as_str())?;
        info!("activated role '{role}'");
        self.audit
            .record(AuditEvent::new(actor, AuditKind::RoleActivated { role }));
        Ok(())
    }

    // === Method registry (owner-gated) ===

    /// Attaches a method fingerprint to a role. Owner only.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `InvalidInput` on a zero fingerprint or empty
    /// role, `AlreadyExists` if the pair is registered.
    pub fn add_method_to_role(
        &mut self,
        actor: WalletAddress,
        method: MethodId,
        role: &str,
    ) -> Result<(), PermissionError> {
        self.ensure_owner(actor)?;
        if method.is_zero() {
            return Err(PermissionError::invalid_input("method id"));
        }
        let role = role_arg(role, "role name")?;

        self.methods.attach(method, role.clone())?;
        info!("attached method {method} to role '{role}'");
        self.audit
            .record(AuditEvent::new(actor, AuditKind::MethodAttached { method, role }));
        Ok(())
    }

    /// Detaches a method fingerprint from a role. Owner only.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `InvalidInput`, `NotFound` if the pair is not
    /// registered.
    pub fn remove_method_from_role(
        &mut self,
        actor: WalletAddress,
        method: MethodId,
        role: &str,
    ) -> Result<(), PermissionError> {
        self.ensure_owner(actor)?;
        if method.is_zero() {
            return Err(PermissionError::invalid_input("method id"));
        }
        let role = role_arg(role, "role name")?;

        self.methods.detach(method, role.as_str())?;
        info!("detached method {method} from role '{role}'");
        self.audit
            .record(AuditEvent::new(actor, AuditKind::MethodDetached { method, role }));
        Ok(())
    }

    // === Wallet grants (delegated gate) ===

    /// Grants a role to a wallet, globally.
    ///
    /// The caller must hold the role's parent globally, or be the owner.
    ///
    /// # Errors
    ///
    /// `InvalidInput` on an empty role, `Unauthorized`, `AlreadyExists`
    /// if held, `LimitExceeded` when the wallet's slot table is full.
    pub fn add_role_to_wallet(
        &mut self,
        actor: WalletAddress,
        wallet: WalletAddress,
        role: &str,
    ) -> Result<(), PermissionError> {
        let role = role_arg(role, "role name")?;
        self.ensure_can_manage(actor, role.as_str())?;

        self.wallet_grants.grant(wallet, role.clone())?;
        info!("granted role '{role}' to wallet {wallet}");
        self.audit
            .record(AuditEvent::new(actor, AuditKind::WalletRoleGranted { wallet, role }));
        Ok(())
    }

    /// Revokes a wallet's global role grant.
    ///
    /// Same authority rule as [`add_role_to_wallet`](Self::add_role_to_wallet).
    ///
    /// # Errors
    ///
    /// `InvalidInput`, `Unauthorized`, `NotFound` if the wallet does not
    /// hold the role.
    pub fn remove_role_from_wallet(
        &mut self,
        actor: WalletAddress,
        wallet: WalletAddress,
        role: &str,
    ) -> Result<(), PermissionError> {
        let role = role_arg(role, "role name")?;
        self.ensure_can_manage(actor, role.as_str())?;

        self.wallet_grants.revoke(wallet, role.as_str())?;
        info!("revoked role '{role}' from wallet {wallet}");
        self.audit
            .record(AuditEvent::new(actor, AuditKind::WalletRoleRevoked { wallet, role }));
        Ok(())
    }

    // === Resource grants (delegated gate) ===

    /// Grants a role to a wallet, scoped to one resource.
    ///
    /// The caller must hold the role's parent — globally (which covers
    /// every resource) or scoped to this same resource — or be the
    /// owner.
    ///
    /// # Errors
    ///
    /// As [`add_role_to_wallet`](Self::add_role_to_wallet), with the
    /// capacity counted per `(wallet, resource)` pair.
    pub fn add_role_for_resource(
        &mut self,
        actor: WalletAddress,
        wallet: WalletAddress,
        resource: ResourceId,
        role: &str,
    ) -> Result<(), PermissionError> {
        let role = role_arg(role, "role name")?;
        self.ensure_can_manage_for_resource(actor, resource, role.as_str())?;

        self.resource_grants.grant(wallet, resource, role.clone())?;
        info!("granted role '{role}' to wallet {wallet} for resource {resource}");
        self.audit.record(AuditEvent::new(
            actor,
            AuditKind::ResourceRoleGranted {
                wallet,
                resource,
                role,
            },
        ));
        Ok(())
    }

    /// Revokes a wallet's role grant for one resource.
    ///
    /// # Errors
    ///
    /// `InvalidInput`, `Unauthorized`, `NotFound` if the pair does not
    /// hold the role.
    pub fn remove_role_from_resource(
        &mut self,
        actor: WalletAddress,
        wallet: WalletAddress,
        resource: ResourceId,
        role: &str,
    ) -> Result<(), PermissionError> {
        let role = role_arg(role, "role name")?;
        self.ensure_can_manage_for_resource(actor, resource, role.as_str())?;

        self.resource_grants.revoke(wallet, resource, role.as_str())?;
        info!("revoked role '{role}' from wallet {wallet} for resource {resource}");
        self.audit.record(AuditEvent::new(
            actor,
            AuditKind::ResourceRoleRevoked {
                wallet,
                resource,
                role,
            },
        ));
        Ok(())
    }

    // === Ownership (two-step) ===

    /// Appoints a new owner candidate. Owner only.
    ///
    /// The current owner keeps every privilege until the candidate
    /// accepts; calling again replaces the candidate.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `InvalidInput` if the candidate is the zero
    /// address.
    pub fn transfer_ownership(
        &mut self,
        actor: WalletAddress,
        new_owner: WalletAddress,
    ) -> Result<(), PermissionError> {
        self.ensure_owner(actor)?;
        if new_owner.is_zero() {
            return Err(PermissionError::invalid_input("new owner"));
        }

        self.ownership.propose(new_owner);
        info!("proposed ownership transfer to {new_owner}");
        self.audit.record(AuditEvent::new(
            actor,
            AuditKind::OwnershipTransferProposed {
                proposed: new_owner,
            },
        ));
        Ok(())
    }

    /// Completes a pending ownership transfer. Appointed candidate only.
    ///
    /// Moves the `"Owner"` grant from the previous owner to the caller
    /// and clears the pending state, atomically: a failure (for example
    /// a full candidate slot table) leaves everything untouched.
    ///
    /// # Errors
    ///
    /// `Unauthorized` unless the caller is the appointed candidate,
    /// `LimitExceeded` if the candidate's global table is full.
    pub fn accept_ownership(&mut self, actor: WalletAddress) -> Result<(), PermissionError> {
        match self.ownership.pending() {
            Some(candidate) if candidate == actor => {}
            _ => {
                return Err(PermissionError::unauthorized(
                    PermissionError::ONLY_APPOINTED_OWNER,
                ))
            }
        }

        let previous = self.ownership.owner();
        if previous != actor {
            // Grant before revoke: if the candidate's table is full the
            // whole acceptance fails with nothing changed.
            self.wallet_grants.grant(actor, RoleName::owner())?;
            self.wallet_grants.revoke(previous, RoleName::OWNER)?;
        }
        self.ownership.complete();

        info!("ownership transferred from {previous} to {actor}");
        self.audit.record(AuditEvent::new(
            actor,
            AuditKind::OwnershipAccepted {
                previous,
                new: actor,
            },
        ));
        Ok(())
    }

    // === Permission queries ===

    /// Returns `true` iff some role is attached to the method, marked
    /// active, and held by the wallet **globally**.
    ///
    /// Resource-scoped grants never satisfy this query.
    #[must_use]
    pub fn allowed_for_wallet(&self, method: MethodId, wallet: WalletAddress) -> bool {
        self.methods.roles_with(method).any(|role| {
            self.roles.status(role.as_str()) && self.wallet_grants.holds(wallet, role.as_str())
        })
    }

    /// Returns `true` iff some role is attached to the method, marked
    /// active, and held by the wallet **for that resource**.
    ///
    /// Global grants never satisfy this query.
    #[must_use]
    pub fn allowed(&self, method: MethodId, wallet: WalletAddress, resource: ResourceId) -> bool {
        self.methods.roles_with(method).any(|role| {
            self.roles.status(role.as_str())
                && self.resource_grants.holds(wallet, resource, role.as_str())
        })
    }

    // === State queries ===

    /// Whether the wallet holds the role globally.
    #[must_use]
    pub fn verify_role(&self, wallet: WalletAddress, role: &str) -> bool {
        self.wallet_grants.holds(wallet, role)
    }

    /// Whether the wallet holds the role for the given resource.
    #[must_use]
    pub fn resource_role_status(
        &self,
        wallet: WalletAddress,
        resource: ResourceId,
        role: &str,
    ) -> bool {
        self.resource_grants.holds(wallet, resource, role)
    }

    /// The wallet's global slot table, sentinel-padded to capacity.
    #[must_use]
    pub fn wallet_roles(&self, wallet: WalletAddress) -> Vec<Option<RoleName>> {
        self.wallet_grants.roles_of(wallet)
    }

    /// The wallet's slot table for one resource, sentinel-padded.
    #[must_use]
    pub fn wallet_roles_for_resource(
        &self,
        wallet: WalletAddress,
        resource: ResourceId,
    ) -> Vec<Option<RoleName>> {
        self.resource_grants.roles_of(wallet, resource)
    }

    /// The role's active flag; `false` for an unknown role.
    #[must_use]
    pub fn role_status(&self, name: &str) -> bool {
        self.roles.status(name)
    }

    /// Number of registered roles.
    #[must_use]
    pub fn roles_len(&self) -> usize {
        self.roles.len()
    }

    /// The role at the given creation-order index (`0` is the root).
    #[must_use]
    pub fn role_by_index(&self, index: usize) -> Option<&Role> {
        self.roles.by_index(index)
    }

    /// All role names in creation order.
    pub fn role_names(&self) -> impl Iterator<Item = &RoleName> {
        self.roles.names()
    }

    /// Whether the method fingerprint is attached to the role.
    #[must_use]
    pub fn method_status(&self, role: &str, method: MethodId) -> bool {
        self.methods.is_attached(role, method)
    }

    /// Number of methods attached to the role.
    #[must_use]
    pub fn methods_len(&self, role: &str) -> usize {
        self.methods.methods_len(role)
    }

    /// The current owner.
    #[must_use]
    pub fn owner(&self) -> WalletAddress {
        self.ownership.owner()
    }

    /// The appointed owner candidate, if a transfer is pending.
    #[must_use]
    pub fn pending_owner(&self) -> Option<WalletAddress> {
        self.ownership.pending()
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// The audit sink, for inspection or draining.
    #[must_use]
    pub fn audit_sink(&self) -> &S {
        &self.audit
    }

    /// Mutable access to the audit sink.
    pub fn audit_sink_mut(&mut self) -> &mut S {
        &mut self.audit
    }

    // === Authority gates ===

    fn ensure_owner(&self, actor: WalletAddress) -> Result<(), PermissionError> {
        if self.ownership.is_owner(actor) {
            Ok(())
        } else {
            Err(PermissionError::unauthorized(PermissionError::ONLY_OWNER))
        }
    }

    /// The delegated authorization rule: owner, or global holder of the
    /// target role's parent.
    fn ensure_can_manage(&self, actor: WalletAddress, role: &str) -> Result<(), PermissionError> {
        if self.ownership.is_owner(actor) {
            return Ok(());
        }
        if let Some(parent) = self.roles.parent_of(role) {
            if self.wallet_grants.holds(actor, parent.as_str()) {
                debug!("management of '{role}' delegated to {actor} via parent '{parent}'");
                return Ok(());
            }
        }
        Err(PermissionError::unauthorized(
            PermissionError::MANAGEMENT_NOT_ALLOWED,
        ))
    }

    /// The delegated rule for resource-scoped grants: a parent held
    /// globally covers every resource; a parent held for this resource
    /// covers this resource only.
    fn ensure_can_manage_for_resource(
        &self,
        actor: WalletAddress,
        resource: ResourceId,
        role: &str,
    ) -> Result<(), PermissionError> {
        if self.ownership.is_owner(actor) {
            return Ok(());
        }
        if let Some(parent) = self.roles.parent_of(role) {
            if self.wallet_grants.holds(actor, parent.as_str())
                || self.resource_grants.holds(actor, resource, parent.as_str())
            {
                debug!(
                    "management of '{role}' on {resource} delegated to {actor} via parent '{parent}'"
                );
                return Ok(());
            }
        }
        Err(PermissionError::unauthorized(
            PermissionError::MANAGEMENT_NOT_ALLOWED,
        ))
    }
}

fn role_arg(raw: &str, what: &'static str) -> Result<RoleName, PermissionError> {
    RoleName::try_new(raw.to_string()).map_err(|_| PermissionError::invalid_input(what))
}
