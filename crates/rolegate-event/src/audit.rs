//! Audit event types.

use rolegate_types::{MethodId, ResourceId, RoleName, WalletAddress};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for one audit event.
///
/// UUID v4; unique per emitted event, suitable for deduplication in an
/// external audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditId(pub Uuid);

impl AuditId {
    /// Creates a new [`AuditId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AuditId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuditId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "audit:{}", self.0)
    }
}

/// What happened, with the identifiers the operation touched.
///
/// One variant per mutating engine operation. The variant name is the
/// operation; the fields are the affected identifiers. The acting wallet
/// lives on the surrounding [`AuditEvent`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditKind {
    /// A role was registered in the role registry.
    RoleCreated {
        /// The new role.
        role: RoleName,
        /// Its parent in the role tree.
        parent: RoleName,
    },

    /// An inactive role was switched back to active.
    RoleActivated {
        /// The reactivated role.
        role: RoleName,
    },

    /// An active role was switched to inactive.
    RoleDeactivated {
        /// The deactivated role.
        role: RoleName,
    },

    /// A method fingerprint was attached to a role.
    MethodAttached {
        /// The method fingerprint.
        method: MethodId,
        /// The role it now belongs to.
        role: RoleName,
    },

    /// A method fingerprint was detached from a role.
    MethodDetached {
        /// The method fingerprint.
        method: MethodId,
        /// The role it was removed from.
        role: RoleName,
    },

    /// A wallet received a global role grant.
    WalletRoleGranted {
        /// The wallet receiving the grant.
        wallet: WalletAddress,
        /// The granted role.
        role: RoleName,
    },

    /// A global role grant was revoked from a wallet.
    WalletRoleRevoked {
        /// The wallet losing the grant.
        wallet: WalletAddress,
        /// The revoked role.
        role: RoleName,
    },

    /// A wallet received a role grant scoped to one resource.
    ResourceRoleGranted {
        /// The wallet receiving the grant.
        wallet: WalletAddress,
        /// The resource the grant is scoped to.
        resource: ResourceId,
        /// The granted role.
        role: RoleName,
    },

    /// A resource-scoped role grant was revoked from a wallet.
    ResourceRoleRevoked {
        /// The wallet losing the grant.
        wallet: WalletAddress,
        /// The resource the grant was scoped to.
        resource: ResourceId,
        /// The revoked role.
        role: RoleName,
    },

    /// The current owner proposed a new owner.
    ///
    /// Ownership does not move until the candidate accepts.
    OwnershipTransferProposed {
        /// The proposed new owner.
        proposed: WalletAddress,
    },

    /// A proposed owner accepted, completing the two-step transfer.
    OwnershipAccepted {
        /// The wallet that held ownership before acceptance.
        previous: WalletAddress,
        /// The wallet that holds ownership now.
        new: WalletAddress,
    },
}

impl AuditKind {
    /// Returns the stable operation name for external log consumers.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoleCreated { .. } => "role_created",
            Self::RoleActivated { .. } => "role_activated",
            Self::RoleDeactivated { .. } => "role_deactivated",
            Self::MethodAttached { .. } => "method_attached",
            Self::MethodDetached { .. } => "method_detached",
            Self::WalletRoleGranted { .. } => "wallet_role_granted",
            Self::WalletRoleRevoked { .. } => "wallet_role_revoked",
            Self::ResourceRoleGranted { .. } => "resource_role_granted",
            Self::ResourceRoleRevoked { .. } => "resource_role_revoked",
            Self::OwnershipTransferProposed { .. } => "ownership_transfer_proposed",
            Self::OwnershipAccepted { .. } => "ownership_accepted",
        }
    }
}

/// One committed mutation of the permission state.
///
/// # Example
///
/// ```
/// use rolegate_event::{AuditEvent, AuditKind};
/// use rolegate_types::{RoleName, WalletAddress};
///
/// let actor = WalletAddress::new([7; 20]);
/// let event = AuditEvent::new(
///     actor,
///     AuditKind::RoleDeactivated {
///         role: RoleName::owner(),
///     },
/// );
///
/// assert_eq!(event.actor, actor);
/// assert_eq!(event.kind.name(), "role_deactivated");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique event identifier.
    pub id: AuditId,
    /// The wallet on whose behalf the mutation ran.
    pub actor: WalletAddress,
    /// The operation and the identifiers it touched.
    pub kind: AuditKind,
}

impl AuditEvent {
    /// Creates an event with a fresh [`AuditId`].
    #[must_use]
    pub fn new(actor: WalletAddress, kind: AuditKind) -> Self {
        Self {
            id: AuditId::new(),
            actor,
            kind,
        }
    }
}
