//! Hierarchical role-based permission engine.
//!
//! Rolegate gates privileged operations behind roles arranged in a tree
//! rooted at `"Owner"`, with two independent grant scopes: global
//! (wallet-wide) and resource-scoped (per wallet + resource pair).
//! Business logic asks one of two boolean questions before executing a
//! privileged action:
//!
//! - [`PermissionModule::allowed_for_wallet`] — may this wallet call
//!   this method, by its **global** grants?
//! - [`PermissionModule::allowed`] — may this wallet call this method
//!   **on this resource**, by its resource-scoped grants?
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  rolegate-types : WalletAddress, ResourceId, MethodId,      │
//! │                   RoleName, TryNew, ErrorCode               │
//! │  rolegate-event : AuditEvent, AuditSink                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  rolegate-auth  ◄── THIS CRATE                              │
//! │    RoleRegistry    : role tree, active flags                │
//! │    MethodRegistry  : method fingerprint ↔ role              │
//! │    WalletGrants    : global 20-slot tables                  │
//! │    ResourceGrants  : per-resource 20-slot tables            │
//! │    Ownership       : two-step transfer state machine        │
//! │    PermissionModule: the facade composing all of the above  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Authority Model
//!
//! | Mutation | Required authority |
//! |----------|-------------------|
//! | Role / method registry changes | Owner |
//! | Grant / revoke role `R` globally | holder of `parent(R)` globally, or Owner |
//! | Grant / revoke role `R` on a resource | holder of `parent(R)` globally or on that resource, or Owner |
//! | Propose new owner | Owner |
//! | Accept ownership | the appointed candidate |
//!
//! The second row is the **delegated authorization rule**: a wallet
//! holding `"Issuer"` can manage `"Compliance"` grants for other wallets
//! when `Compliance` was created under `Issuer` — no owner involvement.
//!
//! # Execution Model
//!
//! The engine is a pure single-writer state core. Mutations run to
//! completion atomically on `&mut self`; each either fully commits (and
//! emits one audit event) or fails with [`PermissionError`] having
//! changed nothing. Queries observe committed state and never fail.
//! Serializing concurrent callers is the host's responsibility.
//!
//! # Example
//!
//! ```
//! use rolegate_auth::PermissionModule;
//! use rolegate_types::{MethodId, ResourceId, WalletAddress};
//!
//! let owner = WalletAddress::new([1; 20]);
//! let issuer = WalletAddress::new([2; 20]);
//! let officer = WalletAddress::new([3; 20]);
//! let asset = ResourceId::new([9; 20]);
//!
//! let mut module = PermissionModule::new(owner)?;
//!
//! // Owner builds the role tree and grants "Issuer" globally.
//! module.create_role(owner, "Issuer", "Owner")?;
//! module.create_role(owner, "Compliance", "Issuer")?;
//! module.add_role_to_wallet(owner, issuer, "Issuer")?;
//!
//! // The issuer, not the owner, grants "Compliance" on one asset.
//! module.add_role_for_resource(issuer, officer, asset, "Compliance")?;
//!
//! let approve = MethodId::of_signature("approve(address)");
//! module.add_method_to_role(owner, approve, "Compliance")?;
//! assert!(module.allowed(approve, officer, asset));
//! assert!(!module.allowed_for_wallet(approve, officer)); // resource-scoped only
//! # Ok::<(), rolegate_auth::PermissionError>(())
//! ```

mod config;
mod error;
mod grants;
mod methods;
mod module;
mod ownership;
mod roles;

pub use config::{ModuleConfig, DEFAULT_GRANT_SLOTS};
pub use error::PermissionError;
pub use grants::{ResourceGrants, RoleSlots, WalletGrants};
pub use methods::MethodRegistry;
pub use module::PermissionModule;
pub use ownership::{Ownership, TransferState};
pub use roles::{Role, RoleRegistry};
