//! Audit events for the Rolegate permission engine.
//!
//! Every successful mutation of the permission state emits exactly one
//! [`AuditEvent`] describing the operation, the identifiers it touched,
//! and the actor on whose behalf it ran. Events flow one way, from the
//! engine into an [`AuditSink`]:
//!
//! ```text
//! ┌──────────────────┐   AuditEvent   ┌─────────────────┐
//! │ PermissionModule │ ─────────────► │   AuditSink     │
//! │ (rolegate-auth)  │                │ (host-provided) │
//! └──────────────────┘                └─────────────────┘
//! ```
//!
//! # Design
//!
//! - **One event per committed mutation** — failed operations emit
//!   nothing, so the sink contents mirror the committed history exactly.
//! - **Fire-and-forget** — [`AuditSink::record`] cannot fail; audit
//!   delivery guarantees beyond process memory are a host concern.
//! - **Serde-ready** — events serialize to JSON for external audit-log
//!   consumption.
//!
//! # Example
//!
//! ```
//! use rolegate_event::{AuditEvent, AuditKind, AuditSink, MemorySink};
//! use rolegate_types::{RoleName, WalletAddress};
//!
//! let mut sink = MemorySink::new();
//! let actor = WalletAddress::new([1; 20]);
//!
//! sink.record(AuditEvent::new(
//!     actor,
//!     AuditKind::RoleCreated {
//!         role: RoleName::try_from("System".to_string()).unwrap(),
//!         parent: RoleName::owner(),
//!     },
//! ));
//!
//! assert_eq!(sink.events().len(), 1);
//! assert_eq!(sink.events()[0].kind.name(), "role_created");
//! ```

mod audit;
mod sink;

pub use audit::{AuditEvent, AuditId, AuditKind};
pub use sink::{AuditSink, MemorySink, NullSink};
