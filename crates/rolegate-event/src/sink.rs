//! Audit sinks.
//!
//! The engine hands each committed mutation to an [`AuditSink`] and moves
//! on; recording cannot fail and cannot block a mutation. Hosts that need
//! durable audit trails implement the trait over their own transport.
//!
//! ```text
//! AuditSink trait (THIS MODULE)       ← abstract definition
//!      ├── MemorySink                 ← in-memory log (default, tests)
//!      └── NullSink                   ← discard (hosts with external audit)
//! ```

use crate::AuditEvent;

/// Consumer of committed audit events.
///
/// Implementations must accept every event; the engine treats audit as
/// fire-and-forget and has no failure path for it.
///
/// # Example
///
/// ```
/// use rolegate_event::{AuditEvent, AuditSink};
///
/// #[derive(Debug, Default)]
/// struct CountingSink(usize);
///
/// impl AuditSink for CountingSink {
///     fn record(&mut self, _event: AuditEvent) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait AuditSink: Send + std::fmt::Debug {
    /// Records one committed mutation.
    fn record(&mut self, event: AuditEvent);
}

/// Growable in-memory audit log.
///
/// The default sink, and the one tests inspect.
///
/// # Example
///
/// ```
/// use rolegate_event::{AuditEvent, AuditKind, AuditSink, MemorySink};
/// use rolegate_types::{RoleName, WalletAddress};
///
/// let mut sink = MemorySink::new();
/// sink.record(AuditEvent::new(
///     WalletAddress::new([9; 20]),
///     AuditKind::RoleActivated { role: RoleName::owner() },
/// ));
///
/// assert_eq!(sink.events().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Vec<AuditEvent>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Removes and returns all recorded events.
    pub fn drain(&mut self) -> Vec<AuditEvent> {
        std::mem::take(&mut self.events)
    }
}

impl AuditSink for MemorySink {
    fn record(&mut self, event: AuditEvent) {
        self.events.push(event);
    }
}

/// Sink that discards every event.
///
/// For hosts that consume audit through an external channel and want the
/// engine's own log disabled.
#[derive(Debug, Default)]
pub struct NullSink;

impl AuditSink for NullSink {
    fn record(&mut self, _event: AuditEvent) {}
}
