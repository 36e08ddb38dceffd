//! Method registry.
//!
//! Associates method fingerprints with roles: attaching `(method, role)`
//! marks the method as callable by holders of that role, subject to the
//! role being active at query time. The same fingerprint may be attached
//! to any number of roles independently.
//!
//! Per role, attachments are held in an order-insensitive slot list:
//! removal swaps the removed entry with the last one and truncates, so
//! detaching is O(1) and enumeration order is unspecified.

use crate::PermissionError;
use rolegate_types::{MethodId, RoleName};
use std::collections::HashMap;

/// Many-to-many association between method fingerprints and roles.
///
/// # Example
///
/// ```
/// use rolegate_auth::MethodRegistry;
/// use rolegate_types::{MethodId, RoleName};
///
/// let mut registry = MethodRegistry::new();
/// let pause = MethodId::of_signature("pause()");
///
/// registry.attach(pause, RoleName::owner()).unwrap();
/// assert!(registry.is_attached("Owner", pause));
///
/// registry.detach(pause, "Owner").unwrap();
/// assert_eq!(registry.methods_len("Owner"), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MethodRegistry {
    by_role: HashMap<RoleName, Vec<MethodId>>,
}

impl MethodRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a method fingerprint to a role.
    ///
    /// No role-existence or role-activity constraint applies here; the
    /// activity check belongs to the query path.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if the pair is already registered.
    pub fn attach(&mut self, method: MethodId, role: RoleName) -> Result<(), PermissionError> {
        let methods = self.by_role.entry(role).or_default();
        if methods.contains(&method) {
            return Err(PermissionError::already_exists(format!(
                "method {method} on role"
            )));
        }
        methods.push(method);
        Ok(())
    }

    /// Detaches a method fingerprint from a role.
    ///
    /// Swap-with-last removal: the last attachment takes the vacated
    /// position.
    ///
    /// # Errors
    ///
    /// `NotFound` ("method is not supported") if the pair is not
    /// currently registered.
    pub fn detach(&mut self, method: MethodId, role: &str) -> Result<(), PermissionError> {
        let missing = || PermissionError::not_found("method is not supported");

        let methods = self.by_role.get_mut(role).ok_or_else(missing)?;
        let position = methods.iter().position(|m| *m == method).ok_or_else(missing)?;
        methods.swap_remove(position);
        if methods.is_empty() {
            self.by_role.remove(role);
        }
        Ok(())
    }

    /// Returns `true` if the pair is registered.
    #[must_use]
    pub fn is_attached(&self, role: &str, method: MethodId) -> bool {
        self.by_role
            .get(role)
            .is_some_and(|methods| methods.contains(&method))
    }

    /// Number of methods currently attached to the role.
    #[must_use]
    pub fn methods_len(&self, role: &str) -> usize {
        self.by_role.get(role).map_or(0, Vec::len)
    }

    /// Iterates the roles carrying the given fingerprint.
    ///
    /// The permission query path intersects this with the grant stores.
    pub fn roles_with(&self, method: MethodId) -> impl Iterator<Item = &RoleName> {
        self.by_role
            .iter()
            .filter(move |(_, methods)| methods.contains(&method))
            .map(|(role, _)| role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolegate_types::TryNew;

    fn role(name: &str) -> RoleName {
        RoleName::try_new(name.to_string()).expect("valid role name")
    }

    #[test]
    fn attach_and_query() {
        let mut registry = MethodRegistry::new();
        let m = MethodId::of_signature("mint(address,uint256)");

        registry.attach(m, role("Issuer")).unwrap();
        assert!(registry.is_attached("Issuer", m));
        assert!(!registry.is_attached("Compliance", m));
        assert_eq!(registry.methods_len("Issuer"), 1);
    }

    #[test]
    fn duplicate_pair_rejected() {
        let mut registry = MethodRegistry::new();
        let m = MethodId::of_signature("mint(address,uint256)");

        registry.attach(m, role("Issuer")).unwrap();
        let err = registry.attach(m, role("Issuer")).unwrap_err();
        assert!(matches!(err, PermissionError::AlreadyExists { .. }));
    }

    #[test]
    fn same_method_on_many_roles() {
        let mut registry = MethodRegistry::new();
        let m = MethodId::of_signature("pause()");

        registry.attach(m, role("Issuer")).unwrap();
        registry.attach(m, role("Operator")).unwrap();

        let mut carriers: Vec<_> = registry.roles_with(m).map(RoleName::to_string).collect();
        carriers.sort();
        assert_eq!(carriers, ["Issuer", "Operator"]);
    }

    #[test]
    fn detach_unknown_pair_not_found() {
        let mut registry = MethodRegistry::new();
        let m = MethodId::of_signature("pause()");

        let err = registry.detach(m, "Issuer").unwrap_err();
        assert_eq!(err, PermissionError::not_found("method is not supported"));

        // Role known, method not attached.
        registry
            .attach(MethodId::of_signature("unpause()"), role("Issuer"))
            .unwrap();
        let err = registry.detach(m, "Issuer").unwrap_err();
        assert_eq!(err, PermissionError::not_found("method is not supported"));
    }

    #[test]
    fn detach_all_reaches_zero() {
        let mut registry = MethodRegistry::new();
        let methods: Vec<_> = ["a()", "b()", "c()"]
            .iter()
            .map(|sig| MethodId::of_signature(sig))
            .collect();

        for &m in &methods {
            registry.attach(m, role("Issuer")).unwrap();
        }
        assert_eq!(registry.methods_len("Issuer"), 3);

        // Remove from the middle first to exercise the swap.
        registry.detach(methods[1], "Issuer").unwrap();
        assert_eq!(registry.methods_len("Issuer"), 2);
        assert!(registry.is_attached("Issuer", methods[0]));
        assert!(registry.is_attached("Issuer", methods[2]));

        registry.detach(methods[0], "Issuer").unwrap();
        registry.detach(methods[2], "Issuer").unwrap();
        assert_eq!(registry.methods_len("Issuer"), 0);
        assert!(registry.roles_with(methods[0]).next().is_none());
    }

    #[test]
    fn detach_then_reattach() {
        let mut registry = MethodRegistry::new();
        let m = MethodId::of_signature("burn(uint256)");

        registry.attach(m, role("Issuer")).unwrap();
        registry.detach(m, "Issuer").unwrap();
        registry.attach(m, role("Issuer")).unwrap();
        assert!(registry.is_attached("Issuer", m));
    }
}
