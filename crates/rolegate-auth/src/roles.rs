//! Role registry.
//!
//! Roles form a tree rooted at `"Owner"`: every role except the root has
//! exactly one parent, referenced by name. The registry is append-only —
//! roles are never deleted, only toggled between active and inactive —
//! and enumeration order is creation order, with the root always at
//! index 0.
//!
//! Authority checks (who may create or toggle roles) live in the facade,
//! not here; the registry enforces only its own structural invariants.

use crate::PermissionError;
use rolegate_types::RoleName;
use std::collections::HashMap;

/// One registered role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    name: RoleName,
    parent: Option<RoleName>,
    active: bool,
}

impl Role {
    /// The role's unique name.
    #[must_use]
    pub fn name(&self) -> &RoleName {
        &self.name
    }

    /// The parent role name; `None` only for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&RoleName> {
        self.parent.as_ref()
    }

    /// Whether grants of this role currently satisfy permission queries.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Ordered, append-only role registry.
///
/// # Example
///
/// ```
/// use rolegate_auth::RoleRegistry;
/// use rolegate_types::{RoleName, TryNew};
///
/// let mut registry = RoleRegistry::new();
/// assert_eq!(registry.len(), 1); // the root is always present
///
/// let system = RoleName::try_new("System".to_string()).unwrap();
/// registry.create(system.clone(), RoleName::owner()).unwrap();
///
/// assert!(registry.status("System"));
/// assert_eq!(registry.parent_of("System"), Some(&RoleName::owner()));
/// ```
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    /// Roles in creation order; the root occupies index 0.
    roles: Vec<Role>,
    /// Name → position in `roles`.
    index: HashMap<RoleName, usize>,
}

impl RoleRegistry {
    /// Creates a registry holding only the root `"Owner"` role.
    #[must_use]
    pub fn new() -> Self {
        let root = Role {
            name: RoleName::owner(),
            parent: None,
            active: true,
        };
        let mut index = HashMap::new();
        index.insert(root.name.clone(), 0);
        Self {
            roles: vec![root],
            index,
        }
    }

    /// Registers a new role under the given parent.
    ///
    /// The parent is recorded by name only; it need not exist or be
    /// active. New roles start active.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if the name is taken (including `"Owner"`).
    pub fn create(&mut self, name: RoleName, parent: RoleName) -> Result<(), PermissionError> {
        if self.index.contains_key(name.as_str()) {
            return Err(PermissionError::already_exists(format!("role '{name}'")));
        }
        self.index.insert(name.clone(), self.roles.len());
        self.roles.push(Role {
            name,
            parent: Some(parent),
            active: true,
        });
        Ok(())
    }

    /// Switches an active role to inactive.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown role, `InvalidState` ("role is not
    /// active") if already inactive.
    pub fn deactivate(&mut self, name: &str) -> Result<(), PermissionError> {
        let role = self.get_mut(name)?;
        if !role.active {
            return Err(PermissionError::InvalidState {
                message: "role is not active",
            });
        }
        role.active = false;
        Ok(())
    }

    /// Switches an inactive role back to active.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown role, `InvalidState` ("role is active")
    /// if already active.
    pub fn activate(&mut self, name: &str) -> Result<(), PermissionError> {
        let role = self.get_mut(name)?;
        if role.active {
            return Err(PermissionError::InvalidState {
                message: "role is active",
            });
        }
        role.active = true;
        Ok(())
    }

    /// Returns the active flag, or `false` for an unknown role.
    #[must_use]
    pub fn status(&self, name: &str) -> bool {
        self.get(name).is_some_and(Role::is_active)
    }

    /// Returns `true` if the role is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the parent of the named role, if the role exists and is
    /// not the root.
    #[must_use]
    pub fn parent_of(&self, name: &str) -> Option<&RoleName> {
        self.get(name).and_then(Role::parent)
    }

    /// Number of registered roles (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Always `false`: the root role cannot be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the role at the given creation-order index.
    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&Role> {
        self.roles.get(index)
    }

    /// Iterates role names in creation order, root first.
    pub fn names(&self) -> impl Iterator<Item = &RoleName> {
        self.roles.iter().map(Role::name)
    }

    fn get(&self, name: &str) -> Option<&Role> {
        self.index.get(name).map(|&i| &self.roles[i])
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Role, PermissionError> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.roles[i]),
            None => Err(PermissionError::not_found(format!("role '{name}'"))),
        }
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new()
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
    fn root_exists_at_index_zero() {
        let registry = RoleRegistry::new();
        assert_eq!(registry.len(), 1);
        let root = registry.by_index(0).expect("root role");
        assert!(root.name().is_owner());
        assert!(root.is_active());
        assert!(root.parent().is_none());
    }

    #[test]
    fn create_appends_in_order() {
        let mut registry = RoleRegistry::new();
        registry.create(role("System"), RoleName::owner()).unwrap();
        registry.create(role("Issuer"), RoleName::owner()).unwrap();

        let names: Vec<_> = registry.names().map(RoleName::to_string).collect();
        assert_eq!(names, ["Owner", "System", "Issuer"]);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut registry = RoleRegistry::new();
        registry.create(role("System"), RoleName::owner()).unwrap();

        let err = registry
            .create(role("System"), RoleName::owner())
            .unwrap_err();
        assert_eq!(err, PermissionError::already_exists("role 'System'"));
    }

    #[test]
    fn root_name_cannot_be_recreated() {
        let mut registry = RoleRegistry::new();
        let err = registry
            .create(RoleName::owner(), RoleName::owner())
            .unwrap_err();
        assert!(matches!(err, PermissionError::AlreadyExists { .. }));
    }

    #[test]
    fn parent_need_not_exist() {
        let mut registry = RoleRegistry::new();
        registry.create(role("Orphan"), role("Ghost")).unwrap();
        assert_eq!(registry.parent_of("Orphan"), Some(&role("Ghost")));
    }

    #[test]
    fn activation_must_alternate() {
        let mut registry = RoleRegistry::new();
        registry.create(role("System"), RoleName::owner()).unwrap();

        // Starts active: activate is rejected, deactivate succeeds.
        assert_eq!(
            registry.activate("System").unwrap_err(),
            PermissionError::InvalidState {
                message: "role is active"
            }
        );
        registry.deactivate("System").unwrap();
        assert!(!registry.status("System"));

        // Now inactive: deactivate is rejected, activate succeeds.
        assert_eq!(
            registry.deactivate("System").unwrap_err(),
            PermissionError::InvalidState {
                message: "role is not active"
            }
        );
        registry.activate("System").unwrap();
        assert!(registry.status("System"));
    }

    #[test]
    fn toggle_unknown_role_not_found() {
        let mut registry = RoleRegistry::new();
        assert!(matches!(
            registry.deactivate("Ghost").unwrap_err(),
            PermissionError::NotFound { .. }
        ));
        assert!(matches!(
            registry.activate("Ghost").unwrap_err(),
            PermissionError::NotFound { .. }
        ));
    }

    #[test]
    fn status_of_unknown_role_is_false() {
        let registry = RoleRegistry::new();
        assert!(!registry.status("Ghost"));
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut registry = RoleRegistry::new();
        registry.create(role("System"), RoleName::owner()).unwrap();
        registry.create(role("system"), RoleName::owner()).unwrap();
        assert_eq!(registry.len(), 3);
    }
}
