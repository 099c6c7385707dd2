//! Roles store: catalogue mutations, selection, and list criteria.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{Permission, Role, RoleFilter, RoleSort, ViewMode};
use super::view::filtered_roles;
use crate::store::{ListenerId, Store};

/// State owned by the [`RolesStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolesState {
    pub roles: Vec<Role>,
    /// Bulk-selection checkboxes in the list.
    pub selected_role_ids: HashSet<String>,
    pub search_query: String,
    pub filter: RoleFilter,
    pub sort_by: RoleSort,
    pub view_mode: ViewMode,
}

impl Default for RolesState {
    fn default() -> Self {
        Self {
            roles: Vec::new(),
            selected_role_ids: HashSet::new(),
            search_query: String::new(),
            filter: RoleFilter::All,
            sort_by: RoleSort::Name,
            view_mode: ViewMode::Grid,
        }
    }
}

/// Observable store for the role catalogue.
pub struct RolesStore {
    inner: Store<RolesState>,
}

impl RolesStore {
    /// Creates a store seeded with `initial`.
    pub fn new(initial: RolesState) -> Self {
        Self {
            inner: Store::new(initial),
        }
    }

    /// Adds a custom role with a fresh id, zero user count, and fresh
    /// timestamps. Returns the new role's id.
    pub fn add_role(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        permissions: Vec<Permission>,
    ) -> String {
        let name = name.into();
        let description = description.into();
        let id = Uuid::new_v4().to_string();
        let role_id = id.clone();
        self.inner.update(|prev| {
            let now = chrono::Utc::now().to_rfc3339();
            let mut next = prev.clone();
            next.roles.push(Role {
                id: id.clone(),
                name: name.clone(),
                description: description.clone(),
                permissions: permissions.clone(),
                user_count: 0,
                is_system_role: false,
                is_active: true,
                created_at: now.clone(),
                updated_at: now,
            });
            next
        });
        role_id
    }

    /// Renames/redescribes a role and bumps `updated_at`. Unknown ids are a
    /// no-op.
    pub fn update_role(
        &self,
        id: &str,
        name: impl Into<String>,
        description: impl Into<String>,
    ) {
        let name = name.into();
        let description = description.into();
        self.inner.update(|prev| {
            let mut next = prev.clone();
            match next.roles.iter_mut().find(|r| r.id == id) {
                Some(role) => {
                    role.name = name.clone();
                    role.description = description.clone();
                    role.updated_at = chrono::Utc::now().to_rfc3339();
                    next
                }
                None => prev.clone(),
            }
        });
    }

    /// Deletes one role and drops it from the selection.
    ///
    /// System roles are refused: state stays unchanged and the refusal is
    /// reported only through a warning, not a return value. Callers that
    /// need to know must re-read state afterward.
    pub fn delete_role(&self, id: &str) {
        self.inner.update(|prev| {
            if let Some(role) = prev.roles.iter().find(|r| r.id == id) {
                if role.is_system_role {
                    tracing::warn!(id, name = %role.name, "refusing to delete system role");
                    return prev.clone();
                }
            }
            let mut next = prev.clone();
            next.roles.retain(|r| r.id != id);
            next.selected_role_ids.remove(id);
            next
        });
    }

    /// Deletes every selected role, silently excluding system roles from
    /// the batch rather than rejecting the whole operation. The selection
    /// is cleared afterward, including ids that survived.
    ///
    /// The asymmetry with [`RolesStore::delete_role`] (full rejection there,
    /// silent exclusion here) is deliberate product behavior.
    pub fn delete_selected_roles(&self) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            next.roles.retain(|r| {
                r.is_system_role || !prev.selected_role_ids.contains(&r.id)
            });
            next.selected_role_ids.clear();
            next
        });
    }

    /// Duplicates a role: everything copies except the id (fresh), the name
    /// (suffixed), the user count (reset to zero), and the system flag
    /// (forced off, so a copy of a system role is always deletable).
    ///
    /// Returns the new role's id, or `None` for an unknown source.
    pub fn duplicate_role(&self, id: &str) -> Option<String> {
        let new_id = Uuid::new_v4().to_string();
        let mut duplicated = false;
        self.inner.update(|prev| {
            let Some(source) = prev.roles.iter().find(|r| r.id == id) else {
                return prev.clone();
            };
            let now = chrono::Utc::now().to_rfc3339();
            let copy = Role {
                id: new_id.clone(),
                name: format!("{} (Copy)", source.name),
                user_count: 0,
                is_system_role: false,
                created_at: now.clone(),
                updated_at: now,
                ..source.clone()
            };
            let mut next = prev.clone();
            next.roles.push(copy);
            duplicated = true;
            next
        });
        duplicated.then_some(new_id)
    }

    /// Toggles one role's selection checkbox.
    pub fn toggle_selection(&self, id: &str) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            if !next.selected_role_ids.remove(id) {
                next.selected_role_ids.insert(id.to_string());
            }
            next
        });
    }

    /// Selects every role currently passing the filter pipeline.
    pub fn select_all(&self) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            next.selected_role_ids = filtered_roles(prev).into_iter().map(|r| r.id).collect();
            next
        });
    }

    /// Clears the selection.
    pub fn clear_selection(&self) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            next.selected_role_ids.clear();
            next
        });
    }

    /// Sets the search query the filtered view matches against.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.inner.update(|prev| RolesState {
            search_query: query.clone(),
            ..prev.clone()
        });
    }

    /// Sets the category filter.
    pub fn set_filter(&self, filter: RoleFilter) {
        self.inner.update(|prev| RolesState {
            filter,
            ..prev.clone()
        });
    }

    /// Sets the sort key.
    pub fn set_sort(&self, sort_by: RoleSort) {
        self.inner.update(|prev| RolesState {
            sort_by,
            ..prev.clone()
        });
    }

    /// Sets the list rendering mode.
    pub fn set_view_mode(&self, view_mode: ViewMode) {
        self.inner.update(|prev| RolesState {
            view_mode,
            ..prev.clone()
        });
    }

    /// Borrows the current state for a pure read.
    pub fn read<R>(&self, f: impl FnOnce(&RolesState) -> R) -> R {
        self.inner.read(f)
    }

    /// By-value copy of the current state.
    pub fn snapshot(&self) -> RolesState {
        self.inner.snapshot()
    }

    /// Registers a change listener; see [`Store::subscribe`].
    pub fn subscribe(&self, listener: impl Fn(&RolesState) + 'static) -> ListenerId {
        self.inner.subscribe(listener)
    }

    /// Deregisters a change listener.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::model::PermissionCategory;

    fn permission(resource: &str, category: PermissionCategory) -> Permission {
        Permission {
            id: format!("perm-{}", resource),
            resource: resource.to_string(),
            category,
            description: format!("Manage {}", resource),
        }
    }

    fn role(id: &str, name: &str, system: bool) -> Role {
        Role {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} role", name),
            permissions: vec![permission("students", PermissionCategory::UserManagement)],
            user_count: 3,
            is_system_role: system,
            is_active: true,
            created_at: "2026-03-01T09:00:00+00:00".to_string(),
            updated_at: "2026-03-01T09:00:00+00:00".to_string(),
        }
    }

    fn seeded_store() -> RolesStore {
        RolesStore::new(RolesState {
            roles: vec![
                role("r-admin", "Administrator", true),
                role("r-editor", "Editor", false),
                role("r-viewer", "Viewer", false),
            ],
            ..RolesState::default()
        })
    }

    #[test]
    fn test_add_role_starts_custom_and_unassigned() {
        let store = seeded_store();
        let id = store.add_role("Auditor", "Read-only audit access", Vec::new());

        let state = store.snapshot();
        let added = state.roles.iter().find(|r| r.id == id).unwrap();
        assert_eq!(added.user_count, 0);
        assert!(!added.is_system_role);
        assert!(added.is_active);
        assert_eq!(added.created_at, added.updated_at);
    }

    #[test]
    fn test_delete_role_rejects_system_roles() {
        let store = seeded_store();
        store.toggle_selection("r-admin");
        let before = store.snapshot();

        store.delete_role("r-admin");

        // Rejection is observable only by re-reading: list and selection
        // are both untouched.
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_delete_role_removes_custom_role_and_selection() {
        let store = seeded_store();
        store.toggle_selection("r-editor");
        store.delete_role("r-editor");

        let state = store.snapshot();
        assert!(!state.roles.iter().any(|r| r.id == "r-editor"));
        assert!(!state.selected_role_ids.contains("r-editor"));
    }

    #[test]
    fn test_bulk_delete_silently_excludes_system_roles() {
        let store = seeded_store();
        store.toggle_selection("r-admin");
        store.toggle_selection("r-editor");
        store.toggle_selection("r-viewer");

        store.delete_selected_roles();

        let state = store.snapshot();
        let ids: Vec<&str> = state.roles.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r-admin"]);
        assert!(state.selected_role_ids.is_empty());
    }

    #[test]
    fn test_duplicate_role_resets_identity_fields() {
        let store = seeded_store();
        let copy_id = store.duplicate_role("r-admin").unwrap();

        let state = store.snapshot();
        let copy = state.roles.iter().find(|r| r.id == copy_id).unwrap();
        assert_eq!(copy.name, "Administrator (Copy)");
        assert_eq!(copy.user_count, 0);
        assert!(!copy.is_system_role);
        assert_eq!(copy.permissions, state.roles[0].permissions);

        assert_eq!(store.duplicate_role("missing"), None);
    }

    #[test]
    fn test_selection_toggle_round_trip() {
        let store = seeded_store();
        store.toggle_selection("r-editor");
        assert!(store.read(|s| s.selected_role_ids.contains("r-editor")));
        store.toggle_selection("r-editor");
        assert!(store.read(|s| s.selected_role_ids.is_empty()));
    }

    #[test]
    fn test_select_all_selects_the_filtered_set() {
        let store = seeded_store();
        store.set_filter(RoleFilter::Custom);
        store.select_all();

        let state = store.snapshot();
        assert_eq!(state.selected_role_ids.len(), 2);
        assert!(!state.selected_role_ids.contains("r-admin"));

        store.clear_selection();
        assert!(store.read(|s| s.selected_role_ids.is_empty()));
    }

    #[test]
    fn test_update_role_bumps_updated_at() {
        let store = seeded_store();
        store.update_role("r-viewer", "Observer", "Renamed");

        let state = store.snapshot();
        let updated = state.roles.iter().find(|r| r.id == "r-viewer").unwrap();
        assert_eq!(updated.name, "Observer");
        assert!(updated.updated_at > updated.created_at);

        let before = store.snapshot();
        store.update_role("missing", "x", "y");
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_criteria_setters() {
        let store = seeded_store();
        store.set_search_query("admin");
        store.set_sort(RoleSort::UserCount);
        store.set_view_mode(ViewMode::List);

        let state = store.snapshot();
        assert_eq!(state.search_query, "admin");
        assert_eq!(state.sort_by, RoleSort::UserCount);
        assert_eq!(state.view_mode, ViewMode::List);
    }
}
