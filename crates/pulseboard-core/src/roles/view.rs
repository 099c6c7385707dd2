//! The filtered/sorted role projection.

use super::model::{Role, RoleFilter, RoleSort};
use super::store::RolesState;

/// Applies the state's search query, category filter, and sort key to the
/// role list.
///
/// Pure function of the state, recomputed on every call and never cached.
/// Pipeline order matters only for cost, not for the result: query filter,
/// then category filter, then a stable sort.
pub fn filtered_roles(state: &RolesState) -> Vec<Role> {
    let query = state.search_query.trim().to_lowercase();
    let mut roles: Vec<Role> = state
        .roles
        .iter()
        .filter(|role| matches_query(role, &query))
        .filter(|role| matches_filter(role, state.filter))
        .cloned()
        .collect();

    match state.sort_by {
        RoleSort::Name => roles.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        RoleSort::UserCount => roles.sort_by(|a, b| b.user_count.cmp(&a.user_count)),
        // RFC 3339 timestamps order correctly as strings.
        RoleSort::CreatedAt => roles.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        RoleSort::UpdatedAt => roles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
    roles
}

/// Case-insensitive substring match against the role's name, description,
/// or any permission's resource/description. An empty query matches all.
fn matches_query(role: &Role, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    role.name.to_lowercase().contains(query)
        || role.description.to_lowercase().contains(query)
        || role.permissions.iter().any(|p| {
            p.resource.to_lowercase().contains(query)
                || p.description.to_lowercase().contains(query)
        })
}

fn matches_filter(role: &Role, filter: RoleFilter) -> bool {
    match filter {
        RoleFilter::All => true,
        RoleFilter::System => role.is_system_role,
        RoleFilter::Custom => !role.is_system_role,
        RoleFilter::Category(category) => {
            role.permissions.iter().any(|p| p.category == category)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::model::{Permission, PermissionCategory};

    fn permission(resource: &str, category: PermissionCategory) -> Permission {
        Permission {
            id: format!("perm-{}", resource),
            resource: resource.to_string(),
            category,
            description: format!("Manage {}", resource),
        }
    }

    fn role(
        id: &str,
        name: &str,
        system: bool,
        user_count: usize,
        permissions: Vec<Permission>,
    ) -> Role {
        Role {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} role", name),
            permissions,
            user_count,
            is_system_role: system,
            is_active: true,
            created_at: format!("2026-03-0{}T09:00:00+00:00", (user_count % 9) + 1),
            updated_at: format!("2026-03-0{}T10:00:00+00:00", (user_count % 9) + 1),
        }
    }

    fn seeded_state() -> RolesState {
        RolesState {
            roles: vec![
                role(
                    "r-admin",
                    "Administrator",
                    true,
                    2,
                    vec![permission("settings", PermissionCategory::Settings)],
                ),
                role(
                    "r-billing",
                    "Billing clerk",
                    false,
                    5,
                    vec![permission("invoices", PermissionCategory::Billing)],
                ),
                role(
                    "r-editor",
                    "Editor",
                    false,
                    3,
                    vec![permission("articles", PermissionCategory::ContentManagement)],
                ),
            ],
            ..RolesState::default()
        }
    }

    #[test]
    fn test_empty_query_all_filter_returns_everything_sorted() {
        let state = seeded_state();
        let names: Vec<String> = filtered_roles(&state).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Administrator", "Billing clerk", "Editor"]);
    }

    #[test]
    fn test_view_is_idempotent_for_unchanged_state() {
        let state = seeded_state();
        assert_eq!(filtered_roles(&state), filtered_roles(&state));
    }

    #[test]
    fn test_query_matches_permission_fields() {
        let mut state = seeded_state();
        state.search_query = "INVOICE".to_string();
        let names: Vec<String> = filtered_roles(&state).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Billing clerk"]);
    }

    #[test]
    fn test_system_and_custom_filters_split_on_flag() {
        let mut state = seeded_state();
        state.filter = RoleFilter::System;
        assert_eq!(filtered_roles(&state).len(), 1);
        state.filter = RoleFilter::Custom;
        assert_eq!(filtered_roles(&state).len(), 2);
    }

    #[test]
    fn test_category_filter_requires_matching_permission() {
        let mut state = seeded_state();
        state.filter = RoleFilter::Category(PermissionCategory::Billing);
        let names: Vec<String> = filtered_roles(&state).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Billing clerk"]);

        state.filter = RoleFilter::Category(PermissionCategory::Reports);
        assert!(filtered_roles(&state).is_empty());
    }

    #[test]
    fn test_user_count_sorts_descending() {
        let mut state = seeded_state();
        state.sort_by = RoleSort::UserCount;
        let counts: Vec<usize> = filtered_roles(&state)
            .into_iter()
            .map(|r| r.user_count)
            .collect();
        assert_eq!(counts, vec![5, 3, 2]);
    }

    #[test]
    fn test_updated_at_sorts_most_recent_first() {
        let mut state = seeded_state();
        state.sort_by = RoleSort::UpdatedAt;
        let ids: Vec<String> = filtered_roles(&state).into_iter().map(|r| r.id).collect();
        // user_count seeds the day of month: 5 -> 06th, 3 -> 04th, 2 -> 03rd.
        assert_eq!(ids, vec!["r-billing", "r-editor", "r-admin"]);
    }

    #[test]
    fn test_stable_sort_keeps_stored_order_on_equal_keys() {
        let mut state = seeded_state();
        for role in &mut state.roles {
            role.user_count = 1;
        }
        state.sort_by = RoleSort::UserCount;
        let ids: Vec<String> = filtered_roles(&state).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["r-admin", "r-billing", "r-editor"]);
    }
}
