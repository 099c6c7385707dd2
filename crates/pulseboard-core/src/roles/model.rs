//! Roles and permissions domain model.

use serde::{Deserialize, Serialize};

/// The closed set of permission categories the dashboard exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionCategory {
    UserManagement,
    ContentManagement,
    Billing,
    Reports,
    Settings,
}

impl PermissionCategory {
    /// Human-readable label for filter chips and headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UserManagement => "User management",
            Self::ContentManagement => "Content management",
            Self::Billing => "Billing",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }
}

/// A single grantable capability assigned to a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: String,
    /// The resource the permission covers ("students", "invoices", ...).
    pub resource: String,
    pub category: PermissionCategory,
    pub description: String,
}

/// A role in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Unique role identifier (UUID format).
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: Vec<Permission>,
    /// Users currently holding this role; display data, not enforced here.
    pub user_count: usize,
    /// System roles ship with the product and cannot be deleted.
    pub is_system_role: bool,
    pub is_active: bool,
    /// Timestamp when the role was created (RFC 3339 format).
    pub created_at: String,
    /// Timestamp when the role was last changed (RFC 3339 format).
    pub updated_at: String,
}

/// Category filter for the role list.
///
/// `System`/`Custom` split on the system flag; `Category` keeps roles with
/// at least one permission in that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleFilter {
    All,
    System,
    Custom,
    Category(PermissionCategory),
}

/// Sort key for the role list.
///
/// Name sorts ascending lexicographic; the other keys sort descending
/// (largest count / most recent first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleSort {
    Name,
    UserCount,
    CreatedAt,
    UpdatedAt,
}

/// How the role list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Grid,
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_serde_tags() {
        assert_eq!(
            serde_json::to_value(RoleFilter::Category(PermissionCategory::Billing)).unwrap(),
            serde_json::json!({ "category": "billing" })
        );
        assert_eq!(serde_json::to_value(RoleFilter::All).unwrap(), "all");
        assert_eq!(
            serde_json::to_value(RoleSort::UserCount).unwrap(),
            "user-count"
        );
    }

    #[test]
    fn test_category_labels_are_exhaustive() {
        let categories = [
            PermissionCategory::UserManagement,
            PermissionCategory::ContentManagement,
            PermissionCategory::Billing,
            PermissionCategory::Reports,
            PermissionCategory::Settings,
        ];
        for category in categories {
            assert!(!category.label().is_empty());
        }
    }
}
