//! Roles and permissions domain module.
//!
//! Role catalogue with a filter/sort/search pipeline and bulk selection
//! state. Role data is display-only in this layer; nothing here enforces
//! authorization.
//!
//! # Module Structure
//!
//! - `model`: Entities and criteria (`Role`, `Permission`, `RoleFilter`, ...)
//! - `store`: State shape and mutation entry points (`RolesStore`)
//! - `view`: The filtered/sorted projection (`filtered_roles`)

mod model;
mod store;
pub mod view;

// Re-export public API
pub use model::{Permission, PermissionCategory, Role, RoleFilter, RoleSort, ViewMode};
pub use store::{RolesState, RolesStore};
