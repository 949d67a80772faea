//! Navigation table shared by the sidebar and the route guard.

use crate::system::auth::access::is_allowed;
use crate::system::auth::role::Role;
use serde::{Deserialize, Serialize};

/// Known navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppRoute {
    Overview,
    Orders,
    Inventory,
    Customers,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Overview => "/",
            AppRoute::Orders => "/orders",
            AppRoute::Inventory => "/inventory",
            AppRoute::Customers => "/customers",
        }
    }

    /// Trailing slashes are ignored, anything else must match exactly.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(AppRoute::Overview),
            "/orders" => Some(AppRoute::Orders),
            "/inventory" => Some(AppRoute::Inventory),
            "/customers" => Some(AppRoute::Customers),
            _ => None,
        }
    }

    /// Landing target used for redirects after a denied navigation
    pub fn default_landing() -> Self {
        AppRoute::Overview
    }

    /// Roles permitted to enter the route, taken from the navigation table.
    pub fn required_roles(&self) -> &'static [Role] {
        NAVIGATION
            .iter()
            .find(|entry| entry.route == *self)
            .map(|entry| entry.allowed_roles)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub name: &'static str,
    pub route: AppRoute,
    pub icon: &'static str,
    pub allowed_roles: &'static [Role],
}

impl NavigationEntry {
    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

pub static NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry {
        name: "Overview",
        route: AppRoute::Overview,
        icon: "layout-dashboard",
        allowed_roles: &[Role::President, Role::Director],
    },
    NavigationEntry {
        name: "Orders",
        route: AppRoute::Orders,
        icon: "shopping-cart",
        allowed_roles: &[Role::President],
    },
    NavigationEntry {
        name: "Inventory",
        route: AppRoute::Inventory,
        icon: "package",
        allowed_roles: &[Role::President, Role::Director],
    },
    NavigationEntry {
        name: "Customers",
        route: AppRoute::Customers,
        icon: "users",
        allowed_roles: &[Role::President],
    },
];

/// Entries the role may see, in declaration order.
pub fn visible_entries(role: Role) -> Vec<&'static NavigationEntry> {
    NAVIGATION
        .iter()
        .filter(|entry| is_allowed(role, entry.allowed_roles))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_president_sees_everything() {
        let names: Vec<_> = visible_entries(Role::President)
            .iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Overview", "Orders", "Inventory", "Customers"]);
    }

    #[test]
    fn test_director_sees_shared_entries_only() {
        let names: Vec<_> = visible_entries(Role::Director)
            .iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Overview", "Inventory"]);
    }

    #[test]
    fn test_path_parsing() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Overview));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Overview));
        assert_eq!(AppRoute::from_path("/orders/"), Some(AppRoute::Orders));
        assert_eq!(AppRoute::from_path("/orders/42"), None);
        assert_eq!(AppRoute::from_path("/settings"), None);
    }

    #[test]
    fn test_required_roles_follow_table() {
        assert_eq!(AppRoute::Orders.required_roles(), &[Role::President]);
        assert_eq!(
            AppRoute::Inventory.required_roles(),
            &[Role::President, Role::Director]
        );
    }
}
