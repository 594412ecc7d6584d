use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::structs::{NavEntry, Role};

lazy_static! {
    static ref STANDARD: MenuCatalog = MenuCatalog::standard();
}

/// Role to ordered menu. Roles outside the closed set get an empty menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    menus: HashMap<Role, Vec<NavEntry>>,
}

impl MenuCatalog {
    pub fn new(menus: HashMap<Role, Vec<NavEntry>>) -> Self {
        Self { menus }
    }

    /// The process-wide catalog, built on first use.
    pub fn global() -> &'static MenuCatalog {
        &STANDARD
    }

    pub fn menu_for(&self, role: Role) -> &[NavEntry] {
        self.menus.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn menu_for_name(&self, role: &str) -> &[NavEntry] {
        match role.parse::<Role>() {
            Ok(role) => self.menu_for(role),
            Err(_) => &[],
        }
    }

    pub fn standard() -> Self {
        let dashboard = |path: &str| NavEntry::new("Dashboard", "fas fa-tachometer-alt", path);
        let hearings = || NavEntry::new("Hearings", "fas fa-calendar-alt", "/hearings.html");
        let tasks = || NavEntry::new("Tasks", "fas fa-tasks", "/tasks.html");
        let invoices = || NavEntry::new("Invoices", "fas fa-file-invoice-dollar", "/invoices.html");
        let notices = || NavEntry::new("Legal Notices", "fas fa-envelope-open-text", "/notices.html");
        let messages = || NavEntry::new("Messages", "fas fa-comments", "/messages.html");
        let profile = || NavEntry::new("My Profile", "fas fa-id-badge", "/profile.html");

        let mut menus = HashMap::new();
        menus.insert(
            Role::Administrator,
            vec![
                dashboard("/admin-dashboard.html"),
                NavEntry::new("Cases", "fas fa-gavel", "/cases.html"),
                hearings(),
                tasks(),
                invoices(),
                notices(),
                messages(),
                NavEntry::new("Reports", "fas fa-chart-bar", "/reports.html"),
                NavEntry::new("User Management", "fas fa-users", "/user-management.html"),
                profile(),
            ],
        );
        menus.insert(
            Role::Advocate,
            vec![
                dashboard("/advocate-dashboard.html"),
                NavEntry::new("My Cases", "fas fa-gavel", "/advocate-cases.html"),
                hearings(),
                tasks(),
                messages(),
                profile(),
            ],
        );
        menus.insert(
            Role::Clerk,
            vec![
                dashboard("/clerk-dashboard.html"),
                NavEntry::new("Cases", "fas fa-gavel", "/clerk-cases.html"),
                hearings(),
                tasks(),
                notices(),
                messages(),
                profile(),
            ],
        );
        menus.insert(
            Role::Client,
            vec![
                dashboard("/client-dashboard.html"),
                NavEntry::new("My Cases", "fas fa-gavel", "/cases.html"),
                invoices(),
                messages(),
                profile(),
            ],
        );
        Self { menus }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_stable_menu() {
        let catalog = MenuCatalog::global();
        for role in Role::ALL {
            let first = catalog.menu_for(role);
            assert!(!first.is_empty(), "{role} has no menu");
            assert_eq!(first, catalog.menu_for(role));
            assert_eq!(first, MenuCatalog::standard().menu_for(role));
        }
    }

    #[test]
    fn menus_keep_their_order() {
        let labels = MenuCatalog::global()
            .menu_for(Role::Client)
            .iter()
            .map(|e| e.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["Dashboard", "My Cases", "Invoices", "Messages", "My Profile"]
        );
        assert_eq!(
            MenuCatalog::global().menu_for(Role::Administrator)[0].path,
            "/admin-dashboard.html"
        );
    }

    #[test]
    fn unknown_role_names_get_the_empty_menu() {
        let catalog = MenuCatalog::global();
        for name in ["", "PARALEGAL", "root", "admin-dashboard", "  "] {
            assert!(catalog.menu_for_name(name).is_empty(), "{name:?}");
        }
        assert_eq!(
            catalog.menu_for_name("clerk"),
            catalog.menu_for(Role::Clerk)
        );
    }

    #[test]
    fn partial_catalog_defaults_to_empty() {
        let mut menus = HashMap::new();
        menus.insert(
            Role::Clerk,
            vec![NavEntry::new("Home", "fas fa-home", "/clerk.html")],
        );
        let catalog = MenuCatalog::new(menus);
        assert_eq!(catalog.menu_for(Role::Clerk).len(), 1);
        assert!(catalog.menu_for(Role::Advocate).is_empty());
    }
}
