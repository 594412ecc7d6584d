use log::debug;

use crate::{
    active::{normalize_path, path_matches, resolve, ResolvedMenu},
    config::ShellConfig,
    initials,
    menu::MenuCatalog,
    structs::{Role, Session},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Unauthenticated,
    AuthenticatedBuilding,
    AuthenticatedReady,
}

/// Everything the sidebar needs to render, computed before the DOM is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarModel {
    pub role: Role,
    pub name: String,
    pub initials: String,
    pub menu: ResolvedMenu,
    /// Active entry label, or the configured default.
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PagePlan {
    /// Signed out on a protected page.
    Redirect(String),
    /// Signed out on a public page; leave the page alone.
    Idle,
    Build(SidebarModel),
}

impl PagePlan {
    pub fn state(&self) -> ControllerState {
        match self {
            PagePlan::Redirect(_) | PagePlan::Idle => ControllerState::Unauthenticated,
            PagePlan::Build(_) => ControllerState::AuthenticatedBuilding,
        }
    }
}

pub fn is_public_page(current_path: &str, config: &ShellConfig) -> bool {
    let current = normalize_path(current_path, config.landing_path);
    config
        .public_pages
        .iter()
        .any(|p| path_matches(&current, &normalize_path(p, config.landing_path)))
}

pub fn plan_page(
    session: &Session,
    current_path: &str,
    catalog: &MenuCatalog,
    config: &ShellConfig,
) -> PagePlan {
    let role = match session.role {
        Some(role) => role,
        None if is_public_page(current_path, config) => {
            debug!("signed out on public page {current_path}");
            return PagePlan::Idle;
        }
        None => {
            debug!("signed out on {current_path}, sending to login");
            return PagePlan::Redirect(config.login_path.to_owned());
        }
    };

    let menu = resolve(current_path, catalog.menu_for(role), config.landing_path);
    let title = menu
        .active_entry()
        .map(|e| e.label.clone())
        .unwrap_or_else(|| config.default_title.to_owned());

    PagePlan::Build(SidebarModel {
        role,
        name: session.display_name().to_owned(),
        initials: initials(&session.name),
        menu,
        title,
    })
}
