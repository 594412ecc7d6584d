use anyhow::{anyhow, Context};
use common::{
    config::ShellConfig,
    gate::{plan_page, ControllerState, PagePlan, SidebarModel},
    menu::MenuCatalog,
    session::{logout, PageNavigator, SessionReader},
};
use web_sys::Document;
use yew::prelude::*;

use crate::{
    components::{Sidebar, SidebarProps, Topbar, TopbarProps},
    shell::{self, PageShell, ShellError},
    storage::{current_path, BrowserNavigator, LocalSessionStore},
};

/// Deployed defaults, optionally overridden when the wasm is built.
pub fn shell_config() -> ShellConfig {
    let mut config = ShellConfig::default();
    if let Some(name) = option_env!("CASENAV_APP_NAME") {
        config.app_name = name;
        config.default_title = name;
    }
    if let Some(path) = option_env!("CASENAV_LOGIN_PATH") {
        config.login_path = path;
        config.public_pages.push(path);
    }
    if let Some(path) = option_env!("CASENAV_LANDING_PATH") {
        config.landing_path = path;
        config.public_pages.push(path);
    }
    if let Some(href) = option_env!("CASENAV_ICON_CSS") {
        config.icon_stylesheet = href;
    }
    config
}

/// Runs the controller now, or once the DOM is parsed if the page is still loading.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document, sidebar not started");
        return;
    };
    // read through Reflect, web-sys types this attribute differently across versions
    let ready_state = js_sys::Reflect::get(&document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string());
    if ready_state.as_deref() == Some("loading") {
        gloo::events::EventListener::once(&document, "DOMContentLoaded", |_| run_logged())
            .forget();
    } else {
        run_logged();
    }
}

fn run_logged() {
    match run() {
        Ok(state) => log::debug!("sidebar controller finished in {state:?}"),
        Err(e) => log::error!("sidebar controller failed: {e:#}"),
    }
}

pub fn run() -> anyhow::Result<ControllerState> {
    let config = shell_config();
    let session = SessionReader::new(&LocalSessionStore, &config.keys).read();
    let path = current_path();

    let plan = plan_page(&session, &path, MenuCatalog::global(), &config);
    log::debug!("{path}: {:?}", plan.state());
    match plan {
        PagePlan::Redirect(to) => {
            BrowserNavigator.navigate(&to);
            Ok(ControllerState::Unauthenticated)
        }
        PagePlan::Idle => Ok(ControllerState::Unauthenticated),
        PagePlan::Build(model) => {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| anyhow!("no document to build the sidebar in"))?;
            match mount(&document, model, config) {
                Ok(()) => Ok(ControllerState::AuthenticatedReady),
                Err(ShellError::MissingBody) => {
                    log::warn!("page has no body, sidebar skipped");
                    Ok(ControllerState::AuthenticatedBuilding)
                }
                Err(e) => Err(e).context("building page shell"),
            }
        }
    }
}

/// Builds the shell around the page and renders the sidebar and topbar into it.
pub fn mount(document: &Document, model: SidebarModel, config: ShellConfig) -> Result<(), ShellError> {
    shell::ensure_icon_stylesheet(document, config.icon_stylesheet)?;
    let page = PageShell::build(document)?;
    if !page.detached_scripts.is_empty() {
        log::debug!(
            "{} inline scripts were detached from the page body, {} nodes kept",
            page.detached_scripts.len(),
            page.moved
        );
    }

    let on_toggle = {
        let document = document.clone();
        Callback::from(move |_: MouseEvent| shell::toggle_sidebar(&document))
    };
    yew::Renderer::<Topbar>::with_root_and_props(
        page.topbar.clone(),
        TopbarProps {
            title: model.title.clone().into(),
            on_toggle,
        },
    )
    .render();

    let app_name = config.app_name.into();
    let app_subtitle = config.app_subtitle.into();
    let on_logout = Callback::from(move |_: ()| {
        log::info!("signing out");
        logout(&LocalSessionStore, &BrowserNavigator, &config);
    });
    yew::Renderer::<Sidebar>::with_root_and_props(
        page.sidebar.clone(),
        SidebarProps {
            model,
            app_name,
            app_subtitle,
            on_logout,
        },
    )
    .render();

    shell::wire_overlay(document, &page);
    Ok(())
}
