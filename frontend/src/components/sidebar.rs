use common::{gate::SidebarModel, structs::NavEntry};
use yew::prelude::*;

#[function_component]
pub fn Sidebar(props: &Props) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_logout.emit(());
        })
    };

    html! {
        <>
            <div class="sidebar-brand">
                <div class="sidebar-brand-icon"><i class="fas fa-balance-scale"></i></div>
                <div class="sidebar-brand-text">
                    <h2>{props.app_name.clone()}</h2>
                    <p>{props.app_subtitle.clone()}</p>
                </div>
            </div>

            <div class="sidebar-role-badge">
                <div class="avatar">{props.model.initials.clone()}</div>
                <div class="info">
                    <div class="name">{props.model.name.clone()}</div>
                    <div class="role">{props.model.role.label()}</div>
                </div>
            </div>

            <div class="sidebar-section-label">{"Navigation"}</div>
            <nav class="sidebar-nav">
                {
                    for props.model.menu.iter().map(|(entry, active)| html! {
                        <NavLink entry={entry.clone()} active={active} />
                    })
                }
            </nav>

            <div class="sidebar-footer">
                <button onclick={on_logout}>
                    <i class="fas fa-sign-out-alt"></i>{" Sign Out"}
                </button>
            </div>
        </>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub model: SidebarModel,
    pub app_name: AttrValue,
    pub app_subtitle: AttrValue,
    pub on_logout: Callback<()>,
}

#[function_component]
fn NavLink(props: &NavLinkProps) -> Html {
    html! {
        <a href={props.entry.path.clone()} class={classes!(props.active.then_some("active"))}>
            <i class={props.entry.icon.clone()}></i>{format!(" {}", props.entry.label)}
        </a>
    }
}

#[derive(Clone, Properties, PartialEq)]
struct NavLinkProps {
    entry: NavEntry,
    active: bool,
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::{cell::Cell, rc::Rc};

    use common::{config::ShellConfig, gate::plan_page, gate::PagePlan, menu::MenuCatalog};
    use common::structs::{Role, Session};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    use super::*;

    fn model(path: &str) -> SidebarModel {
        let session = Session {
            role: Some(Role::Advocate),
            name: "Jane Doe".to_owned(),
            email: String::new(),
            has_token: true,
        };
        match plan_page(&session, path, MenuCatalog::global(), &ShellConfig::default()) {
            PagePlan::Build(model) => model,
            other => panic!("unexpected plan {other:?}"),
        }
    }

    #[wasm_bindgen_test]
    async fn renders_identity_links_and_one_active_entry() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();

        let signed_out = Rc::new(Cell::new(false));
        let on_logout = {
            let signed_out = signed_out.clone();
            Callback::from(move |_: ()| signed_out.set(true))
        };
        yew::Renderer::<Sidebar>::with_root_and_props(
            root.clone(),
            Props {
                model: model("/advocate-cases.html"),
                app_name: "Smart Legal".into(),
                app_subtitle: "Case Management".into(),
                on_logout,
            },
        )
        .render();
        TimeoutFuture::new(0).await;

        let links = root.query_selector_all(".sidebar-nav a").unwrap();
        assert_eq!(links.length(), 6);
        let active = root.query_selector_all(".sidebar-nav a.active").unwrap();
        assert_eq!(active.length(), 1);
        let active = active.get(0).unwrap().dyn_into::<web_sys::Element>().unwrap();
        assert_eq!(active.get_attribute("href").as_deref(), Some("/advocate-cases.html"));
        assert_eq!(active.text_content().unwrap_or_default().trim(), "My Cases");

        let avatar = root.query_selector(".avatar").unwrap().unwrap();
        assert_eq!(avatar.text_content().as_deref(), Some("JD"));
        let role = root.query_selector(".info .role").unwrap().unwrap();
        assert_eq!(role.text_content().as_deref(), Some("Advocate"));

        root.query_selector(".sidebar-footer button")
            .unwrap()
            .unwrap()
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap()
            .click();
        TimeoutFuture::new(0).await;
        assert!(signed_out.get());

        root.remove();
    }

    #[wasm_bindgen_test]
    async fn unlisted_page_renders_without_active_entry() {
        let root = gloo::utils::document().create_element("div").unwrap();
        yew::Renderer::<Sidebar>::with_root_and_props(
            root.clone(),
            Props {
                model: model("/case-details.html"),
                app_name: "Smart Legal".into(),
                app_subtitle: "Case Management".into(),
                on_logout: Callback::noop(),
            },
        )
        .render();
        TimeoutFuture::new(0).await;

        assert_eq!(root.query_selector_all(".sidebar-nav a").unwrap().length(), 6);
        assert_eq!(root.query_selector_all(".sidebar-nav a.active").unwrap().length(), 0);
    }
}
