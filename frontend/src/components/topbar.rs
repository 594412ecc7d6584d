use yew::prelude::*;

#[function_component]
pub fn Topbar(props: &Props) -> Html {
    html! {
        <>
            <button class="topbar-menu-toggle" id="sidebar-toggle" onclick={props.on_toggle.clone()}>
                <i class="fas fa-bars"></i>
            </button>
            <span class="topbar-page-title" id="topbar-page-title">{props.title.clone()}</span>
        </>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub on_toggle: Callback<MouseEvent>,
}
