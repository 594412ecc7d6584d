use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Node};

pub const SHELL_MARKER: &str = "data-casenav-shell";
pub const SIDEBAR_ID: &str = "app-sidebar";
pub const OVERLAY_ID: &str = "sidebar-overlay";
pub const CONTENT_ID: &str = "app-content";
pub const OPEN_CLASS: &str = "open";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    #[error("page shell is already built on this document")]
    AlreadyBuilt,
    #[error("document has no body")]
    MissingBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for ShellError {
    fn from(e: JsValue) -> Self {
        ShellError::Dom(format!("{e:?}"))
    }
}

/// The containers wrapped around the page's own content.
///
/// Script elements found in the original body are NOT moved into `page_inner`.
/// They are detached and returned in `detached_scripts`; scripts that already
/// ran keep their effects, but pages must not rely on inline scripts running
/// again after the shell is built.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub overlay: Element,
    pub sidebar: Element,
    pub content: Element,
    pub topbar: Element,
    pub page_inner: Element,
    pub detached_scripts: Vec<Node>,
    pub moved: usize,
}

fn is_script(node: &Node) -> bool {
    node.node_type() == Node::ELEMENT_NODE && node.node_name().eq_ignore_ascii_case("script")
}

fn div(document: &Document, id: Option<&str>, class: Option<&str>) -> Result<Element, ShellError> {
    let el = document.create_element("div")?;
    if let Some(id) = id {
        el.set_id(id);
    }
    if let Some(class) = class {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn is_built(document: &Document) -> bool {
    document
        .body()
        .map(|b| b.has_attribute(SHELL_MARKER))
        .unwrap_or(false)
        || document.get_element_by_id(SIDEBAR_ID).is_some()
}

impl PageShell {
    /// Moves every non-script child of `<body>` into `#app-content > .page-inner`
    /// and lays the body out as overlay, sidebar, content.
    ///
    /// Fails with [`ShellError::AlreadyBuilt`] without touching the DOM if the
    /// shell is already there.
    pub fn build(document: &Document) -> Result<Self, ShellError> {
        let body = document.body().ok_or(ShellError::MissingBody)?;
        if is_built(document) {
            return Err(ShellError::AlreadyBuilt);
        }

        let overlay = div(document, Some(OVERLAY_ID), None)?;
        let sidebar = div(document, Some(SIDEBAR_ID), None)?;
        let content = div(document, Some(CONTENT_ID), None)?;
        let topbar = div(document, None, Some("content-topbar"))?;
        let page_inner = div(document, None, Some("page-inner"))?;

        // snapshot first, child_nodes() is live
        let children = body.child_nodes();
        let nodes = (0..children.length())
            .filter_map(|i| children.get(i))
            .collect::<Vec<_>>();

        let mut detached_scripts = Vec::new();
        let mut moved = 0;
        for node in nodes {
            if is_script(&node) {
                body.remove_child(&node)?;
                detached_scripts.push(node);
            } else {
                page_inner.append_child(&node)?;
                moved += 1;
            }
        }

        content.append_child(&topbar)?;
        content.append_child(&page_inner)?;

        body.append_child(&overlay)?;
        body.append_child(&sidebar)?;
        body.append_child(&content)?;
        body.set_attribute(SHELL_MARKER, "")?;

        log::debug!(
            "page shell built: {moved} nodes moved, {} scripts detached",
            detached_scripts.len()
        );

        Ok(Self {
            overlay,
            sidebar,
            content,
            topbar,
            page_inner,
            detached_scripts,
            moved,
        })
    }
}

fn open_targets(document: &Document) -> Vec<Element> {
    [SIDEBAR_ID, OVERLAY_ID]
        .iter()
        .filter_map(|id| document.get_element_by_id(id))
        .collect()
}

/// Flips the mobile "open" state on the sidebar and overlay. Missing elements are skipped.
pub fn toggle_sidebar(document: &Document) {
    for el in open_targets(document) {
        if let Err(e) = el.class_list().toggle(OPEN_CLASS) {
            log::warn!("failed to toggle sidebar: {e:?}");
        }
    }
}

pub fn close_sidebar(document: &Document) {
    for el in open_targets(document) {
        if let Err(e) = el.class_list().remove_1(OPEN_CLASS) {
            log::warn!("failed to close sidebar: {e:?}");
        }
    }
}

/// Clicking the dimmed overlay closes the sidebar for the rest of the page's life.
pub fn wire_overlay(document: &Document, shell: &PageShell) {
    let document = document.clone();
    gloo::events::EventListener::new(&shell.overlay, "click", move |_| {
        close_sidebar(&document);
    })
    .forget();
}

/// Adds the icon font stylesheet to `<head>` unless the page already has it.
pub fn ensure_icon_stylesheet(document: &Document, href: &str) -> Result<(), ShellError> {
    const LINK_ID: &str = "fa-cdn";
    if document.get_element_by_id(LINK_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        log::debug!("no <head>, skipping icon stylesheet");
        return Ok(());
    };
    let link = document.create_element("link")?;
    link.set_id(LINK_ID);
    link.set_attribute("rel", "stylesheet")?;
    link.set_attribute("href", href)?;
    head.append_child(&link)?;
    Ok(())
}
