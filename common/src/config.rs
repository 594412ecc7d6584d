/// Keys the login page writes into local storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    pub token: &'static str,
    pub role: &'static str,
    pub name: &'static str,
    pub email: &'static str,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            token: "token",
            role: "userRole",
            name: "userName",
            email: "userEmail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub app_name: &'static str,
    pub app_subtitle: &'static str,
    /// Topbar title used when no menu entry matches the current page.
    pub default_title: &'static str,
    pub login_path: &'static str,
    /// What `/` is served as.
    pub landing_path: &'static str,
    /// Pages an unauthenticated visitor may stay on.
    pub public_pages: Vec<&'static str>,
    pub icon_stylesheet: &'static str,
    pub keys: SessionKeys,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "Smart Legal",
            app_subtitle: "Case Management",
            default_title: "Smart Legal CMS",
            login_path: "/login.html",
            landing_path: "/index.html",
            public_pages: vec!["/login.html", "/index.html", "/"],
            icon_stylesheet:
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css",
            keys: SessionKeys::default(),
        }
    }
}
