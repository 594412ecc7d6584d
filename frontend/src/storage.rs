use common::session::{PageNavigator, SessionStore};
use gloo_storage::Storage;

/// The login page writes plain strings, not JSON, so reads go through the raw
/// `web_sys::Storage` instead of `LocalStorage::get`.
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        gloo_storage::LocalStorage::raw()
            .get_item(key)
            .ok()
            .flatten()
    }

    fn clear(&self) {
        gloo_storage::LocalStorage::clear();
    }
}

pub struct BrowserNavigator;

impl PageNavigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        match web_sys::window() {
            Some(w) => {
                if let Err(e) = w.location().set_href(path) {
                    log::error!("Error redirecting to {path}: {e:?}");
                }
            }
            None => log::error!("no window to redirect to {path}"),
        }
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}
