use std::{cell::RefCell, collections::HashMap};

use log::{debug, warn};

use crate::{
    config::{SessionKeys, ShellConfig},
    structs::{Role, Session},
};

/// The key-value store the rest of the application keeps the session in.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn clear(&self);
}

/// Something that can send the browser somewhere else.
pub trait PageNavigator {
    fn navigate(&self, path: &str);
}

pub struct SessionReader<'a, S: SessionStore> {
    store: &'a S,
    keys: &'a SessionKeys,
}

impl<'a, S: SessionStore> SessionReader<'a, S> {
    pub fn new(store: &'a S, keys: &'a SessionKeys) -> Self {
        Self { store, keys }
    }

    pub fn read(&self) -> Session {
        let role = match self.store.get_item(self.keys.role) {
            Some(raw) if !raw.trim().is_empty() => match raw.parse::<Role>() {
                Ok(role) => Some(role),
                Err(e) => {
                    warn!("{e}, treating session as signed out");
                    None
                }
            },
            _ => None,
        };
        let session = Session {
            role,
            name: self
                .store
                .get_item(self.keys.name)
                .map(|n| n.trim().to_owned())
                .unwrap_or_default(),
            email: self.store.get_item(self.keys.email).unwrap_or_default(),
            has_token: self
                .store
                .get_item(self.keys.token)
                .map(|t| !t.is_empty())
                .unwrap_or(false),
        };
        debug!(
            "session: role={:?} has_token={}",
            session.role, session.has_token
        );
        session
    }
}

/// Wipes the whole session and sends the user back to the login page.
pub fn logout<S: SessionStore, N: PageNavigator>(store: &S, navigator: &N, config: &ShellConfig) {
    store.clear();
    navigator.navigate(config.login_path);
}

/// In-memory store, used in tests and anywhere local storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(items: &[(&str, &str)]) -> Self {
        Self {
            items: RefCell::new(
                items
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }

    pub fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

/// Remembers where it was asked to go instead of going there.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }
}

impl PageNavigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(role: &str) -> MemoryStore {
        MemoryStore::with(&[
            ("token", "abc"),
            ("userRole", role),
            ("userName", "Jane Doe"),
            ("userEmail", "jane@firm.test"),
        ])
    }

    #[test]
    fn reads_a_complete_session() {
        let store = signed_in("advocate");
        let keys = SessionKeys::default();
        let session = SessionReader::new(&store, &keys).read();
        assert_eq!(session.role, Some(Role::Advocate));
        assert_eq!(session.name, "Jane Doe");
        assert_eq!(session.email, "jane@firm.test");
        assert!(session.has_token);
        assert!(session.is_authenticated());
    }

    #[test]
    fn admin_short_form_is_the_administrator() {
        let store = signed_in(" Admin ");
        let keys = SessionKeys::default();
        let session = SessionReader::new(&store, &keys).read();
        assert_eq!(session.role, Some(Role::Administrator));
    }

    #[test]
    fn missing_blank_or_unknown_role_is_signed_out() {
        let keys = SessionKeys::default();
        for store in [
            MemoryStore::default(),
            signed_in(""),
            signed_in("   "),
            signed_in("PARALEGAL"),
        ] {
            let session = SessionReader::new(&store, &keys).read();
            assert_eq!(session.role, None);
            assert!(!session.is_authenticated());
        }
    }

    #[test]
    fn missing_name_falls_back_for_display_only() {
        let store = MemoryStore::with(&[("userRole", "CLERK")]);
        let keys = SessionKeys::default();
        let session = SessionReader::new(&store, &keys).read();
        assert_eq!(session.name, "");
        assert_eq!(session.display_name(), "User");
        assert!(!session.has_token);
    }

    #[test]
    fn logout_clears_everything_and_goes_to_login() {
        let store = signed_in("CLIENT");
        store.set_item("unrelated", "value");
        let nav = RecordingNavigator::default();
        let config = ShellConfig::default();

        logout(&store, &nav, &config);

        assert!(store.is_empty());
        assert_eq!(nav.last().as_deref(), Some("/login.html"));
        assert_eq!(nav.visited.borrow().len(), 1);
    }
}
