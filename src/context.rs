//! Application Context
//!
//! Auth state and in-app navigation, provided via the Leptos Context API.

use leptos::prelude::*;

use crate::session::{self, Session};

const TOKEN_KEY: &str = "token";

/// The screen currently shown. Navigation is plain view switching; there
/// is no URL router.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Landing,
    Login,
    Register,
    Dashboard,
    Project(u32),
    Task { project_id: u32, task_id: u32 },
    Summary,
    TaskList { status: String, user_id: Option<u32> },
}

impl View {
    /// Everything past the login/register screens needs a session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, View::Landing | View::Login | View::Register)
    }
}

/// Navigation signals provided via context
#[derive(Clone, Copy)]
pub struct Nav {
    pub current: ReadSignal<View>,
    set_current: WriteSignal<View>,
}

impl Nav {
    pub fn new(current: (ReadSignal<View>, WriteSignal<View>)) -> Self {
        Self {
            current: current.0,
            set_current: current.1,
        }
    }

    pub fn go(&self, view: View) {
        self.set_current.set(view);
    }
}

/// Auth signals provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Decoded claims of the signed-in user - read
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
    /// Raw bearer token sent with every request - read
    pub token: ReadSignal<Option<String>>,
    set_token: WriteSignal<Option<String>>,
}

impl AuthContext {
    pub fn new(
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
        token: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            token: token.0,
            set_token: token.1,
        }
    }

    /// Restore the session from a token stored by an earlier visit.
    pub fn restore(&self) {
        let Some(stored) = local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        else {
            return;
        };
        match session::decode_token(&stored) {
            Some(decoded) => {
                self.set_session.set(Some(decoded));
                self.set_token.set(Some(stored));
            }
            // A token we can no longer read is useless; drop it
            None => {
                if let Some(storage) = local_storage() {
                    let _ = storage.remove_item(TOKEN_KEY);
                }
            }
        }
    }

    /// Store a fresh token from a login response. Returns false if the
    /// token payload does not decode.
    pub fn login(&self, token: String) -> bool {
        let Some(decoded) = session::decode_token(&token) else {
            return false;
        };
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &token);
        }
        self.set_session.set(Some(decoded));
        self.set_token.set(Some(token));
        true
    }

    pub fn logout(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
        self.set_session.set(None);
        self.set_token.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.get_untracked().is_some()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_auth() {
        assert!(!View::Landing.requires_auth());
        assert!(!View::Login.requires_auth());
        assert!(!View::Register.requires_auth());
        assert!(View::Dashboard.requires_auth());
        assert!(View::Project(1).requires_auth());
        assert!(View::Task { project_id: 1, task_id: 2 }.requires_auth());
        assert!(View::Summary.requires_auth());
        assert!(View::TaskList { status: "due_soon".to_string(), user_id: None }.requires_auth());
    }
}
