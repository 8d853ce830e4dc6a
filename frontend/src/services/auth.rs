//! Thin boundary to the hosted auth provider. Sign-in and sign-up
//! happen on the provider's pages; it deposits the session token and a
//! profile snapshot into local storage, and this module only reads
//! them.

use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

const TOKEN_KEY: &str = "session_token";
const USER_KEY: &str = "session_user";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

impl AuthSession {
    /// Loads the current session, if the auth provider has left one.
    pub fn load() -> Option<Self> {
        let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
        if token.is_empty() {
            return None;
        }
        let user: UserProfile = LocalStorage::get(USER_KEY).unwrap_or_default();
        Some(Self { token, user })
    }

    /// Best display name available: full name, then first name, then
    /// email, then a generic fallback.
    pub fn display_name(&self) -> String {
        self.user
            .full_name
            .clone()
            .or_else(|| self.user.first_name.clone())
            .or_else(|| self.user.email.clone())
            .unwrap_or_else(|| "Profile".to_string())
    }

    /// Clears the stored session and returns to the landing page.
    pub fn sign_out(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    }
}
