//! Access gate for the admin surface.
//!
//! Two fixed roles, each with an independently stored credential compared as
//! a plain string. The administrator credential is checked first, so the
//! administrator role wins if both credentials were ever set to the same
//! value. Session state persists under its own keys and survives restarts.

use crate::errors::AppResult;
use crate::models::session::{Role, Session};
use crate::store::defaults::{DEFAULT_ADMIN_PASSWORD, DEFAULT_EDITOR_PASSWORD};
use crate::store::{KeyValue, keys};

pub struct AccessGate<'a, B: KeyValue> {
    backend: &'a B,
}

impl<'a, B: KeyValue> AccessGate<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Seed the default credentials where none are stored yet. Existing
    /// credentials are left untouched.
    pub fn ensure_seeded(&self) -> AppResult<()> {
        if self.backend.get(keys::PWD_ADMIN).is_none() {
            self.backend.set(keys::PWD_ADMIN, DEFAULT_ADMIN_PASSWORD)?;
        }
        if self.backend.get(keys::PWD_EDITOR).is_none() {
            self.backend.set(keys::PWD_EDITOR, DEFAULT_EDITOR_PASSWORD)?;
        }
        Ok(())
    }

    /// Compare the submitted password against both stored credentials,
    /// administrator first. On a match the session is persisted and `true`
    /// returned; on no match the state is unchanged and `false` returned.
    pub fn login(&self, password: &str) -> AppResult<bool> {
        self.ensure_seeded()?;

        let role = if self.backend.get(keys::PWD_ADMIN).as_deref() == Some(password) {
            Role::Admin
        } else if self.backend.get(keys::PWD_EDITOR).as_deref() == Some(password) {
            Role::Editor
        } else {
            return Ok(false);
        };

        self.backend.set(keys::AUTH, "true")?;
        self.backend.set(keys::ROLE, role.to_store_str())?;
        Ok(true)
    }

    /// Clear the persisted session.
    pub fn logout(&self) -> AppResult<()> {
        self.backend.remove(keys::AUTH)?;
        self.backend.remove(keys::ROLE)?;
        Ok(())
    }

    /// Read the persisted session. An authenticated session with an unknown
    /// stored role degrades to editor.
    pub fn session(&self) -> Session {
        if self.backend.get(keys::AUTH).as_deref() != Some("true") {
            return Session::anonymous();
        }
        let role = self
            .backend
            .get(keys::ROLE)
            .and_then(|r| Role::from_store_str(&r))
            .unwrap_or(Role::Editor);
        Session {
            authenticated: true,
            role: Some(role),
        }
    }

    /// Rewrite the administrator credential. Permitted only for an
    /// authenticated administrator session; any other state is a no-op
    /// returning `false`. The editor credential cannot be changed here.
    pub fn change_password(&self, new_password: &str) -> AppResult<bool> {
        if !self.session().is_admin() {
            return Ok(false);
        }
        self.backend.set(keys::PWD_ADMIN, new_password)?;
        Ok(true)
    }
}
