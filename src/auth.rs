//! Dashboard password gate
//!
//! This only keeps casual visitors out of the editor. The unlock flag and the
//! password live in the same store as the content, so anyone with access to
//! the store can bypass it.

use sha2::{Digest, Sha256};

use crate::storage::{Storage, DASHBOARD_AUTH_KEY, DASHBOARD_PASSWORD_KEY};
use crate::{Error, Result};

const DIGEST_PREFIX: &str = "sha256:";

fn digest(password: &str) -> String {
    format!("{}{}", DIGEST_PREFIX, hex::encode(Sha256::digest(password.as_bytes())))
}

#[derive(Debug, Clone)]
pub struct Auth {
    storage: Storage,
    default_password: String,
    min_password_len: usize,
}

impl Auth {
    pub fn new(storage: Storage, default_password: impl Into<String>, min_password_len: usize) -> Self {
        Self {
            storage,
            default_password: default_password.into(),
            min_password_len,
        }
    }

    /// Whether `candidate` matches the stored password, or the default one
    /// when none has been set. Older stores keep the password in plain text.
    fn matches(&self, candidate: &str) -> bool {
        match self.storage.get_raw(DASHBOARD_PASSWORD_KEY) {
            Some(stored) if stored.starts_with(DIGEST_PREFIX) => stored == digest(candidate),
            Some(stored) if !stored.is_empty() => stored == candidate,
            _ => candidate == self.default_password,
        }
    }

    pub fn login(&self, password: &str) -> Result<()> {
        if !self.matches(password) {
            log::warn!("auth: rejected dashboard login");
            return Err(Error::AuthError("incorrect password".into()));
        }
        if !self.storage.set_raw(DASHBOARD_AUTH_KEY, "true") {
            return Err(Error::Storage("failed to record login".into()));
        }
        log::info!("auth: dashboard unlocked");
        Ok(())
    }

    pub fn logout(&self) -> bool {
        self.storage.remove(DASHBOARD_AUTH_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.storage.get_raw(DASHBOARD_AUTH_KEY).as_deref() == Some("true")
    }

    /// Error unless the dashboard is unlocked.
    pub fn require(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(Error::AuthError("log in to the dashboard first".into()))
        }
    }

    pub fn change_password(&self, new_password: &str) -> Result<()> {
        let new_password = new_password.trim();
        if new_password.is_empty() {
            return Err(Error::InvalidPassword("enter a new password".into()));
        }
        if new_password.chars().count() < self.min_password_len {
            return Err(Error::InvalidPassword(format!(
                "must be at least {} characters",
                self.min_password_len
            )));
        }
        if !self.storage.set_raw(DASHBOARD_PASSWORD_KEY, &digest(new_password)) {
            return Err(Error::Storage("failed to save password".into()));
        }
        log::info!("auth: dashboard password changed");
        Ok(())
    }
}
