//! Admin password gate.
//!
//! A single shared password compared locally, with the outcome persisted as a
//! boolean flag. It hides the admin screens from casual visitors; it does not
//! protect the content store, which checks its own write token.

use std::time::Duration;

use tracing::{info, warn};

use crate::error::PortfolioResult;
use crate::persist::{KeyValueStore, AUTH_KEY};

/// Pause before reporting a login result so the form does not flicker.
pub const LOGIN_DELAY: Duration = Duration::from_millis(300);

pub struct AuthGate<K: KeyValueStore> {
    secret: String,
    kv: K,
    authenticated: bool,
    delay: Duration,
}

impl<K: KeyValueStore> AuthGate<K> {
    /// Reads the persisted flag once, at construction.
    pub fn new(secret: impl Into<String>, kv: K) -> Self {
        let authenticated = matches!(kv.get(AUTH_KEY), Ok(Some(ref v)) if v == "true");
        Self {
            secret: secret.into(),
            kv,
            authenticated,
            delay: LOGIN_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Compare `input` to the secret after the login delay.
    ///
    /// Returns `Ok(false)` on a wrong password; the caller shows the inline
    /// message and clears the field.
    pub async fn login(&mut self, input: &str) -> PortfolioResult<bool> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if input != self.secret {
            warn!("Rejected admin login attempt");
            return Ok(false);
        }

        self.kv.set(AUTH_KEY, "true")?;
        self.authenticated = true;
        info!("Admin session started");
        Ok(true)
    }

    pub fn logout(&mut self) -> PortfolioResult<()> {
        self.authenticated = false;
        self.kv.remove(AUTH_KEY)?;
        info!("Admin session ended");
        Ok(())
    }
}
