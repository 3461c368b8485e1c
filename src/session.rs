//! Simulated login and search quota.
//!
//! There is no authentication: logging in picks a random nickname and
//! resets the quota, logging out zeroes it.

use rand::Rng;

use crate::error::DashboardError;

pub const DEFAULT_QUOTA: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
    nickname: String,
    remaining: u32,
    initial_quota: u32,
}

impl Session {
    pub fn new(initial_quota: u32) -> Self {
        Session {
            logged_in: false,
            nickname: String::new(),
            remaining: 0,
            initial_quota,
        }
    }

    pub fn login(&mut self) -> (&str, u32) {
        let suffix: u32 = rand::thread_rng().gen_range(0..1000);
        self.logged_in = true;
        self.nickname = format!("user{suffix}");
        self.remaining = self.initial_quota;
        tracing::info!("logged in as {}", self.nickname);
        (&self.nickname, self.remaining)
    }

    pub fn logout(&mut self) {
        tracing::info!("logged out {}", self.nickname);
        self.logged_in = false;
        self.nickname.clear();
        self.remaining = 0;
    }

    /// Flips between logged in and logged out, like the header button.
    pub fn toggle(&mut self) {
        if self.logged_in {
            self.logout();
        } else {
            self.login();
        }
    }

    pub fn consume_search(&mut self) -> Result<u32, DashboardError> {
        if self.remaining == 0 {
            return Err(DashboardError::QuotaExceeded);
        }
        self.remaining -= 1;
        Ok(self.remaining)
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn nickname(&self) -> Option<&str> {
        self.logged_in.then_some(self.nickname.as_str())
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn status_line(&self) -> String {
        if self.logged_in {
            format!(
                "logged in | nickname: {} | searches left: {}",
                self.nickname, self.remaining
            )
        } else {
            "not logged in".to_string()
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(DEFAULT_QUOTA)
    }
}
