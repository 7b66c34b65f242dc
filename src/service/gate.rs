//! Session gate consumed by the service facade.
//!
//! Credential issuance and the single-active-session rule belong to the
//! authentication layer. The catalog only asks one question of it: is this
//! user's session valid right now.

use crate::errors::Result;
use std::future::Future;

/// Pass/fail session check evaluated before every catalog operation.
pub trait SessionGate: Send + Sync {
    /// Returns `Ok(true)` if `user_id` currently holds a valid session.
    ///
    /// An `Err` means the check itself could not be made, and is propagated.
    fn is_session_valid(&self, user_id: i64) -> impl Future<Output = Result<bool>> + Send;
}

/// A gate with a fixed answer, for admin tooling and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticGate {
    valid: bool,
}

impl StaticGate {
    /// Accepts every caller.
    #[must_use]
    pub const fn allow_all() -> Self {
        Self { valid: true }
    }

    /// Rejects every caller.
    #[must_use]
    pub const fn deny_all() -> Self {
        Self { valid: false }
    }
}

impl SessionGate for StaticGate {
    async fn is_session_valid(&self, _user_id: i64) -> Result<bool> {
        Ok(self.valid)
    }
}
