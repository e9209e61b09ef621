//! The unlock session: holds the derived master key for a bounded window.
//!
//! A `Session` is either `Locked` (no key in memory) or `Unlocked` (key
//! present, with the timestamp of the last refresh).  Expiry is evaluated
//! lazily inside `check` — there is no background timer.  Every successful
//! privileged operation calls `refresh`, so the timeout is a sliding
//! window measured from the most recent activity, not from unlock.
//!
//! Replacing the state drops any held `MasterKey`, which zeroes the key
//! bytes.  The key therefore cannot outlive the unlocked state.

use std::time::{Duration, Instant};

use crate::crypto::MasterKey;
use crate::errors::{LatchVaultError, Result};

/// How long a session stays unlocked without activity (30 minutes).
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

enum State {
    Locked,
    Unlocked {
        key: MasterKey,
        refreshed_at: Instant,
    },
}

/// Gate for the in-memory master key.
pub struct Session {
    state: State,
    timeout: Duration,
}

impl Session {
    /// Create a new locked session with the standard 30-minute timeout.
    pub fn new() -> Self {
        Self::with_timeout(SESSION_TIMEOUT)
    }

    /// Create a new locked session with an explicit timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            state: State::Locked,
            timeout,
        }
    }

    /// Move to `Unlocked` with the given key.
    ///
    /// Callers must only establish a session after the key has been
    /// verified against the vault (a successful decryption) — never from
    /// an unverified password.
    pub fn establish(&mut self, key: MasterKey) {
        self.state = State::Unlocked {
            key,
            refreshed_at: Instant::now(),
        };
    }

    /// Move to `Locked`, wiping any held key.
    ///
    /// Succeeds even when the session is already locked.
    pub fn clear(&mut self) {
        self.state = State::Locked;
    }

    /// Reset the inactivity timer.  No-op when locked.
    pub fn refresh(&mut self) {
        if let State::Unlocked { refreshed_at, .. } = &mut self.state {
            *refreshed_at = Instant::now();
        }
    }

    /// Gate a privileged operation: return the key if the session is live.
    ///
    /// Fails with `SessionLocked` when no session is established.  When
    /// the inactivity window has been exceeded, the session is cleared
    /// (wiping the key) and the call fails with `SessionExpired`; a later
    /// call then sees `SessionLocked`.
    pub fn check(&mut self) -> Result<&MasterKey> {
        let expired = match &self.state {
            State::Locked => return Err(LatchVaultError::SessionLocked),
            State::Unlocked { refreshed_at, .. } => refreshed_at.elapsed() > self.timeout,
        };

        if expired {
            self.state = State::Locked;
            return Err(LatchVaultError::SessionExpired);
        }

        match &self.state {
            State::Unlocked { key, .. } => Ok(key),
            State::Locked => Err(LatchVaultError::SessionLocked),
        }
    }

    /// Whether the session is currently unlocked.
    ///
    /// Reads the raw state only — it does not evaluate or refresh the
    /// expiry timer, so `status`-style callers cannot extend a session.
    pub fn is_unlocked(&self) -> bool {
        matches!(self.state, State::Unlocked { .. })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn key() -> MasterKey {
        MasterKey::new([7u8; 32])
    }

    #[test]
    fn new_session_is_locked() {
        let mut session = Session::new();
        assert!(!session.is_unlocked());
        assert!(matches!(
            session.check(),
            Err(LatchVaultError::SessionLocked)
        ));
    }

    #[test]
    fn establish_then_check_returns_key() {
        let mut session = Session::new();
        session.establish(key());
        assert!(session.is_unlocked());

        let k = session.check().unwrap();
        assert_eq!(k.as_bytes(), &[7u8; 32]);
    }

    #[test]
    fn clear_locks_the_session() {
        let mut session = Session::new();
        session.establish(key());
        session.clear();

        assert!(!session.is_unlocked());
        assert!(matches!(
            session.check(),
            Err(LatchVaultError::SessionLocked)
        ));
    }

    #[test]
    fn clear_when_already_locked_is_fine() {
        let mut session = Session::new();
        session.clear();
        session.clear();
        assert!(!session.is_unlocked());
    }

    #[test]
    fn check_past_timeout_expires_and_locks() {
        let mut session = Session::with_timeout(Duration::from_millis(10));
        session.establish(key());

        thread::sleep(Duration::from_millis(30));

        // First check past the window reports the expiry...
        assert!(matches!(
            session.check(),
            Err(LatchVaultError::SessionExpired)
        ));
        // ...and leaves the session locked, so later checks see Locked.
        assert!(!session.is_unlocked());
        assert!(matches!(
            session.check(),
            Err(LatchVaultError::SessionLocked)
        ));
    }

    #[test]
    fn refresh_slides_the_window() {
        let mut session = Session::with_timeout(Duration::from_millis(50));
        session.establish(key());

        // Keep the session alive well past the original deadline by
        // refreshing before each check.
        for _ in 0..4 {
            thread::sleep(Duration::from_millis(20));
            assert!(session.check().is_ok());
            session.refresh();
        }
    }

    #[test]
    fn refresh_on_locked_session_does_not_unlock() {
        let mut session = Session::new();
        session.refresh();
        assert!(!session.is_unlocked());
    }

    #[test]
    fn is_unlocked_does_not_expire_the_session() {
        let mut session = Session::with_timeout(Duration::from_millis(10));
        session.establish(key());

        thread::sleep(Duration::from_millis(30));

        // Raw state read: still reports unlocked even though the window
        // has passed, because only `check` evaluates expiry.
        assert!(session.is_unlocked());
        assert!(matches!(
            session.check(),
            Err(LatchVaultError::SessionExpired)
        ));
    }
}
