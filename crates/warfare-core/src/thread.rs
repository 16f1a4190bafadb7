//! Game-thread confinement.
//!
//! Region lists are mutated by the game loop without synchronization, so every
//! read and write of them must happen on that one thread. A [`GameThread`] is
//! the capability proving which thread that is. Query and grid functions take
//! it as their first argument and check it before touching any region list.
//!
//! # Example
//!
//! ```
//! use warfare_core::thread::GameThread;
//!
//! let game_thread = GameThread::bind_current();
//! assert!(game_thread.assert_current().is_ok());
//!
//! std::thread::scope(|s| {
//!     s.spawn(|| {
//!         assert!(game_thread.assert_current().is_err());
//!     });
//! });
//! ```

use std::thread::{self, ThreadId};

use thiserror::Error;

/// Raised when thread-confined state is accessed from the wrong thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("called from thread {actual:?}, but region lists belong to game thread {expected:?}")]
pub struct GameThreadError {
    /// The designated game thread.
    pub expected: ThreadId,
    /// The thread that made the call.
    pub actual: ThreadId,
}

/// Token naming the designated game thread.
///
/// The token is `Copy + Send + Sync`; holding it on another thread is fine,
/// only the check fails there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameThread {
    id: ThreadId,
}

impl GameThread {
    /// Designate the calling thread as the game thread.
    #[must_use]
    pub fn bind_current() -> Self {
        let id = thread::current().id();
        tracing::debug!(thread = ?id, "bound game thread");
        Self { id }
    }

    /// Id of the designated thread.
    #[must_use]
    pub const fn id(&self) -> ThreadId {
        self.id
    }

    /// Whether the caller is running on the game thread.
    #[must_use]
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.id
    }

    /// Fail unless the caller is running on the game thread.
    ///
    /// # Errors
    ///
    /// Returns [`GameThreadError`] naming both threads.
    pub fn assert_current(&self) -> Result<(), GameThreadError> {
        let actual = thread::current().id();
        if actual == self.id {
            Ok(())
        } else {
            Err(GameThreadError {
                expected: self.id,
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_thread_is_current() {
        let game_thread = GameThread::bind_current();
        assert!(game_thread.is_current());
        assert_eq!(game_thread.id(), thread::current().id());
    }

    #[test]
    fn test_other_thread_is_rejected() {
        let game_thread = GameThread::bind_current();
        let err = thread::spawn(move || game_thread.assert_current())
            .join()
            .unwrap()
            .unwrap_err();
        assert_eq!(err.expected, game_thread.id());
        assert_ne!(err.actual, game_thread.id());
    }

    #[test]
    fn test_binding_elsewhere_moves_confinement() {
        let worker = thread::spawn(GameThread::bind_current).join().unwrap();
        assert!(!worker.is_current());
    }
}
