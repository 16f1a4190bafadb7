//! Per-player work tracking.
//!
//! Unlike the region lists, a [`ContributionTracker`] may be written from any
//! thread: repair and build work can be reported by background tasks. All
//! access goes through one `parking_lot::Mutex`, so concurrent calls are fully
//! serialized.
//!
//! # Example
//!
//! ```
//! use warfare_core::contribution::ContributionTracker;
//! use warfare_core::entity::PlayerId;
//!
//! let tracker = ContributionTracker::new();
//! tracker.record(PlayerId::new(1), 30.0);
//! tracker.record(PlayerId::new(2), 10.0);
//! tracker.record(PlayerId::new(1), 20.0);
//!
//! assert_eq!(tracker.contribution(PlayerId::new(1)), 50.0);
//! assert_eq!(tracker.fraction(PlayerId::new(2)), 10.0 / 60.0);
//! ```

use parking_lot::Mutex;

use crate::entity::PlayerId;

/// Accumulated work per player.
#[derive(Debug, Default)]
pub struct ContributionTracker {
    work: Mutex<Vec<(PlayerId, f32)>>,
}

impl ContributionTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` of work for `player`.
    ///
    /// Non-finite and non-positive amounts are ignored.
    pub fn record(&self, player: PlayerId, amount: f32) {
        if !amount.is_finite() || amount <= 0.0 {
            tracing::trace!(%player, amount, "ignored contribution");
            return;
        }
        let mut work = self.work.lock();
        match work.iter_mut().find(|(p, _)| *p == player) {
            Some((_, total)) => *total += amount,
            None => {
                work.push((player, amount));
                tracing::debug!(%player, contributors = work.len(), "new contributor");
            }
        }
    }

    /// Work recorded for `player`, 0 if none.
    #[must_use]
    pub fn contribution(&self, player: PlayerId) -> f32 {
        self.work
            .lock()
            .iter()
            .find(|(p, _)| *p == player)
            .map_or(0.0, |&(_, amount)| amount)
    }

    /// Work recorded by everyone.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.work.lock().iter().map(|&(_, amount)| amount).sum()
    }

    /// Share of the total contributed by `player`, in `[0, 1]`.
    ///
    /// Returns 0 while nothing has been recorded.
    #[must_use]
    pub fn fraction(&self, player: PlayerId) -> f32 {
        let work = self.work.lock();
        let mut total = 0.0;
        let mut own = 0.0;
        for &(p, amount) in work.iter() {
            total += amount;
            if p == player {
                own = amount;
            }
        }
        if total > 0.0 {
            own / total
        } else {
            0.0
        }
    }

    /// Snapshot of every contributor, largest first.
    #[must_use]
    pub fn contributors(&self) -> Vec<(PlayerId, f32)> {
        let mut snapshot = self.work.lock().clone();
        snapshot.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        snapshot
    }

    /// Forget all recorded work.
    pub fn clear(&self) {
        let mut work = self.work.lock();
        tracing::debug!(contributors = work.len(), "cleared contributions");
        work.clear();
    }
}
