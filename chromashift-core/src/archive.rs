//! Bounded archive of finalized ghost attempts.
use crate::recording::Attempt;

/// FIFO collection of finalized attempts available for ghost playback.
///
/// Capacity is passed in on every push rather than stored, so shrinking
/// `max-ghosts` in settings only discards entries on the next push.
#[derive(Debug, Clone, Default)]
pub struct GhostArchive {
    attempts: Vec<Attempt>,
}

impl GhostArchive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized attempt, evicting oldest-first down to
    /// `capacity`. Eviction is strict FIFO regardless of how distinct
    /// each attempt's death point is.
    pub fn push(&mut self, attempt: Attempt, capacity: usize) {
        if capacity == 0 {
            self.attempts.clear();
            return;
        }
        while self.attempts.len() >= capacity {
            self.attempts.remove(0);
        }
        self.attempts.push(attempt);
    }

    /// Archived attempts, oldest first.
    #[must_use]
    pub fn all(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Drop every archived attempt. Called on level change.
    pub fn clear(&mut self) {
        self.attempts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(index: u32) -> Attempt {
        Attempt {
            attempt_index: index,
            ..Attempt::default()
        }
    }

    #[test]
    fn eviction_is_oldest_first() {
        let mut archive = GhostArchive::new();
        for i in 0..4 {
            archive.push(attempt(i), 3);
        }
        let kept: Vec<u32> = archive.all().iter().map(|a| a.attempt_index).collect();
        assert_eq!(kept, vec![1, 2, 3]);
    }

    #[test]
    fn shrink_applies_on_next_push_only() {
        let mut archive = GhostArchive::new();
        for i in 0..5 {
            archive.push(attempt(i), 5);
        }
        assert_eq!(archive.len(), 5);
        // Capacity dropped to 2: the next push evicts down to fit.
        archive.push(attempt(5), 2);
        let kept: Vec<u32> = archive.all().iter().map(|a| a.attempt_index).collect();
        assert_eq!(kept, vec![4, 5]);
    }

    #[test]
    fn clear_empties_the_archive() {
        let mut archive = GhostArchive::new();
        archive.push(attempt(0), 3);
        archive.clear();
        assert!(archive.is_empty());
    }
}
