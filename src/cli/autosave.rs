//! Debounced persistence scheduling: coalesce writes within a quiet
//! window, last write wins.

use std::time::{Duration, Instant};

/// Quiet period between the last edit and the flush to disk.
pub const AUTOSAVE_WINDOW: Duration = Duration::from_millis(200);

/// Polled deadline armed by every state change. The event loop asks
/// [`Autosave::is_due`] each tick and flushes when the window has passed;
/// a new edit before then simply re-arms the deadline.
#[derive(Debug, Clone, Copy)]
pub struct Autosave {
    window: Duration,
    deadline: Option<Instant>,
}

impl Autosave {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.mark_dirty_at(Instant::now());
    }

    pub fn mark_dirty_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// True while an unflushed edit is waiting, due or not.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new(AUTOSAVE_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_dirty_arms_the_deadline() {
        let mut autosave = Autosave::new(Duration::from_millis(200));
        let start = Instant::now();
        assert!(!autosave.is_pending());

        autosave.mark_dirty_at(start);
        assert!(autosave.is_pending());
        assert!(!autosave.is_due(start));
        assert!(!autosave.is_due(start + Duration::from_millis(199)));
        assert!(autosave.is_due(start + Duration::from_millis(200)));
    }

    #[test]
    fn rapid_edits_coalesce_into_one_deadline() {
        let mut autosave = Autosave::new(Duration::from_millis(200));
        let start = Instant::now();

        autosave.mark_dirty_at(start);
        autosave.mark_dirty_at(start + Duration::from_millis(150));
        // The first deadline would have fired here; the re-arm moved it.
        assert!(!autosave.is_due(start + Duration::from_millis(200)));
        assert!(autosave.is_due(start + Duration::from_millis(350)));
    }

    #[test]
    fn clear_disarms_the_deadline() {
        let mut autosave = Autosave::new(Duration::from_millis(200));
        let start = Instant::now();

        autosave.mark_dirty_at(start);
        autosave.clear();
        assert!(!autosave.is_pending());
        assert!(!autosave.is_due(start + Duration::from_secs(1)));
    }
}
