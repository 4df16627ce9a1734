//! Synchronous scheduler: frames fire only when the host says so

use super::{FrameHandle, FrameScheduler};

/// Records frame requests without any clock behind them.
///
/// Hosts (and tests) drive frames by taking the pending handle and passing
/// it to `ParticleEngine::on_frame`.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The outstanding request, if any
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Consume the outstanding request, as the display does when it fires
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Total requests made
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total requests withdrawn while still pending
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        if let Some(previous) = self.pending.replace(handle) {
            log::trace!(
                "[ManualScheduler::request_frame] {:?} superseded by {:?}",
                previous,
                handle
            );
        }
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_fire_cancel() {
        let mut scheduler = ManualScheduler::new();
        assert_eq!(scheduler.pending(), None);

        let first = scheduler.request_frame();
        assert_eq!(scheduler.pending(), Some(first));
        assert_eq!(scheduler.fire(), Some(first));
        assert_eq!(scheduler.fire(), None);

        let second = scheduler.request_frame();
        assert_ne!(first, second);
        scheduler.cancel_frame(second);
        assert_eq!(scheduler.pending(), None);
        assert_eq!(scheduler.cancelled(), 1);
        assert_eq!(scheduler.requested(), 2);
    }

    #[test]
    fn test_stale_cancel_is_noop() {
        let mut scheduler = ManualScheduler::new();
        let stale = scheduler.request_frame();
        scheduler.fire();
        let live = scheduler.request_frame();
        scheduler.cancel_frame(stale);
        assert_eq!(scheduler.pending(), Some(live));
        assert_eq!(scheduler.cancelled(), 0);
    }
}
