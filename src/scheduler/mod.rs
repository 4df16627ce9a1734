//! Scheduler Module - frame scheduling primitives
//!
//! The engine never owns a timer. It asks a `FrameScheduler` for the next
//! frame and cancels the outstanding request on stop, the same contract as
//! a display's request/cancel animation-frame pair. The host calls
//! `ParticleEngine::on_frame` when a requested frame fires.

pub mod manual_scheduler;
pub mod paced_driver;

pub use manual_scheduler::ManualScheduler;
pub use paced_driver::{frame_interval, run_paced, PacedRunStats};

/// Opaque id of a requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Host-side frame timing primitive
pub trait FrameScheduler {
    /// Request one callback at the next display refresh
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a pending request. Cancelling a stale handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}
