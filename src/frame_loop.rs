//! Render/update loop state machine.
//!
//! ```text
//!   Stopped ──activate()──▶ Running ──deactivate()──▶ Stopped
//!      ▲                       │
//!      └──── token cancelled ──┘   (observed at the next frame boundary)
//! ```
//!
//! The loop owns its cancellation token and at most one pending
//! [`FrameRequest`].  The host fires the pending request on each display
//! refresh; [`RenderLoop::begin_frame`] consumes it and
//! [`RenderLoop::end_frame`] schedules the next one only if the loop is still
//! running, so a tick that was already in flight when `deactivate()` arrived
//! finishes without rescheduling.

use crate::draw::DisplaySurface;
use crate::error::{ViewError, ViewResult};
use bevy::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifecycle state of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
}

/// Shared cancellation flag for one activation of the loop.
///
/// Clones share the flag, so a host thread holding a clone can stop the loop
/// without access to the loop itself.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel; returns `true` only for the call that actually flipped the flag.
    pub fn cancel(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Handle for the single scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    pub id: u64,
}

#[derive(Resource, Debug, Default)]
pub struct RenderLoop {
    state: LoopState,
    token: Option<CancelToken>,
    pending: Option<FrameRequest>,
    in_flight: Option<FrameRequest>,
    next_request_id: u64,
    frames_rendered: u64,
}

impl RenderLoop {
    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// The scheduled tick, if any.  There is never more than one.
    #[inline]
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending
    }

    #[inline]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Token for the current activation, if running.
    pub fn cancel_token(&self) -> Option<CancelToken> {
        self.token.clone()
    }

    /// Start the loop against `surface`.
    ///
    /// Fails without entering `Running` when the host has no surface or the
    /// surface has no drawable area.  Activating a running loop is a no-op.
    pub fn activate(&mut self, surface: Option<&DisplaySurface>) -> ViewResult<()> {
        let surface = surface.ok_or(ViewError::MissingSurface)?;
        if !surface.is_drawable() {
            return Err(ViewError::DegenerateSurface {
                width: surface.width,
                height: surface.height,
            });
        }
        if self.is_running() {
            return Ok(());
        }
        self.state = LoopState::Running;
        self.token = Some(CancelToken::new());
        self.schedule();
        Ok(())
    }

    /// Stop the loop.  Idempotent: a second call finds nothing to cancel.
    ///
    /// Returns `true` if this call performed the transition.
    pub fn deactivate(&mut self) -> bool {
        self.pending = None;
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        let was_running = self.is_running();
        self.state = LoopState::Stopped;
        was_running
    }

    /// Consume `request` if it is the pending tick of a live activation.
    ///
    /// A stale request, or one whose token was cancelled from elsewhere,
    /// returns `false`; the latter also moves the loop to `Stopped`.
    pub fn begin_frame(&mut self, request: FrameRequest) -> bool {
        if self.pending != Some(request) {
            return false;
        }
        if self.token.as_ref().is_none_or(CancelToken::is_cancelled) {
            self.deactivate();
            return false;
        }
        self.pending = None;
        self.in_flight = Some(request);
        true
    }

    /// Finish the in-flight tick and schedule the next one if still running.
    pub fn end_frame(&mut self) {
        if self.in_flight.take().is_none() {
            return;
        }
        self.frames_rendered += 1;
        let cancelled = self.token.as_ref().is_none_or(CancelToken::is_cancelled);
        if cancelled {
            self.deactivate();
        } else if self.is_running() {
            self.schedule();
        }
    }

    fn schedule(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.next_request_id += 1;
        self.pending = Some(FrameRequest {
            id: self.next_request_id,
        });
    }
}
