// Animation driver state machine.
//
// The renderer never talks to a timer API directly; it depends on a
// per-frame scheduling capability supplied by the host. The web frontend
// backs it with requestAnimationFrame, tests with a fake that fires frames
// on demand.

/// "Run once more per display refresh" capability.
pub trait FrameScheduler {
    /// Queue one callback invocation; returns a handle for cancellation.
    fn request_frame(&mut self) -> i32;
    fn cancel_frame(&mut self, handle: i32);
}

/// Tracks the run flag and the single outstanding frame request.
#[derive(Debug, Default)]
pub struct Driver {
    running: bool,
    pending: Option<i32>,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            running: false,
            pending: None,
        }
    }

    /// Begin (or resume) scheduling. Phases pick up exactly where they
    /// were; hidden time is not compensated.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        self.running = true;
        if self.pending.is_none() {
            self.pending = Some(scheduler.request_frame());
        }
    }

    /// The host's frame callback fired. Returns whether the frame should be
    /// drawn; when running, the next frame is already requested on return.
    ///
    /// A callback that was in flight when the driver suspended lands here
    /// as a no-op rather than an error.
    pub fn frame_fired(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        self.pending = None;
        if !self.running {
            return false;
        }
        self.pending = Some(scheduler.request_frame());
        true
    }

    /// Page visibility toggled.
    pub fn set_visible(&mut self, visible: bool, scheduler: &mut impl FrameScheduler) {
        if visible {
            self.start(scheduler);
        } else {
            self.suspend(scheduler);
        }
    }

    /// Stop scheduling and cancel the outstanding request, if any.
    pub fn suspend(&mut self, scheduler: &mut impl FrameScheduler) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    /// Teardown; identical to suspend but reads better at call sites.
    pub fn shutdown(&mut self, scheduler: &mut impl FrameScheduler) {
        self.suspend(scheduler);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending_handle(&self) -> Option<i32> {
        self.pending
    }
}
