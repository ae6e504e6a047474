//! Frame scheduler trait and implementations
//!
//! The coalescing dispatcher needs one thing from the host: "run this
//! callback once, later, before the next repaint". In a browser that is an
//! animation-frame request; elsewhere it is any deferred tick.

use std::cell::RefCell;
use std::collections::VecDeque;

/// Callback handed to a frame scheduler
pub type FrameCallback = Box<dyn FnOnce()>;

/// Deferred batch executor
///
/// Implementations must run each scheduled callback exactly once and must
/// not run it from inside `schedule_once`.
pub trait FrameScheduler {
    /// Run `callback` once at the next frame boundary
    fn schedule_once(&self, callback: FrameCallback);
}

/// Scheduler whose frames are advanced by hand
///
/// Useful in tests and non-UI hosts: callbacks queue up until
/// [`run_frame`](ManualFrameScheduler::run_frame) is called.
///
/// # Example
/// ```
/// use profview_core::scheduler::{FrameScheduler, ManualFrameScheduler};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let scheduler = ManualFrameScheduler::new();
/// let ran = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&ran);
/// scheduler.schedule_once(Box::new(move || flag.set(true)));
///
/// assert!(!ran.get());
/// assert_eq!(scheduler.run_frame(), 1);
/// assert!(ran.get());
/// ```
#[derive(Default)]
pub struct ManualFrameScheduler {
    queue: RefCell<VecDeque<FrameCallback>>,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every callback that was queued before this call
    ///
    /// Callbacks scheduled while the frame runs wait for the following
    /// frame. Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        let due: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        let count = due.len();
        for callback in due {
            callback();
        }
        count
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn schedule_once(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push_back(callback);
    }
}

impl std::fmt::Debug for ManualFrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualFrameScheduler")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_run_frame_with_nothing_queued() {
        let scheduler = ManualFrameScheduler::new();
        assert_eq!(scheduler.run_frame(), 0);
    }

    #[test]
    fn test_callbacks_run_in_schedule_order() {
        let scheduler = ManualFrameScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let log = Rc::clone(&log);
            scheduler.schedule_once(Box::new(move || log.borrow_mut().push(i)));
        }
        assert_eq!(scheduler.pending(), 3);
        assert_eq!(scheduler.run_frame(), 3);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_callback_scheduled_during_frame_waits() {
        let scheduler = Rc::new(ManualFrameScheduler::new());
        let count = Rc::new(Cell::new(0));

        let inner_scheduler = Rc::clone(&scheduler);
        let inner_count = Rc::clone(&count);
        scheduler.schedule_once(Box::new(move || {
            inner_count.set(inner_count.get() + 1);
            let again = Rc::clone(&inner_count);
            inner_scheduler.schedule_once(Box::new(move || again.set(again.get() + 1)));
        }));

        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(count.get(), 2);
    }
}
