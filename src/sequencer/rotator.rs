//! Cyclic index rotation on a fixed period.

use std::cell::Cell;
use std::rc::Rc;

use super::error::{Result, SequencerError};
use super::host::{Scheduler, TimerId};

/// An index into a fixed, non-empty list that only ever moves forward by one
/// and wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexCycle {
    len: usize,
    index: usize,
}

impl IndexCycle {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(SequencerError::EmptyContent);
        }
        Ok(Self { len, index: 0 })
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}

/// Running rotation. Dropping the handle stops it.
pub struct RotatorHandle {
    scheduler: Rc<dyn Scheduler>,
    timer: Cell<Option<TimerId>>,
    alive: Rc<Cell<bool>>,
}

impl RotatorHandle {
    /// Cancel the timer. Safe to call any number of times; a tick already in
    /// flight becomes a no-op.
    pub fn stop(&self) {
        if self.alive.replace(false) {
            if let Some(timer) = self.timer.take() {
                self.scheduler.cancel(timer);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for RotatorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start advancing an index over `list_length` items every `period_ms`.
/// `on_advance` receives the new index after each tick.
pub fn start(
    scheduler: Rc<dyn Scheduler>,
    list_length: usize,
    period_ms: u32,
    mut on_advance: impl FnMut(usize) + 'static,
) -> Result<RotatorHandle> {
    if period_ms == 0 {
        return Err(SequencerError::ZeroPeriod);
    }
    let mut cycle = IndexCycle::new(list_length)?;

    let alive = Rc::new(Cell::new(true));
    let timer = scheduler.set_interval(period_ms, {
        let alive = alive.clone();
        Box::new(move || {
            if !alive.get() {
                return;
            }
            on_advance(cycle.advance());
        })
    });

    log::debug!("rotator started: {} items every {}ms", list_length, period_ms);
    Ok(RotatorHandle {
        scheduler,
        timer: Cell::new(Some(timer)),
        alive,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::sequencer::testing::ManualScheduler;

    fn recording(
        scheduler: &Rc<ManualScheduler>,
        len: usize,
        period: u32,
    ) -> (RotatorHandle, Rc<RefCell<Vec<usize>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handle = start(scheduler.clone(), len, period, {
            let seen = seen.clone();
            move |i| seen.borrow_mut().push(i)
        })
        .unwrap();
        (handle, seen)
    }

    #[test]
    fn test_index_after_k_ticks() {
        for len in 1..=5 {
            let mut cycle = IndexCycle::new(len).unwrap();
            for k in 1..=17 {
                let i = cycle.advance();
                assert_eq!(i, k % len);
                assert!(i < len);
            }
        }
    }

    #[test]
    fn test_three_items_every_three_seconds() {
        let scheduler = ManualScheduler::new();
        let (_handle, seen) = recording(&scheduler, 3, 3000);
        let current = || seen.borrow().last().copied().unwrap_or(0);

        assert_eq!(current(), 0);
        scheduler.advance(2999.0);
        assert_eq!(current(), 0);
        scheduler.advance(1.0);
        assert_eq!(current(), 1);
        scheduler.advance(6000.0);
        assert_eq!(current(), 0);
        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_rotators_are_independent() {
        let scheduler = ManualScheduler::new();
        let (_diag, diag) = recording(&scheduler, 3, 3000);
        let (_tele, tele) = recording(&scheduler, 3, 2400);

        scheduler.advance(7200.0);
        assert_eq!(*diag.borrow(), vec![1, 2]);
        assert_eq!(*tele.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let scheduler = ManualScheduler::new();
        let (handle, seen) = recording(&scheduler, 3, 1000);
        scheduler.advance(1000.0);

        handle.stop();
        handle.stop();
        assert!(!handle.is_running());
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(10_000.0);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let scheduler = ManualScheduler::new();
        let (handle, seen) = recording(&scheduler, 2, 500);
        drop(handle);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(5000.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_invalid_configuration() {
        let scheduler = ManualScheduler::new();
        assert_eq!(
            start(scheduler.clone(), 3, 0, |_| {}).err(),
            Some(SequencerError::ZeroPeriod)
        );
        assert_eq!(
            start(scheduler.clone(), 0, 3000, |_| {}).err(),
            Some(SequencerError::EmptyContent)
        );
        assert_eq!(scheduler.pending(), 0);
    }
}
