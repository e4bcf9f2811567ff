use std::time::Duration;

/// Runs a task once after a delay.
///
/// Dropping the returned handle must cancel the task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule<F: FnOnce() + 'static>(&self, delay: Duration, task: F) -> Self::Handle;
}

/// Whole milliseconds for timer APIs that take a `u32`, saturating on overflow.
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Owns at most one pending timer.
///
/// Every [`Debouncer::trigger`] cancels the outstanding timer before
/// scheduling a fresh one, so the task only runs after a full quiet period.
/// Dropping the debouncer cancels whatever is still pending.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self { scheduler, delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn trigger<F: FnOnce() + 'static>(&mut self, task: F) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay, task));
    }

    pub fn cancel(&mut self) {
        drop(self.pending.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Holds scheduled tasks until `run_all`; a dropped handle cancels its slot.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        slots: Rc<RefCell<Vec<Option<Box<dyn FnOnce()>>>>>,
    }

    struct Slot {
        index: usize,
        slots: Rc<RefCell<Vec<Option<Box<dyn FnOnce()>>>>>,
    }

    impl Drop for Slot {
        fn drop(&mut self) {
            self.slots.borrow_mut()[self.index] = None;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = Slot;

        fn schedule<F: FnOnce() + 'static>(&self, _delay: Duration, task: F) -> Slot {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(Box::new(task)));
            Slot { index: slots.len() - 1, slots: Rc::clone(&self.slots) }
        }
    }

    impl ManualScheduler {
        fn run_all(&self) {
            let tasks: Vec<_> = self.slots.borrow_mut().iter_mut().filter_map(Option::take).collect();
            for task in tasks {
                task();
            }
        }
    }

    #[test]
    fn retrigger_cancels_previous_timer() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut debouncer = Debouncer::new(scheduler.clone(), Duration::from_millis(350));

        for i in 0..3 {
            let fired = Rc::clone(&fired);
            debouncer.trigger(move || fired.borrow_mut().push(i));
        }
        scheduler.run_all();

        assert_eq!(*fired.borrow(), vec![2]);
    }

    #[test]
    fn dropping_debouncer_cancels_pending_timer() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(RefCell::new(false));
        {
            let mut debouncer = Debouncer::new(scheduler.clone(), Duration::from_millis(350));
            let fired = Rc::clone(&fired);
            debouncer.trigger(move || *fired.borrow_mut() = true);
        }
        scheduler.run_all();

        assert!(!*fired.borrow());
    }

    #[test]
    fn timer_millis_saturates() {
        assert_eq!(timer_millis(Duration::from_millis(350)), 350);
        assert_eq!(timer_millis(Duration::from_secs(u64::from(u32::MAX))), u32::MAX);
    }
}
