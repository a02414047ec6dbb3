use gloo_timers::callback::Timeout;

/// Runs a task once after a delay. Dropping the returned handle cancels the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser scheduler backed by `setTimeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// A restartable one-shot timer.
///
/// Every `restart` cancels the pending task and hands the new task a fresh generation
/// number, so a consumer can also discard any fire whose generation is no longer current.
pub struct GenerationTimer<S: Scheduler> {
    scheduler: S,
    generation: u64,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> GenerationTimer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            generation: 0,
            pending: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn restart<F>(&mut self, delay_ms: u32, on_fire: F) -> u64
    where
        F: FnOnce(u64) + 'static,
    {
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let handle = self
            .scheduler
            .schedule(delay_ms, Box::new(move || on_fire(generation)));
        self.pending = Some(handle);
        generation
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Slot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

    /// Keeps scheduled tasks until the test fires them; dropping a handle empties its slot.
    #[derive(Default)]
    struct HeldScheduler {
        slots: RefCell<Vec<Slot>>,
    }

    struct HeldHandle(Slot);

    impl Drop for HeldHandle {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl Scheduler for &HeldScheduler {
        type Handle = HeldHandle;

        fn schedule(&self, _delay_ms: u32, task: Box<dyn FnOnce()>) -> HeldHandle {
            let slot: Slot = Rc::new(RefCell::new(Some(task)));
            self.slots.borrow_mut().push(slot.clone());
            HeldHandle(slot)
        }
    }

    impl HeldScheduler {
        fn fire_all(&self) -> usize {
            let tasks: Vec<_> = self
                .slots
                .borrow()
                .iter()
                .filter_map(|slot| slot.borrow_mut().take())
                .collect();
            let fired = tasks.len();
            for task in tasks {
                task();
            }
            fired
        }
    }

    #[test]
    fn restart_bumps_generation_and_cancels_previous_task() {
        let scheduler = HeldScheduler::default();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut timer = GenerationTimer::new(&scheduler);

        let log = fired.clone();
        assert_eq!(timer.restart(2_000, move |g| log.borrow_mut().push(g)), 1);
        let log = fired.clone();
        assert_eq!(timer.restart(2_000, move |g| log.borrow_mut().push(g)), 2);

        assert_eq!(scheduler.fire_all(), 1);
        assert_eq!(*fired.borrow(), vec![2]);
    }

    #[test]
    fn cancel_drops_the_pending_task() {
        let scheduler = HeldScheduler::default();
        let mut timer = GenerationTimer::new(&scheduler);
        timer.restart(10, |_| panic!("cancelled task ran"));
        assert!(timer.is_pending());

        timer.cancel();
        assert!(!timer.is_pending());
        assert_eq!(scheduler.fire_all(), 0);
        assert_eq!(timer.generation(), 1);
    }

    #[test]
    fn dropping_the_timer_cancels() {
        let scheduler = HeldScheduler::default();
        {
            let mut timer = GenerationTimer::new(&scheduler);
            timer.restart(10, |_| panic!("task outlived its timer"));
        }
        assert_eq!(scheduler.fire_all(), 0);
    }
}
