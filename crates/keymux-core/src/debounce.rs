//! Coalescing deferred-task primitive behind change notification.
//!
//! A `Debouncer` owns one worker thread parked on a condvar. `schedule()`
//! arms (or re-arms) a deadline; the worker runs the job once per quiet
//! period, so a burst of schedules collapses into a single run carrying the
//! final state. At most one run is pending at any time.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

pub(crate) struct Debouncer {
    shared: Arc<Shared>,
    delay: Duration,
    handle: Option<JoinHandle<()>>,
}

struct Shared {
    state: Mutex<State>,
    wakeup: Condvar,
}

#[derive(Default)]
struct State {
    deadline: Option<Instant>,
    shutdown: bool,
}

impl Debouncer {
    pub(crate) fn new<F>(delay: Duration, job: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let shared = Arc::new(Shared {
            state: Mutex::new(State::default()),
            wakeup: Condvar::new(),
        });
        let worker_shared = Arc::clone(&shared);
        let handle = thread::spawn(move || run_worker(&worker_shared, job));
        Self {
            shared,
            delay,
            handle: Some(handle),
        }
    }

    /// Arm the deadline, pushing any pending run out by the full delay.
    pub(crate) fn schedule(&self) {
        let mut state = self.shared.state.lock();
        state.deadline = Some(Instant::now() + self.delay);
        drop(state);
        self.shared.wakeup.notify_one();
    }
}

fn run_worker<F: Fn()>(shared: &Shared, job: F) {
    loop {
        {
            let mut state = shared.state.lock();
            loop {
                if state.shutdown {
                    return;
                }
                match state.deadline {
                    None => {
                        shared.wakeup.wait(&mut state);
                    }
                    Some(deadline) if Instant::now() >= deadline => {
                        state.deadline = None;
                        break;
                    }
                    Some(deadline) => {
                        // Re-arms move the deadline; re-check after waking.
                        shared.wakeup.wait_until(&mut state, deadline);
                    }
                }
            }
        }
        // Lock released: the job may call back into schedule().
        job();
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        {
            let mut state = self.shared.state.lock();
            state.shutdown = true;
        }
        self.shared.wakeup.notify_one();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("Notify thread panicked during shutdown");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_debouncer(delay: Duration) -> (Debouncer, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let debouncer = Debouncer::new(delay, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (debouncer, fired)
    }

    #[test]
    fn test_fires_once_after_delay() {
        let (debouncer, fired) = counting_debouncer(Duration::from_millis(100));
        debouncer.schedule();
        assert_eq!(fired.load(Ordering::SeqCst), 0); // not synchronous
        thread::sleep(Duration::from_millis(500));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_burst_coalesces_to_one_run() {
        let (debouncer, fired) = counting_debouncer(Duration::from_millis(30));
        for _ in 0..50 {
            debouncer.schedule();
        }
        thread::sleep(Duration::from_millis(500));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rearm_extends_quiet_period() {
        let (debouncer, fired) = counting_debouncer(Duration::from_millis(150));
        debouncer.schedule();
        thread::sleep(Duration::from_millis(50));
        debouncer.schedule(); // pushes the deadline out before it elapses
        thread::sleep(Duration::from_millis(50));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        thread::sleep(Duration::from_millis(600));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fires_again_after_quiet_period() {
        let (debouncer, fired) = counting_debouncer(Duration::from_millis(30));
        debouncer.schedule();
        thread::sleep(Duration::from_millis(400));
        debouncer.schedule();
        thread::sleep(Duration::from_millis(400));
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_joins_without_firing_pending() {
        let (debouncer, fired) = counting_debouncer(Duration::from_secs(60));
        debouncer.schedule();
        drop(debouncer); // must not hang for the full minute
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
