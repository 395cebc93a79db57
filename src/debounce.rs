//! Cancel-and-restart debouncing.
//!
//! [`Debouncer`] is the bookkeeping: every `schedule` issues a fresh token and
//! invalidates the previous one, and only the newest token may `fire`, once.
//! Under `hydrate`, [`Debounced`] pairs it with a `gloo_timers` timeout:
//! replacing the stored timeout drops, and so clears, the pending one.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Token bookkeeping for "last scheduled token wins".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    latest: u64,
    pending: bool,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate any pending token and issue a new one.
    pub fn schedule(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.pending = true;
        self.latest
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume `token` if it is the newest pending one.
    ///
    /// Returns `true` exactly once per winning token.
    pub fn fire(&mut self, token: u64) -> bool {
        if self.pending && token == self.latest {
            self.pending = false;
            true
        } else {
            false
        }
    }
}

#[cfg(feature = "hydrate")]
pub use timed::Debounced;

#[cfg(feature = "hydrate")]
mod timed {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use gloo_timers::callback::Timeout;

    use super::Debouncer;

    struct Inner {
        tokens: Debouncer,
        timer: Option<Timeout>,
    }

    /// A timer that only runs the action from its most recent `trigger`.
    #[derive(Clone)]
    pub struct Debounced {
        delay_ms: u32,
        inner: Rc<RefCell<Inner>>,
    }

    impl Debounced {
        #[must_use]
        pub fn new(delay_ms: u32) -> Self {
            Self {
                delay_ms,
                inner: Rc::new(RefCell::new(Inner { tokens: Debouncer::new(), timer: None })),
            }
        }

        /// Restart the window; `action` runs after `delay_ms` of quiet.
        pub fn trigger(&self, action: impl FnOnce() + 'static) {
            let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
            let mut inner = self.inner.borrow_mut();
            let token = inner.tokens.schedule();
            let timer = Timeout::new(self.delay_ms, move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let ready = inner.borrow_mut().tokens.fire(token);
                if ready {
                    action();
                }
            });
            // Replacing the previous timeout drops it, which clears it.
            inner.timer = Some(timer);
        }
    }
}
