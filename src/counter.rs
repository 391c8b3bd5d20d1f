//! Counter factories: an explicit struct-backed counter, a closure that
//! captures its own count, and a clonable handle for cross-thread use.

use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Independent counter starting at zero.
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Counter { count: 0 }
    }

    /// Add one and return the new total.
    pub fn increment(&mut self) -> u64 {
        self.count += 1;
        self.count
    }
}

/// Build a counting closure that owns its count, fresh per factory call.
pub fn create_counter() -> impl FnMut() -> u64 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

#[derive(Debug, Clone, Default)]
/// Counter handle that can be cloned across threads.
///
/// The increment is a single locked read-modify-write, so concurrent
/// callers never lose an update.
pub struct SharedCounter(Arc<Mutex<u64>>);

impl SharedCounter {
    pub fn new() -> Self {
        SharedCounter(Arc::new(Mutex::new(0)))
    }

    /// Add one and return the new total.
    pub fn increment(&self) -> u64 {
        let mut count = self.0.lock().expect("counter lock poisoned");
        *count += 1;
        *count
    }
}
