// Synchronized text buffer
//
// The plain builder is `String`; `LockedBuffer` is its synchronized
// counterpart. Every operation takes the lock, even when uncontended, so
// the locking cost is part of what the trials compare.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct LockedBuffer {
    text: Mutex<String>,
}

impl LockedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LockedBuffer {
            text: Mutex::new(String::with_capacity(capacity)),
        }
    }

    fn guard(&self) -> MutexGuard<'_, String> {
        // A panic while appending leaves a valid String behind.
        self.text.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `s` and returns `self` so calls can be chained.
    pub fn append(&self, s: &str) -> &Self {
        self.guard().push_str(s);
        self
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.guard().capacity()
    }

    /// Byte at `index`, or 0 past the end.
    pub fn byte_at(&self, index: usize) -> u8 {
        self.guard().as_bytes().get(index).copied().unwrap_or_default()
    }

    /// Runs `f` against the current contents while holding the lock.
    pub fn with_text<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self.guard().as_str())
    }
}

impl From<&str> for LockedBuffer {
    fn from(text: &str) -> Self {
        LockedBuffer {
            text: Mutex::new(text.to_owned()),
        }
    }
}

impl fmt::Display for LockedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.guard())
    }
}
