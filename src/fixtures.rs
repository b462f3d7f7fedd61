// Fixture strings and keys shared by every trial.

use std::fmt;
use std::sync::Arc;

use crate::buffer::LockedBuffer;

pub const LINE_64: &str = "azertyuiopqsdfghjklmwxcvbn1234567890AZERTYUIOPQSDFGHJKLMWXCVBNaz";
pub const LINE_26: &str = "azertyuiopqsdfghjklmwxcvbn";
pub const LINE_36: &str = "azertyuiopqsdfghjklmwxcvbn1234567890";

/// Length of `LINE_64 + LINE_26 + LINE_36`.
pub const CONCAT_LEN: usize = 126;

pub const MAX_LOOP_1: i64 = 400_000;
pub const MAX_LOOP_2: i64 = 200_000;
pub const MAX_LOOP_3: i64 = 10_000;
pub const MAX_LOOP_4: i64 = 1_200;

/// Key inserted into the keyed containers.
///
/// `LINE_64` repeats `a` and `z`, so the slot is part of the identity: the
/// 64 keys stay distinct and every population round reports 64 entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixtureKey {
    slot: u8,
    ch: char,
}

impl FixtureKey {
    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn ch(&self) -> char {
        self.ch
    }
}

impl fmt::Display for FixtureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.ch, self.slot)
    }
}

/// Read-only inputs: the shared 64-character buffer and one key per slot.
#[derive(Debug)]
pub struct Fixtures {
    shared: Arc<LockedBuffer>,
    keys: Vec<FixtureKey>,
}

impl Fixtures {
    pub fn new() -> Self {
        let shared = Arc::new(LockedBuffer::from(LINE_64));
        let keys: Vec<FixtureKey> = shared.with_text(|text| {
            text.chars()
                .enumerate()
                .map(|(slot, ch)| FixtureKey { slot: slot as u8, ch })
                .collect()
        });
        Fixtures { shared, keys }
    }

    /// The buffer stored as the value of every container entry.
    pub fn shared(&self) -> &Arc<LockedBuffer> {
        &self.shared
    }

    pub fn keys(&self) -> &[FixtureKey] {
        &self.keys
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fixture_lengths() {
        assert_eq!(LINE_64.len(), 64);
        assert_eq!(LINE_26.len(), 26);
        assert_eq!(LINE_36.len(), 36);
        assert_eq!(LINE_64.len() + LINE_26.len() + LINE_36.len(), CONCAT_LEN);
        assert!(LINE_64.starts_with(LINE_36));
        assert!(LINE_36.starts_with(LINE_26));
    }

    #[test]
    fn keys_are_distinct_even_for_repeated_chars() {
        let fixtures = Fixtures::new();
        let keys = fixtures.keys();
        assert_eq!(keys.len(), 64);

        let distinct: HashSet<_> = keys.iter().collect();
        assert_eq!(distinct.len(), 64);

        let chars: HashSet<_> = keys.iter().map(FixtureKey::ch).collect();
        assert_eq!(chars.len(), 62);
        assert_eq!(keys[63].ch(), 'z');
        assert_eq!(keys[63].slot(), 63);
    }
}
