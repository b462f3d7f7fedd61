// ============================================================================
// Byte extraction: three ways from buffer text to an owned byte vector
// ============================================================================

use std::hint::black_box;

use crate::buffer::LockedBuffer;
use crate::context::TrialContext;
use crate::error::BenchResult;
use crate::fixtures::{LINE_64, MAX_LOOP_3};

/// Formats the synchronized buffer through `Display`.
pub fn locked_to_string(_ctx: &mut TrialContext) -> BenchResult<i64> {
    let mut l = 0;
    let sb = LockedBuffer::from(LINE_64);
    for _ in 0..MAX_LOOP_3 {
        let b = sb.to_string().into_bytes();
        l += black_box(b).len() as i64;
    }
    Ok(l)
}

/// Copies the borrowed text into a new `String` under the lock.
pub fn locked_new_string(_ctx: &mut TrialContext) -> BenchResult<i64> {
    let mut l = 0;
    let sb = LockedBuffer::from(LINE_64);
    for _ in 0..MAX_LOOP_3 {
        let b = sb.with_text(str::to_owned).into_bytes();
        l += black_box(b).len() as i64;
    }
    Ok(l)
}

/// Clones the plain builder.
pub fn plain_to_string(_ctx: &mut TrialContext) -> BenchResult<i64> {
    let mut l = 0;
    let sb = String::from(LINE_64);
    for _ in 0..MAX_LOOP_3 {
        let b = sb.clone().into_bytes();
        l += black_box(b).len() as i64;
    }
    Ok(l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_path_does_not_change_length() {
        let mut ctx = TrialContext::new();
        let expected = MAX_LOOP_3 * 64;
        assert_eq!(locked_to_string(&mut ctx).unwrap(), expected);
        assert_eq!(locked_new_string(&mut ctx).unwrap(), expected);
        assert_eq!(plain_to_string(&mut ctx).unwrap(), expected);
    }
}
