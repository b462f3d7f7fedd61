// ============================================================================
// Scanning loops: bound and element reads recomputed vs. hoisted
// ============================================================================
//
// The condition `c < '0' && c > 'z'` can never hold; the counter only keeps
// the loop body alive, so every trial returns 0.

use std::hint::black_box;

use crate::buffer::LockedBuffer;
use crate::context::TrialContext;
use crate::error::BenchResult;
use crate::fixtures::{LINE_64, MAX_LOOP_3};

/// Reads the length and each byte through the lock on every access.
pub fn for_methods(_ctx: &mut TrialContext) -> BenchResult<i64> {
    let mut l = 0;
    let sb = LockedBuffer::from(LINE_64);
    for _ in 0..MAX_LOOP_3 {
        let mut j = 0;
        while j < sb.len() {
            if sb.byte_at(j) < b'0' && sb.byte_at(j) > b'z' {
                l += 1;
            }
            j += 1;
        }
    }
    Ok(black_box(l))
}

/// Hoists the length out of the inner loop and reads each byte once.
pub fn for_variables(_ctx: &mut TrialContext) -> BenchResult<i64> {
    let mut l = 0;
    let sb = LockedBuffer::from(LINE_64);
    for _ in 0..MAX_LOOP_3 {
        let sbl = sb.len();
        for j in 0..sbl {
            let c = sb.byte_at(j);
            if c < b'0' && c > b'z' {
                l += 1;
            }
        }
    }
    Ok(black_box(l))
}

/// Same as `for_variables` against the buffer shared through the context.
pub fn for_shared(ctx: &mut TrialContext) -> BenchResult<i64> {
    let mut l = 0;
    let shared = ctx.fixtures.shared();
    for _ in 0..MAX_LOOP_3 {
        let sbl = shared.len();
        for j in 0..sbl {
            let c = shared.byte_at(j);
            if c < b'0' && c > b'z' {
                l += 1;
            }
        }
    }
    Ok(black_box(l))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impossible_condition_never_counts() {
        let mut ctx = TrialContext::new();
        assert_eq!(for_methods(&mut ctx).unwrap(), 0);
        assert_eq!(for_variables(&mut ctx).unwrap(), 0);
        assert_eq!(for_shared(&mut ctx).unwrap(), 0);
    }
}
