// ============================================================================
// Concatenation: immutable strings vs. appending buffers
// ============================================================================
//
// Each trial builds LINE_64 + LINE_26 + LINE_36 MAX_LOOP_2 times and sums
// the resulting lengths (126 per round).

use std::hint::black_box;

use crate::buffer::LockedBuffer;
use crate::context::TrialContext;
use crate::error::BenchResult;
use crate::fixtures::{LINE_26, LINE_36, LINE_64, MAX_LOOP_2};

const TUNED_CAPACITY: usize = 128;

/// Every step allocates a fresh string from the previous one.
pub fn concat_str(_ctx: &mut TrialContext) -> BenchResult<i64> {
    let mut l = 0;
    let l26 = LINE_26;
    for _ in 0..MAX_LOOP_2 {
        let s = String::new();
        let s = [s.as_str(), LINE_64].concat();
        let s = [s.as_str(), l26].concat();
        let s = [s.as_str(), LINE_36].concat();
        l += black_box(s).len() as i64;
    }
    Ok(l)
}

/// `String + &str`, reusing the left operand's allocation.
pub fn plus_str(_ctx: &mut TrialContext) -> BenchResult<i64> {
    let mut l = 0;
    let l26 = LINE_26;
    for _ in 0..MAX_LOOP_2 {
        let s = String::new();
        let s = s + LINE_64 + l26 + LINE_36;
        l += black_box(s).len() as i64;
    }
    Ok(l)
}

fn local_locked(make: fn() -> LockedBuffer) -> i64 {
    let mut l = 0;
    let l26 = LINE_26;
    for _ in 0..MAX_LOOP_2 {
        let sb = make();
        sb.append(LINE_64).append(l26).append(LINE_36);
        l += black_box(&sb).len() as i64;
    }
    l
}

pub fn local_locked_default(_ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(local_locked(LockedBuffer::new))
}

pub fn local_locked_tuned(_ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(local_locked(|| LockedBuffer::with_capacity(TUNED_CAPACITY)))
}

fn local_plain(make: fn() -> String) -> i64 {
    let mut l = 0;
    let l26 = LINE_26;
    for _ in 0..MAX_LOOP_2 {
        let mut sb = make();
        sb.push_str(LINE_64);
        sb.push_str(l26);
        sb.push_str(LINE_36);
        l += black_box(&sb).len() as i64;
    }
    l
}

pub fn local_plain_default(_ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(local_plain(String::new))
}

pub fn local_plain_tuned(_ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(local_plain(|| String::with_capacity(TUNED_CAPACITY)))
}

// Field variants: the buffer lives in the context and is replaced each round.

fn field_locked(ctx: &mut TrialContext, make: fn() -> LockedBuffer) -> i64 {
    let mut l = 0;
    let l26 = LINE_26;
    for _ in 0..MAX_LOOP_2 {
        ctx.locked_slot = make();
        ctx.locked_slot.append(LINE_64).append(l26).append(LINE_36);
        l += black_box(&ctx.locked_slot).len() as i64;
    }
    l
}

pub fn field_locked_default(ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(field_locked(ctx, LockedBuffer::new))
}

pub fn field_locked_tuned(ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(field_locked(ctx, || LockedBuffer::with_capacity(TUNED_CAPACITY)))
}

fn field_plain(ctx: &mut TrialContext, make: fn() -> String) -> i64 {
    let mut l = 0;
    let l26 = LINE_26;
    for _ in 0..MAX_LOOP_2 {
        ctx.plain_slot = make();
        ctx.plain_slot.push_str(LINE_64);
        ctx.plain_slot.push_str(l26);
        ctx.plain_slot.push_str(LINE_36);
        l += black_box(&ctx.plain_slot).len() as i64;
    }
    l
}

pub fn field_plain_default(ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(field_plain(ctx, String::new))
}

pub fn field_plain_tuned(ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(field_plain(ctx, || String::with_capacity(TUNED_CAPACITY)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::CONCAT_LEN;

    #[test]
    fn every_strategy_sums_126_per_round() {
        let expected = MAX_LOOP_2 * CONCAT_LEN as i64;
        let mut ctx = TrialContext::new();
        let strategies: [fn(&mut TrialContext) -> BenchResult<i64>; 10] = [
            concat_str,
            plus_str,
            local_locked_default,
            local_locked_tuned,
            local_plain_default,
            local_plain_tuned,
            field_locked_default,
            field_locked_tuned,
            field_plain_default,
            field_plain_tuned,
        ];
        for run in strategies {
            assert_eq!(run(&mut ctx).unwrap(), expected);
        }
    }

    #[test]
    fn field_trials_leave_last_buffer_in_context() {
        let mut ctx = TrialContext::new();
        field_locked_tuned(&mut ctx).unwrap();
        field_plain_default(&mut ctx).unwrap();
        assert_eq!(ctx.locked_slot.len(), CONCAT_LEN);
        assert!(ctx.locked_slot.capacity() >= TUNED_CAPACITY);
        assert_eq!(ctx.plain_slot.len(), CONCAT_LEN);
    }
}
