// ============================================================================
// Field access: direct reads/writes vs. accessor methods
// ============================================================================
//
// Each round writes `j + i + 1` and reads back `field - 1 - i`, so `j`
// stays 0 and every trial returns 0.

use std::hint::black_box;

use crate::context::TrialContext;
use crate::error::BenchResult;
use crate::fixtures::{MAX_LOOP_1, MAX_LOOP_3};

fn through_accessors(ctx: &mut TrialContext, rounds: i64) -> i64 {
    let mut j = 0;
    for i in 0..rounds {
        ctx.set_an_int(j + i + 1);
        j = black_box(ctx.an_int()) - 1 - i;
    }
    j
}

fn through_field(ctx: &mut TrialContext, rounds: i64) -> i64 {
    let mut j = 0;
    for i in 0..rounds {
        ctx.an_int = j + i + 1;
        j = black_box(ctx.an_int) - 1 - i;
    }
    j
}

pub fn accessor_small(ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(through_accessors(ctx, MAX_LOOP_3))
}

pub fn field_small(ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(through_field(ctx, MAX_LOOP_3))
}

pub fn accessor_big(ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(through_accessors(ctx, MAX_LOOP_1))
}

pub fn field_big(ctx: &mut TrialContext) -> BenchResult<i64> {
    Ok(through_field(ctx, MAX_LOOP_1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_field_agree() {
        let mut ctx = TrialContext::new();
        assert_eq!(field_small(&mut ctx).unwrap(), 0);
        assert_eq!(ctx.an_int(), MAX_LOOP_3);
        assert_eq!(accessor_small(&mut ctx).unwrap(), 0);
        assert_eq!(field_big(&mut ctx).unwrap(), 0);
        assert_eq!(accessor_big(&mut ctx).unwrap(), 0);
        assert_eq!(ctx.an_int(), MAX_LOOP_1);
    }
}
