// ============================================================================
// Keyed containers: population and lookup under three capacity classes
// ============================================================================
//
// - single shot: 1000 fresh local containers, 64 insertions each
// - nested local: 100 fresh local containers, refilled 10 times each
// - nested shared: the context's container, cleared 100 times and refilled
//   10 times after each clear
// - lookup: 100 x 10 passes over the 64 keys against the shared container
//
// Population trials add the container size after each fill (64), lookup
// trials add the length of the last value retrieved (64).

use std::hint::black_box;
use std::sync::Arc;

use crate::context::{HeldStore, TrialContext};
use crate::error::{BenchError, BenchResult};
use crate::fixtures::Fixtures;
use crate::store::{CapacityClass, Store};

const SINGLE_SHOT_ROUNDS: usize = 1000;
const NESTED_ROUNDS: usize = 100;
const REFILLS: usize = 10;

fn fill<S: Store>(store: &mut S, fixtures: &Fixtures) {
    for key in fixtures.keys() {
        store.put(*key, Arc::clone(fixtures.shared()));
    }
}

pub fn put_single_shot<S: Store>(ctx: &mut TrialContext, class: CapacityClass) -> BenchResult<i64> {
    let mut l = 0;
    for _ in 0..SINGLE_SHOT_ROUNDS {
        let mut store = S::for_class(class);
        fill(&mut store, &ctx.fixtures);
        l += black_box(&store).len() as i64;
    }
    Ok(l)
}

pub fn put_nested_local<S: Store>(ctx: &mut TrialContext, class: CapacityClass) -> BenchResult<i64> {
    let mut l = 0;
    for _ in 0..NESTED_ROUNDS {
        let mut store = S::for_class(class);
        for _ in 0..REFILLS {
            fill(&mut store, &ctx.fixtures);
            l += black_box(&store).len() as i64;
        }
    }
    Ok(l)
}

pub fn put_nested_shared<S: HeldStore>(
    ctx: &mut TrialContext,
    class: CapacityClass,
) -> BenchResult<i64> {
    let (fixtures, stores) = S::split(ctx);
    let store = stores.get_mut(class);
    let mut l = 0;
    for _ in 0..NESTED_ROUNDS {
        store.clear();
        for _ in 0..REFILLS {
            fill(store, fixtures);
            l += black_box(&*store).len() as i64;
        }
    }
    Ok(l)
}

/// Fails on the first key the shared container does not hold.
pub fn get_nested_shared<S: HeldStore>(
    ctx: &mut TrialContext,
    class: CapacityClass,
) -> BenchResult<i64> {
    let (fixtures, stores) = S::split(ctx);
    let store = stores.get(class);
    let mut l = 0;
    for _ in 0..NESTED_ROUNDS {
        for _ in 0..REFILLS {
            let mut last = None;
            for key in fixtures.keys() {
                let value = store.lookup(key).ok_or_else(|| BenchError::MissingKey {
                    key: key.to_string(),
                    container: S::KIND.name(),
                })?;
                last = Some(value);
            }
            l += last.map_or(0, |value| black_box(value).len() as i64);
        }
    }
    Ok(l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LockedTable, PlainMap};

    const EXPECTED: i64 = 64_000;

    #[test]
    fn population_reports_64_per_fill_for_every_class() {
        let mut ctx = TrialContext::new();
        for class in CapacityClass::ALL {
            assert_eq!(put_single_shot::<LockedTable>(&mut ctx, class).unwrap(), EXPECTED);
            assert_eq!(put_single_shot::<PlainMap>(&mut ctx, class).unwrap(), EXPECTED);
            assert_eq!(put_nested_local::<LockedTable>(&mut ctx, class).unwrap(), EXPECTED);
            assert_eq!(put_nested_local::<PlainMap>(&mut ctx, class).unwrap(), EXPECTED);
            assert_eq!(put_nested_shared::<LockedTable>(&mut ctx, class).unwrap(), EXPECTED);
            assert_eq!(put_nested_shared::<PlainMap>(&mut ctx, class).unwrap(), EXPECTED);
        }
    }

    #[test]
    fn lookup_after_shared_population() {
        let mut ctx = TrialContext::new();
        for class in CapacityClass::ALL {
            put_nested_shared::<PlainMap>(&mut ctx, class).unwrap();
            assert_eq!(get_nested_shared::<PlainMap>(&mut ctx, class).unwrap(), EXPECTED);
            assert_eq!(ctx.maps.get(class).len(), 64);
        }
    }

    #[test]
    fn lookup_without_population_reports_missing_key() {
        let mut ctx = TrialContext::new();
        let err = get_nested_shared::<LockedTable>(&mut ctx, CapacityClass::Tuned).unwrap_err();
        match err {
            BenchError::MissingKey { key, container } => {
                assert_eq!(key, "a@0");
                assert_eq!(container, "locked table");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
