// State handed to every trial.
//
// Holds what the trials share across invocations: the integer behind the
// accessor trials, the buffer slots reassigned by the field-buffer trials
// and the long-lived containers used by the shared population and lookup
// trials.

use crate::buffer::LockedBuffer;
use crate::fixtures::Fixtures;
use crate::store::{LockedTable, PlainMap, SharedStores, Store};

#[derive(Debug, Default)]
pub struct TrialContext {
    pub fixtures: Fixtures,
    pub(crate) an_int: i64,
    pub(crate) locked_slot: LockedBuffer,
    pub(crate) plain_slot: String,
    pub tables: SharedStores<LockedTable>,
    pub maps: SharedStores<PlainMap>,
}

impl TrialContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn an_int(&self) -> i64 {
        self.an_int
    }

    pub fn set_an_int(&mut self, value: i64) {
        self.an_int = value;
    }
}

/// Stores with a long-lived instance in the context.
pub trait HeldStore: Store + Sized {
    /// Borrows the fixtures alongside this kind's shared containers.
    fn split(ctx: &mut TrialContext) -> (&Fixtures, &mut SharedStores<Self>);
}

impl HeldStore for LockedTable {
    fn split(ctx: &mut TrialContext) -> (&Fixtures, &mut SharedStores<Self>) {
        (&ctx.fixtures, &mut ctx.tables)
    }
}

impl HeldStore for PlainMap {
    fn split(ctx: &mut TrialContext) -> (&Fixtures, &mut SharedStores<Self>) {
        (&ctx.fixtures, &mut ctx.maps)
    }
}
